//! Step definitions for display request scenarios.

pub mod world;

mod given;
mod then;
mod when;
