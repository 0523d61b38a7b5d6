//! Step definitions for SMS compose scenarios.

pub mod world;

mod given;
mod then;
mod when;
