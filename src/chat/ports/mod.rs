//! Port contracts for chat backends.

mod composer;
mod launcher;

pub use composer::{SmsComposer, SmsComposerError, SmsComposerResult};
pub use launcher::{LaunchError, LaunchResult, UriLauncher};
