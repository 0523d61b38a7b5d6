//! Port contracts for keep-awake backends.

mod keep_awake;

pub use keep_awake::{KeepAwakeBackend, KeepAwakeError, KeepAwakeResult};
