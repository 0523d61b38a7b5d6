//! Chat message services.

mod error;
mod manager;

pub use error::{ChatServiceError, ChatServiceResult};
pub use manager::ChatMessageManager;
