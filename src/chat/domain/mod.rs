//! Domain types for SMS compose requests.

mod error;
mod message;
mod request;

pub use error::ChatDomainError;
pub use message::ChatMessage;
pub use request::{ComposeSmsRequest, RECIPIENT_SEPARATOR, join_recipients};
