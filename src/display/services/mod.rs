//! Display request coordination services.

mod coordinator;
mod error;
mod request;

pub use coordinator::DisplayRequestCoordinator;
pub use error::{DisplayRequestError, DisplayRequestResult};
pub use request::DisplayRequest;
