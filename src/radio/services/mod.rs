//! Public radio catalogue and radio handles.

mod catalog;
mod error;
mod handle;

pub use catalog::RadioCatalog;
pub use error::{RadioServiceError, RadioServiceResult};
pub use handle::Radio;
