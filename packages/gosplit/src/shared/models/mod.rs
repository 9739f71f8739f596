//! Shared models

mod error;
mod span;

pub use error::{ErrorCategory, ReceiverShape, Result, SplitError};
pub use span::Span;
