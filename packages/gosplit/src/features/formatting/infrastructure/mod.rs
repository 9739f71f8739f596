//! Formatter implementations

mod goimports;
mod noop;

pub use goimports::GoImports;
pub use noop::NoopFormatter;
