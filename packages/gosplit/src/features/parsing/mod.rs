//! Parsing Feature
//!
//! Turns one package directory into a `Module`.
//!
//! ## Structure
//! - `domain/` - Module, SourceFile and syntax-level declaration models
//! - `ports/` - Parser trait
//! - `application/` - PackageLoader
//! - `infrastructure/` - tree-sitter Go parser, comment attachment

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use application::PackageLoader;
pub use domain::{Module, SourceFile};
pub use infrastructure::GoParser;
pub use ports::Parser;
