//! Shared module - Common types used by every feature
//!
//! Kept free of tree-sitter and process concerns.

pub mod models;

// Re-exports for convenience
pub use models::*;
