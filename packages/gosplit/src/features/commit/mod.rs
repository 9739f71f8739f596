//! Commit Feature
//!
//! Materializes units in a scratch directory, then replaces the original
//! package files with the formatted results.
//!
//! ## Structure
//! - `scratch` - temporary workspace the formatter runs in
//! - `committer` - backup/remove originals, write units, roll back on failure

pub mod committer;
pub mod scratch;

// Re-exports
pub use committer::{CommitReport, Committer};
pub use scratch::{GeneratedFile, ScratchDir};
