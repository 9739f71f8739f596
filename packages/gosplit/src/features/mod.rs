//! Feature modules
//!
//! Each feature is a vertical slice:
//! - `parsing` - package directory → Module
//! - `splitting` - Module → output units (core)
//! - `formatting` - import-resolving formatter
//! - `commit` - scratch directory, backups, rollback

pub mod commit;
pub mod formatting;
pub mod parsing;
pub mod splitting;
