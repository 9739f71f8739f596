//! Configuration System
//!
//! Two levels:
//! - Builder: `SplitConfig::new(dir).backup(false)`
//! - YAML: `SplitConfig::from_yaml("gosplit.yaml")` (versioned schema, v1)
//!
//! # Examples
//!
//! ```rust,ignore
//! use gosplit::config::{CollisionPolicy, SplitConfig};
//!
//! let config = SplitConfig::new("./pkg/geo").collision(CollisionPolicy::Reject);
//! config.validate()?;
//! ```

pub mod error;
pub mod io;
pub mod split_config;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigFileV1;
pub use split_config::{CollisionPolicy, FormatterKind, ImplicitRepetition, SplitConfig};
