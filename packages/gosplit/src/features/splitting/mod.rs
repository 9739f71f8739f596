//! Splitting Feature
//!
//! Redistributes the declarations of a `Module` into output units, one
//! file per declaration identifier.
//!
//! ## Structure
//! - `domain/` - Declaration, OutputUnit, UnitSet
//! - `infrastructure/` - naming, header, classifier, unit writer, method resolver
//! - `application/` - CollectionOrchestrator (pass 1 then pass 2)

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports
pub use application::CollectionOrchestrator;
pub use domain::{Declaration, OutputUnit, UnitSet};
pub use infrastructure::{build_header, special_filename, unit_filename, SpecialFilename};
