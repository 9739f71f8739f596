/*
 * gosplit - one file per Go declaration
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (SplitError, Span)
 * - config/      : SplitConfig, YAML loading
 * - features/    : Vertical slices (parsing → splitting → formatting → commit)
 * - pipeline/    : End-to-end run
 */

#![allow(clippy::new_without_default)] // Stateless components keep an explicit new()
#![allow(clippy::module_inception)] // Module naming intentional

pub mod config;
pub mod features;
pub mod pipeline;
pub mod shared;

// Re-exports
pub use config::{CollisionPolicy, FormatterKind, ImplicitRepetition, SplitConfig};
pub use features::splitting::{unit_filename, OutputUnit, UnitSet};
pub use pipeline::{SplitPipeline, SplitPlan, SplitReport};
pub use shared::models::{ErrorCategory, ReceiverShape, Result, SplitError};
