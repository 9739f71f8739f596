//! End-to-end split pipeline

pub mod split_pipeline;

pub use split_pipeline::{PlannedUnit, SplitPipeline, SplitPlan, SplitReport};
