//! Splitting use cases

mod collect;

pub use collect::CollectionOrchestrator;
