//! Splitting building blocks

pub mod classifier;
pub mod header;
pub mod method_resolver;
pub mod naming;
pub mod unit_writer;

pub use classifier::DeclarationClassifier;
pub use header::build_header;
pub use method_resolver::MethodResolver;
pub use naming::{special_filename, unit_filename, SpecialFilename};
pub use unit_writer::UnitWriter;
