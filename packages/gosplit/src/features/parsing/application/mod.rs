//! Parsing use cases

mod load_package;

pub use load_package::{is_package_source, PackageLoader};
