//! Formatting ports

mod formatter;

pub use formatter::ImportFormatter;
