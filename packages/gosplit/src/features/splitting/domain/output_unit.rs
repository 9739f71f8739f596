//! Output units: one generated file each

use indexmap::IndexMap;

/// A generated file: shared header plus rendered declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputUnit {
    pub filename: String,
    /// Declaration that created the unit
    pub owner: String,
    pub header: String,
    pub fragments: Vec<String>,
}

impl OutputUnit {
    pub fn new(filename: impl Into<String>, owner: impl Into<String>, header: &str) -> Self {
        Self {
            filename: filename.into(),
            owner: owner.into(),
            header: header.to_string(),
            fragments: Vec::new(),
        }
    }

    pub fn with_fragment(mut self, fragment: String) -> Self {
        self.fragments.push(fragment);
        self
    }

    pub fn push_fragment(&mut self, fragment: String) {
        self.fragments.push(fragment);
    }

    /// Final file contents
    pub fn contents(&self) -> String {
        let mut out = String::with_capacity(
            self.header.len() + self.fragments.iter().map(String::len).sum::<usize>(),
        );
        out.push_str(&self.header);
        for fragment in &self.fragments {
            out.push_str(fragment);
        }
        out
    }
}

/// Insertion-ordered map of filename to unit
#[derive(Debug, Clone, Default)]
pub struct UnitSet {
    units: IndexMap<String, OutputUnit>,
}

impl UnitSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a unit, returning the one it replaced
    ///
    /// A replaced unit keeps its original position.
    pub fn insert(&mut self, unit: OutputUnit) -> Option<OutputUnit> {
        self.units.insert(unit.filename.clone(), unit)
    }

    pub fn get(&self, filename: &str) -> Option<&OutputUnit> {
        self.units.get(filename)
    }

    pub fn get_mut(&mut self, filename: &str) -> Option<&mut OutputUnit> {
        self.units.get_mut(filename)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OutputUnit> {
        self.units.values()
    }

    pub fn filenames(&self) -> Vec<String> {
        self.units.keys().cloned().collect()
    }
}
