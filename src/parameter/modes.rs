//! Mode groups: named, mutually exclusive parameter lists with insertion
//! order preserved. Exactly one mode is active per run.

use indexmap::IndexMap;

use crate::parameter::ParameterSpec;

#[derive(Debug, Clone, Default)]
pub struct ModeSet {
    modes: IndexMap<String, Vec<ParameterSpec>>,
}

impl ModeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set with a single mode, the degenerate case where the form's mode
    /// switcher renders as a static label.
    pub fn single(name: impl Into<String>, specs: Vec<ParameterSpec>) -> Self {
        let mut set = Self::new();
        set.insert(name, specs);
        set
    }

    pub fn insert(&mut self, name: impl Into<String>, specs: Vec<ParameterSpec>) {
        self.modes.insert(name.into(), specs);
    }

    pub fn get(&self, name: &str) -> Option<&[ParameterSpec]> {
        self.modes.get(name).map(Vec::as_slice)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Vec<ParameterSpec>> {
        self.modes.get_mut(name)
    }

    /// The mode that is active before the user switches: the first inserted.
    pub fn active_default(&self) -> Option<&str> {
        self.modes.keys().next().map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
