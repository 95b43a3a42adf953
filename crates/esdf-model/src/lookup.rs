//! Name-to-position lookup tables.

use std::collections::BTreeMap;

/// Maps record names to their position in the declaring list.
///
/// Schema records refer to each other by name (a group's attribute list, a
/// dimension definition, a condition target). Those weak references are
/// resolved once, after load, through one of these tables; a miss is a
/// reportable diagnostic, never a panic.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    map: BTreeMap<String, usize>,
}

impl NameIndex {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for (position, name) in names.into_iter().enumerate() {
            // First declaration wins on duplicate names.
            map.entry(name.as_ref().to_string()).or_insert(position);
        }
        Self { map }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.map.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
