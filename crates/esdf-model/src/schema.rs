//! The top-level schema document.

use serde::Deserialize;

use crate::condition::Condition;
use crate::lookup::NameIndex;
use crate::records::{Attribute, Dataset, Group};

/// A complete schema document as authored, in declaration order.
///
/// Every list is optional in the JSON; absence deserializes to an empty
/// list. Record order is semantic: it drives identifier numbering in the
/// header generator and document order in the documentation generator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    #[serde(rename = "Version", default)]
    pub version: String,
    #[serde(rename = "Attributes", default)]
    pub attributes: Vec<Attribute>,
    #[serde(rename = "Datasets", default)]
    pub datasets: Vec<Dataset>,
    /// Group-shaped records referenced by name from `Sub_Groups` lists.
    #[serde(rename = "SubGroups", default)]
    pub sub_groups: Vec<Group>,
    #[serde(rename = "Groups", default)]
    pub groups: Vec<Group>,
    /// Drained by the dependency attacher, which moves each condition onto
    /// its target record.
    #[serde(rename = "Dependencies", default)]
    pub dependencies: Vec<Condition>,
}

impl Schema {
    /// Name-to-position table for the attribute list.
    pub fn attribute_index(&self) -> NameIndex {
        NameIndex::new(self.attributes.iter().map(|a| a.name.as_str()))
    }

    /// Name-to-position table for the dataset list.
    pub fn dataset_index(&self) -> NameIndex {
        NameIndex::new(self.datasets.iter().map(|d| d.name.as_str()))
    }

    /// Name-to-position table for the subgroup list.
    pub fn sub_group_index(&self) -> NameIndex {
        NameIndex::new(self.sub_groups.iter().map(|g| g.name.as_str()))
    }
}
