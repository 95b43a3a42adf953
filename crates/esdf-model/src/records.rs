//! Attribute, dataset, and group records.
//!
//! Field renames follow the hand-authored JSON key spelling. Every key
//! except `Name` is optional; an absent key means "no such feature for this
//! record" and is never an error.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::condition::Condition;
use crate::item::{ItemKind, ItemRecord};

/// A scalar or small fixed-shape metadata field attached to a group.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attribute {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Data_type", default)]
    pub data_type: String,
    // Older schema revisions spelled this without the underscore.
    #[serde(rename = "String_length", alias = "Stringlength", default)]
    pub string_length: u64,
    /// Number of array extents; zero for scalars.
    #[serde(rename = "Dimensions", default)]
    pub dimensions: u64,
    /// Attribute names describing each extent, in order.
    #[serde(rename = "Dims_definitions", default)]
    pub dims: Vec<String>,
    #[serde(rename = "Description", default)]
    pub description: Vec<String>,
    #[serde(rename = "Category", default)]
    pub categories: Vec<String>,
    /// Populated by the dependency attacher after load; never part of the
    /// schema document itself.
    #[serde(skip)]
    pub conditions: Vec<Condition>,
}

impl ItemRecord for Attribute {
    fn kind(&self) -> ItemKind {
        ItemKind::Attribute
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn data_type_tag(&self) -> &str {
        &self.data_type
    }
    fn string_length(&self) -> u64 {
        self.string_length
    }
    fn dims(&self) -> &[String] {
        &self.dims
    }
    fn description(&self) -> &[String] {
        &self.description
    }
    fn categories(&self) -> &[String] {
        &self.categories
    }
    fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

/// A named bulk data object attached to a group.
///
/// Structurally parallel to [`Attribute`] but semantically distinct; the two
/// are kept in separate tables and never cross-resolved.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Data_type", default)]
    pub data_type: String,
    #[serde(rename = "String_length", alias = "Stringlength", default)]
    pub string_length: u64,
    #[serde(rename = "Dimensions", default)]
    pub dimensions: u64,
    #[serde(rename = "Dims_definitions", default)]
    pub dims: Vec<String>,
    #[serde(rename = "Description", default)]
    pub description: Vec<String>,
    #[serde(rename = "Category", default)]
    pub categories: Vec<String>,
    #[serde(skip)]
    pub conditions: Vec<Condition>,
}

impl ItemRecord for Dataset {
    fn kind(&self) -> ItemKind {
        ItemKind::Dataset
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn data_type_tag(&self) -> &str {
        &self.data_type
    }
    fn string_length(&self) -> u64 {
        self.string_length
    }
    fn dims(&self) -> &[String] {
        &self.dims
    }
    fn description(&self) -> &[String] {
        &self.description
    }
    fn categories(&self) -> &[String] {
        &self.categories
    }
    fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

/// A named container of attributes, datasets, and nested subgroups.
///
/// The same shape serves both the top-level `Groups` list and the `SubGroups`
/// list; subgroup membership is a weak reference by name, resolved through
/// the subgroup table at render time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Group {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: Vec<String>,
    #[serde(rename = "Attributes", default)]
    pub attributes: Vec<String>,
    #[serde(rename = "Datasets", default)]
    pub datasets: Vec<String>,
    #[serde(rename = "Sub_Groups", default)]
    pub sub_groups: Vec<String>,
    /// Explicit category render order; unlisted categories follow in
    /// discovery order, the default category always last.
    #[serde(rename = "Category_Order", default)]
    pub category_order: Vec<String>,
    /// Per-category description override replacing the auto-generated
    /// heading.
    #[serde(rename = "Category_Descriptions", default)]
    pub category_descriptions: BTreeMap<String, Vec<String>>,
    /// Disjunction lists: each inner list names alternatives of which at
    /// least one must be present.
    #[serde(rename = "Required_Attributes", default)]
    pub required_attributes: Vec<Vec<String>>,
    #[serde(rename = "Required_Datasets", default)]
    pub required_datasets: Vec<Vec<String>>,
    #[serde(rename = "Required_Sub_Groups", default)]
    pub required_sub_groups: Vec<Vec<String>>,
}
