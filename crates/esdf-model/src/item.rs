//! Shared view over attribute and dataset records.

use std::fmt;

use crate::condition::Condition;
use crate::types::DataType;

/// Whether a name refers to an attribute or a dataset.
///
/// The two record shapes are identical but never interchangeable; every
/// lookup and diagnostic keeps track of which table a name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Attribute,
    Dataset,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemKind::Attribute => "attribute",
            ItemKind::Dataset => "dataset",
        };
        write!(f, "{name}")
    }
}

/// Common accessors for the fields attributes and datasets share.
///
/// Renderers and indexers work through this trait so the same logic applies
/// to both record kinds without collapsing them into one type.
pub trait ItemRecord {
    fn kind(&self) -> ItemKind;
    fn name(&self) -> &str;
    /// Raw data-type tag as written in the schema.
    fn data_type_tag(&self) -> &str;
    fn string_length(&self) -> u64;
    /// Names of the attributes describing this item's array extents.
    fn dims(&self) -> &[String];
    /// Free-text description fragments, concatenated verbatim when rendered.
    fn description(&self) -> &[String];
    fn categories(&self) -> &[String];
    fn conditions(&self) -> &[Condition];

    /// Interpreted data type.
    fn data_type(&self) -> DataType {
        DataType::from_tag(self.data_type_tag())
    }
}
