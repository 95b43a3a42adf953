//! ESDF metadata schema model.
//!
//! Types describing a hand-authored schema for the ESDF metadata model:
//! attributes, datasets, groups and subgroups, conditional dependency rules,
//! and the value types they carry. The schema is deserialized from JSON by
//! `esdf-schema`; this crate only defines the shapes.

pub mod condition;
pub mod item;
pub mod lookup;
pub mod records;
pub mod schema;
pub mod types;

pub use condition::{Condition, Literal, RequiredValue, Rule, Trigger};
pub use item::{ItemKind, ItemRecord};
pub use lookup::NameIndex;
pub use records::{Attribute, Dataset, Group};
pub use schema::Schema;
pub use types::DataType;
