//! ESDF schema loading and resolution.
//!
//! Turns a hand-authored JSON schema document into a fully resolved
//! in-memory model: load, derive the category membership index, attach
//! dependency conditions to their target records, and cross-check every
//! name-based reference. The generators in `esdf-docgen` and `esdf-headers`
//! consume the result.

pub mod attach;
pub mod check;
pub mod error;
pub mod index;
pub mod loader;

pub use attach::{AttachReport, attach_conditions};
pub use check::{CheckIssue, IssueKind, IssueSeverity, SchemaCounts, SchemaReport, check_schema};
pub use error::SchemaError;
pub use index::{CategoryIndex, DEFAULT_CATEGORY, build_category_index};
pub use loader::load_schema;
