//! C header generation for ESDF schemas.
//!
//! Emits two paired artifacts for attributes and two for groups: identifier
//! constants (`#define` ordinals in declaration order) and specification
//! tables referencing them, plus a procedure registering every group table.
//! The emission is pure text assembly over an already-loaded schema; running
//! it twice on the same document yields identical bytes.

mod attributes;
mod groups;
mod naming;
mod write;

pub use attributes::{render_attribute_ids, render_attribute_specs};
pub use groups::{GroupSpecsReport, render_group_ids, render_group_specs};
pub use write::write_headers;
