//! reStructuredText documentation generation for ESDF schemas.
//!
//! Renders one document per top-level group (description, mandatory-member
//! sections, nested subgroups, category-ordered attribute and dataset
//! sections with conditional requirement blocks) plus a top-level index
//! page.

mod group;
mod index_page;
mod item;
mod rst;
mod write;

pub use group::{RenderContext, render_group, render_group_document};
pub use index_page::render_index;
pub use item::render_item;
pub use write::write_docs;
