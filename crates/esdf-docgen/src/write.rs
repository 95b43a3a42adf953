//! Writing the rendered documents to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use esdf_model::Schema;
use esdf_schema::CategoryIndex;

use crate::group::{RenderContext, render_group_document};
use crate::index_page::render_index;

/// Render and write one document per top-level group plus the index page.
///
/// Documents are written sequentially, each closed before the next begins.
/// Returns the written paths in output order.
pub fn write_docs(schema: &Schema, index: &CategoryIndex, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir.display()))?;
    let ctx = RenderContext::new(schema, index);
    let mut written = Vec::new();

    for group in &schema.groups {
        let path = out_dir.join(format!("{}.rst", group.name));
        let document = render_group_document(group, &ctx);
        fs::write(&path, document).with_context(|| format!("write {}", path.display()))?;
        info!("wrote {}", path.display());
        written.push(path);
    }

    let index_path = out_dir.join("index.rst");
    fs::write(&index_path, render_index(schema))
        .with_context(|| format!("write {}", index_path.display()))?;
    info!("wrote {}", index_path.display());
    written.push(index_path);

    Ok(written)
}
