//! Writing the generated headers to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use esdf_model::Schema;

use crate::attributes::{render_attribute_ids, render_attribute_specs};
use crate::groups::{render_group_ids, render_group_specs};

/// Emit all four header files into the output directory. Returns the
/// written paths in output order.
pub fn write_headers(schema: &Schema, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir.display()))?;
    let (group_specs, _report) = render_group_specs(schema);
    let outputs = [
        ("esdf_attributes_ID.h", render_attribute_ids(schema)),
        ("esdf_attributes_specs.h", render_attribute_specs(schema)),
        ("esdf_groups_ID.h", render_group_ids(schema)),
        ("esdf_groups_specs.h", group_specs),
    ];

    let mut written = Vec::new();
    for (file_name, text) in outputs {
        let path = out_dir.join(file_name);
        fs::write(&path, text).with_context(|| format!("write {}", path.display()))?;
        info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
