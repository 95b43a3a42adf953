//! Schema document loading.

use std::fs;
use std::path::Path;

use tracing::info;

use esdf_model::Schema;

use crate::error::SchemaError;

/// Load a schema document from a JSON file.
///
/// The only fatal failures in the whole pipeline live here: an unreadable
/// path or a document that is not valid JSON. Everything downstream is
/// accumulate-and-continue.
pub fn load_schema(path: &Path) -> Result<Schema, SchemaError> {
    let text = fs::read_to_string(path).map_err(|source| SchemaError::io(path, source))?;
    let schema: Schema =
        serde_json::from_str(&text).map_err(|source| SchemaError::json(path, source))?;
    info!(
        version = %schema.version,
        attributes = schema.attributes.len(),
        datasets = schema.datasets.len(),
        sub_groups = schema.sub_groups.len(),
        groups = schema.groups.len(),
        dependencies = schema.dependencies.len(),
        "loaded schema {}",
        path.display()
    );
    Ok(schema)
}
