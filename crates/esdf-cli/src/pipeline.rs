//! End-to-end generation pipelines.
//!
//! One function per subcommand: load the schema, resolve it, emit the
//! derived artifacts. Everything runs sequentially; each output document is
//! written and closed before the next begins.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info_span;

use esdf_docgen::write_docs;
use esdf_headers::write_headers;
use esdf_schema::{
    AttachReport, SchemaReport, attach_conditions, build_category_index, check_schema, load_schema,
};

/// Outcome of a documentation run.
#[derive(Debug)]
pub struct DocsResult {
    pub written: Vec<PathBuf>,
    pub attach: AttachReport,
}

/// Render all group documents plus the index page.
pub fn run_docs(schema_path: &Path, out_dir: &Path) -> Result<DocsResult> {
    let span = info_span!("docs", schema = %schema_path.display());
    let _guard = span.enter();
    let mut schema = load_schema(schema_path)?;
    let attach = attach_conditions(&mut schema);
    let index = build_category_index(&schema);
    let written = write_docs(&schema, &index, out_dir)?;
    Ok(DocsResult { written, attach })
}

/// Emit the identifier and specification headers.
pub fn run_headers(schema_path: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let span = info_span!("headers", schema = %schema_path.display());
    let _guard = span.enter();
    let schema = load_schema(schema_path)?;
    write_headers(&schema, out_dir)
}

/// Load and cross-check a schema without writing anything.
pub fn run_check(schema_path: &Path) -> Result<SchemaReport> {
    let span = info_span!("check", schema = %schema_path.display());
    let _guard = span.enter();
    let schema = load_schema(schema_path)?;
    let index = build_category_index(&schema);
    Ok(check_schema(&schema, &index))
}
