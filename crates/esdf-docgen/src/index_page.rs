//! Top-level index document.

use esdf_model::Schema;

use crate::rst::heading;

const CLOSING: &str = "\
* :ref:`genindex`
* :ref:`search`

";

const LICENSE: &str = "\
This specification is licensed under the Creative Commons \
Attribution-ShareAlike 4.0 International License.
";

/// Render the index page listing every group document in declaration order,
/// followed by the fixed closing boilerplate.
pub fn render_index(schema: &Schema) -> String {
    let mut buf = String::new();
    buf.push_str(&heading("Metadata Specification", 0));
    if !schema.version.is_empty() {
        buf.push_str(&format!("Schema version {}.\n\n", schema.version));
    }
    buf.push_str(".. toctree::\n   :maxdepth: 2\n\n");
    for group in &schema.groups {
        buf.push_str("   ");
        buf.push_str(&group.name);
        buf.push('\n');
    }
    buf.push('\n');
    buf.push_str(&heading("Indices and tables", 0));
    buf.push_str(CLOSING);
    buf.push_str(&heading("License", 0));
    buf.push_str(LICENSE);
    buf
}
