//! Group identifier and specification-table headers.
//!
//! Covers the top-level `Groups` list followed by `SubGroups`, with one
//! continuous ordinal sequence, so every group-shaped record owns an
//! identifier and a registrable specification table.

use tracing::warn;

use esdf_model::{Group, NameIndex, Schema};

use crate::naming::{attributes_name, id_name, specs_name};

/// Diagnostics accumulated while emitting group specifications.
#[derive(Debug, Clone, Default)]
pub struct GroupSpecsReport {
    /// `(group, attribute)` pairs naming attributes that resolve nowhere.
    pub skipped_attributes: Vec<(String, String)>,
    /// Groups with no resolvable attribute at all; no table is emitted.
    pub empty_groups: Vec<String>,
}

fn all_groups(schema: &Schema) -> impl Iterator<Item = &Group> {
    schema.groups.iter().chain(&schema.sub_groups)
}

/// `#define` constants numbering every group and subgroup.
pub fn render_group_ids(schema: &Schema) -> String {
    let mut buf = String::new();
    buf.push_str("#ifndef ESDF_GROUPS_ID_H\n#define ESDF_GROUPS_ID_H\n\n");
    for (ordinal, group) in all_groups(schema).enumerate() {
        buf.push_str(&format!("#define {} {ordinal}\n", id_name(&group.name)));
    }
    buf.push_str("\n#endif\n");
    buf
}

/// Specification tables plus the registration procedure.
pub fn render_group_specs(schema: &Schema) -> (String, GroupSpecsReport) {
    let attributes = schema.attribute_index();
    let mut report = GroupSpecsReport::default();
    let mut buf = String::new();
    buf.push_str("#ifndef ESDF_GROUPS_SPECS_H\n#define ESDF_GROUPS_SPECS_H\n\n");
    buf.push_str("#include \"esdf_groups_ID.h\"\n");
    buf.push_str("#include \"esdf_attributes_specs.h\"\n\n");

    let mut registered = Vec::new();
    for group in all_groups(schema) {
        let resolved = resolve_attributes(group, &attributes, &mut report);
        if resolved.is_empty() {
            warn!("group {} has no attributes; specs skipped", group.name);
            report.empty_groups.push(group.name.clone());
            continue;
        }

        buf.push_str(&format!(
            "const esdf_attribute_specs_t *{}[] = {{\n",
            attributes_name(&group.name)
        ));
        for name in &resolved {
            buf.push_str(&format!("    &{},\n", specs_name(name)));
        }
        buf.push_str("};\n\n");

        buf.push_str(&format!(
            "const esdf_group_specs_t {} = {{\n    {}, \"{}\", {}, {}\n}};\n\n",
            specs_name(&group.name),
            id_name(&group.name),
            group.name,
            resolved.len(),
            attributes_name(&group.name)
        ));
        registered.push(specs_name(&group.name));
    }

    buf.push_str("void esdf_register_all_group_specs(void) {\n");
    for specs in &registered {
        buf.push_str(&format!("    esdf_group_specs_register(&{specs});\n"));
    }
    buf.push_str("}\n\n#endif\n");

    (buf, report)
}

fn resolve_attributes<'a>(
    group: &'a Group,
    attributes: &NameIndex,
    report: &mut GroupSpecsReport,
) -> Vec<&'a str> {
    let mut resolved = Vec::new();
    for name in &group.attributes {
        if attributes.contains(name) {
            resolved.push(name.as_str());
        } else {
            warn!("attribute {name} not found (group {})", group.name);
            report
                .skipped_attributes
                .push((group.name.clone(), name.clone()));
        }
    }
    resolved
}
