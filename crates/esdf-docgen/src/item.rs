//! Rendering of a single attribute or dataset entry.

use esdf_model::{Condition, ItemRecord, Trigger};

use crate::rst::{escape, push_disjunctions};

/// Append one item entry: anchor, emphasized name, type annotation,
/// dimension cross-references, description, and any attached conditional
/// requirement blocks.
pub fn render_item(buf: &mut String, item: &dyn ItemRecord) {
    buf.push_str(".. _");
    buf.push_str(item.name());
    buf.push_str(":\n\n");

    buf.push_str("**");
    buf.push_str(&escape(item.name()));
    buf.push_str("** ");
    buf.push_str(&item.data_type().annotation(item.string_length()));
    for dim in item.dims() {
        buf.push_str(&format!(" [:ref:`{dim}`]"));
    }
    buf.push('\n');

    if !item.description().is_empty() {
        buf.push('\n');
        for fragment in item.description() {
            buf.push_str(fragment);
        }
        buf.push('\n');
    }
    buf.push('\n');

    for condition in item.conditions() {
        render_condition(buf, item.name(), condition);
    }
}

fn render_condition(buf: &mut String, target: &str, condition: &Condition) {
    match condition.trigger() {
        Trigger::Present => {
            buf.push_str(&format!("If ``{target}`` is present then:\n\n"));
        }
        Trigger::Equals(value) => {
            buf.push_str(&format!("If ``{target}`` == ``{value}`` then:\n\n"));
        }
    }
    for rule in &condition.rules {
        if !rule.required_attributes.is_empty() {
            buf.push_str("Required Attributes:\n\n");
            push_disjunctions(buf, &rule.required_attributes);
        }
        if !rule.required_datasets.is_empty() {
            buf.push_str("Required Datasets:\n\n");
            push_disjunctions(buf, &rule.required_datasets);
        }
        if let Some(required) = &rule.required_value
            && let Some(name) = required.name()
        {
            buf.push_str(&format!(
                "``{name}`` must be set to ``{}``.\n\n",
                required.value
            ));
        }
    }
}
