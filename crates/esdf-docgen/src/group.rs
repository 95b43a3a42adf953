//! Recursive group rendering.
//!
//! One rendered document per top-level group. Subgroups render into their
//! parent's document, one heading depth deeper, after the parent's
//! description and mandatory-subgroup list but before the parent's own
//! category sections.

use std::collections::BTreeMap;

use tracing::warn;

use esdf_model::{Attribute, Dataset, Group, Schema};
use esdf_schema::CategoryIndex;

use crate::item::render_item;
use crate::rst::{capitalize, escape, heading, push_disjunctions};

/// Resolved lookup tables shared by every render call.
pub struct RenderContext<'a> {
    index: &'a CategoryIndex,
    attributes: BTreeMap<&'a str, &'a Attribute>,
    datasets: BTreeMap<&'a str, &'a Dataset>,
    sub_groups: BTreeMap<&'a str, &'a Group>,
}

impl<'a> RenderContext<'a> {
    pub fn new(schema: &'a Schema, index: &'a CategoryIndex) -> Self {
        Self {
            index,
            attributes: schema
                .attributes
                .iter()
                .map(|a| (a.name.as_str(), a))
                .collect(),
            datasets: schema
                .datasets
                .iter()
                .map(|d| (d.name.as_str(), d))
                .collect(),
            sub_groups: schema
                .sub_groups
                .iter()
                .map(|g| (g.name.as_str(), g))
                .collect(),
        }
    }
}

/// Render one top-level group into a complete document.
pub fn render_group_document(group: &Group, ctx: &RenderContext<'_>) -> String {
    let mut buf = String::new();
    render_group(&mut buf, group, 0, ctx);
    buf
}

/// Append one group at the given nesting depth.
pub fn render_group(buf: &mut String, group: &Group, depth: usize, ctx: &RenderContext<'_>) {
    buf.push_str(&heading(&capitalize(&escape(&group.name)), depth));

    if !group.description.is_empty() {
        for fragment in &group.description {
            buf.push_str(fragment);
        }
        buf.push_str("\n\n");
    }

    if !group.required_sub_groups.is_empty() {
        buf.push_str(&heading("Mandatory Subgroups", depth + 1));
        push_disjunctions(buf, &group.required_sub_groups);
    }

    for name in &group.sub_groups {
        match ctx.sub_groups.get(name.as_str()) {
            Some(sub_group) => render_group(buf, sub_group, depth + 1, ctx),
            None => warn!("subgroup {name} not found (group {}); skipped", group.name),
        }
    }

    for category in ctx.index.ordered_for_group(group) {
        render_category(buf, group, category, depth, ctx);
    }

    if !group.required_attributes.is_empty() {
        buf.push_str(&heading("Mandatory Attributes", depth + 1));
        push_disjunctions(buf, &group.required_attributes);
    }

    if !group.required_datasets.is_empty() {
        buf.push_str(&heading("Mandatory Datasets", depth + 1));
        push_disjunctions(buf, &group.required_datasets);
    }
}

fn render_category(
    buf: &mut String,
    group: &Group,
    category: &str,
    depth: usize,
    ctx: &RenderContext<'_>,
) {
    let category_attributes = ctx.index.attributes_in(category);
    let category_datasets = ctx.index.datasets_in(category);
    // Iterate the group's declared order, keeping members of this category.
    let attributes: Vec<&str> = group
        .attributes
        .iter()
        .filter(|name| category_attributes.contains(*name))
        .map(String::as_str)
        .collect();
    let datasets: Vec<&str> = group
        .datasets
        .iter()
        .filter(|name| category_datasets.contains(*name))
        .map(String::as_str)
        .collect();
    if attributes.is_empty() && datasets.is_empty() {
        return;
    }

    match group.category_descriptions.get(category) {
        Some(fragments) => {
            for fragment in fragments {
                buf.push_str(fragment);
            }
            buf.push_str("\n\n");
        }
        None => buf.push_str(&heading(&capitalize(&escape(category)), depth + 1)),
    }

    if !attributes.is_empty() {
        buf.push_str(&heading("Attributes", depth + 2));
        for name in attributes {
            if let Some(attribute) = ctx.attributes.get(name) {
                render_item(buf, *attribute);
            }
        }
    }
    if !datasets.is_empty() {
        buf.push_str(&heading("Datasets", depth + 2));
        for name in datasets {
            if let Some(dataset) = ctx.datasets.get(name) {
                render_item(buf, *dataset);
            }
        }
    }
}
