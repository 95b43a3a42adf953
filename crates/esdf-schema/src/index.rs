//! Category discovery and membership indexing.

use std::collections::BTreeMap;

use tracing::info;

use esdf_model::{Group, ItemRecord, Schema};

/// Reserved label for items that declare no category of their own. Always
/// renders last.
pub const DEFAULT_CATEGORY: &str = "others";

/// Membership index over all attribute and dataset records.
///
/// Categories are derived, not declared: the label set is the union of every
/// record's category list plus the reserved default. Discovery order is kept
/// explicitly so rendered output is reproducible across runs. Every
/// discovered label has an entry in both membership maps, possibly empty, so
/// lookups during rendering never fail.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    categories: Vec<String>,
    attributes: BTreeMap<String, Vec<String>>,
    datasets: BTreeMap<String, Vec<String>>,
}

impl CategoryIndex {
    /// All discovered labels in discovery order, the default label last.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Attribute names belonging to a category, in declaration order.
    pub fn attributes_in(&self, category: &str) -> &[String] {
        self.attributes.get(category).map_or(&[], Vec::as_slice)
    }

    /// Dataset names belonging to a category, in declaration order.
    pub fn datasets_in(&self, category: &str) -> &[String] {
        self.datasets.get(category).map_or(&[], Vec::as_slice)
    }

    /// Effective category render order for one group.
    ///
    /// The group's explicit order list comes first, filtered to labels that
    /// were actually discovered and deduplicated; any remaining labels follow
    /// in discovery order; the default label is always last regardless of
    /// where the group listed it.
    pub fn ordered_for_group<'a>(&'a self, group: &'a Group) -> Vec<&'a str> {
        let mut ordered: Vec<&str> = Vec::new();
        for label in &group.category_order {
            if label == DEFAULT_CATEGORY {
                continue;
            }
            if self.attributes.contains_key(label) && !ordered.contains(&label.as_str()) {
                ordered.push(label);
            }
        }
        for label in &self.categories {
            if label == DEFAULT_CATEGORY {
                continue;
            }
            if !ordered.contains(&label.as_str()) {
                ordered.push(label);
            }
        }
        ordered.push(DEFAULT_CATEGORY);
        ordered
    }
}

/// Build the category index for a schema.
///
/// Total over well-formed input: an item with no category list lands in the
/// default category exactly once, an item with N labels is indexed under all
/// N of them.
pub fn build_category_index(schema: &Schema) -> CategoryIndex {
    let mut index = CategoryIndex::default();
    index.attributes.insert(DEFAULT_CATEGORY.to_string(), Vec::new());
    index.datasets.insert(DEFAULT_CATEGORY.to_string(), Vec::new());

    for attribute in &schema.attributes {
        insert_item(&mut index, attribute, true);
    }
    for dataset in &schema.datasets {
        insert_item(&mut index, dataset, false);
    }

    // Both maps carry every label, including ones seen only on the other
    // record kind.
    for label in &index.categories {
        index.attributes.entry(label.clone()).or_default();
        index.datasets.entry(label.clone()).or_default();
    }
    index.categories.push(DEFAULT_CATEGORY.to_string());

    info!(
        categories = index.categories.len(),
        "indexed {} attributes and {} datasets",
        schema.attributes.len(),
        schema.datasets.len()
    );
    index
}

fn insert_item(index: &mut CategoryIndex, item: &dyn ItemRecord, is_attribute: bool) {
    if item.categories().is_empty() {
        let members = if is_attribute {
            &mut index.attributes
        } else {
            &mut index.datasets
        };
        members
            .entry(DEFAULT_CATEGORY.to_string())
            .or_default()
            .push(item.name().to_string());
        return;
    }
    for label in item.categories() {
        if label != DEFAULT_CATEGORY && !index.categories.contains(label) {
            index.categories.push(label.clone());
        }
        let members = if is_attribute {
            &mut index.attributes
        } else {
            &mut index.datasets
        };
        members
            .entry(label.clone())
            .or_default()
            .push(item.name().to_string());
    }
}
