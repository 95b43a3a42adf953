//! Category indexer tests.

use esdf_model::{Attribute, Dataset, Group, Schema};
use esdf_schema::{DEFAULT_CATEGORY, build_category_index};
use proptest::prelude::*;

fn attribute(name: &str, categories: &[&str]) -> Attribute {
    Attribute {
        name: name.to_string(),
        data_type: "ESDF_DT_DOUBLE".to_string(),
        categories: categories.iter().map(|c| (*c).to_string()).collect(),
        ..Attribute::default()
    }
}

fn dataset(name: &str, categories: &[&str]) -> Dataset {
    Dataset {
        name: name.to_string(),
        data_type: "ESDF_DT_DOUBLE".to_string(),
        categories: categories.iter().map(|c| (*c).to_string()).collect(),
        ..Dataset::default()
    }
}

#[test]
fn uncategorized_items_land_in_default_only() {
    let schema = Schema {
        attributes: vec![attribute("energy", &[]), attribute("spin", &["results"])],
        ..Schema::default()
    };
    let index = build_category_index(&schema);

    assert_eq!(index.attributes_in(DEFAULT_CATEGORY), ["energy"]);
    assert_eq!(index.attributes_in("results"), ["spin"]);
    for category in index.categories() {
        if category != DEFAULT_CATEGORY {
            assert!(!index.attributes_in(category).contains(&"energy".to_string()));
        }
    }
}

#[test]
fn multi_category_items_appear_under_every_label() {
    let schema = Schema {
        attributes: vec![attribute("energy", &["results", "convergence"])],
        ..Schema::default()
    };
    let index = build_category_index(&schema);

    assert_eq!(index.attributes_in("results"), ["energy"]);
    assert_eq!(index.attributes_in("convergence"), ["energy"]);
    assert!(index.attributes_in(DEFAULT_CATEGORY).is_empty());
}

#[test]
fn every_category_has_entries_for_both_kinds() {
    let schema = Schema {
        attributes: vec![attribute("energy", &["results"])],
        datasets: vec![dataset("density", &["fields"])],
        ..Schema::default()
    };
    let index = build_category_index(&schema);

    // "fields" was only ever seen on a dataset; the attribute side still
    // answers, just with nothing in it.
    assert!(index.attributes_in("fields").is_empty());
    assert_eq!(index.datasets_in("fields"), ["density"]);
    assert!(index.datasets_in("results").is_empty());
    assert!(index.categories().contains(&"results".to_string()));
    assert!(index.categories().contains(&"fields".to_string()));
}

#[test]
fn default_category_is_always_last() {
    let schema = Schema {
        attributes: vec![attribute("a", &["x"]), attribute("b", &[])],
        ..Schema::default()
    };
    let index = build_category_index(&schema);
    assert_eq!(index.categories().last().map(String::as_str), Some(DEFAULT_CATEGORY));
}

#[test]
fn group_order_lists_explicit_then_remaining_then_default() {
    let schema = Schema {
        attributes: vec![
            attribute("a", &["alpha"]),
            attribute("b", &["beta"]),
            attribute("c", &["gamma"]),
            attribute("d", &[]),
        ],
        ..Schema::default()
    };
    let index = build_category_index(&schema);
    let group = Group {
        name: "system".to_string(),
        category_order: vec![
            "gamma".to_string(),
            "missing".to_string(),
            "alpha".to_string(),
            "gamma".to_string(),
        ],
        ..Group::default()
    };

    let order = index.ordered_for_group(&group);
    assert_eq!(order, ["gamma", "alpha", "beta", DEFAULT_CATEGORY]);
}

#[test]
fn default_listed_explicitly_still_renders_last() {
    let schema = Schema {
        attributes: vec![attribute("a", &["alpha"])],
        ..Schema::default()
    };
    let index = build_category_index(&schema);
    let group = Group {
        name: "system".to_string(),
        category_order: vec![DEFAULT_CATEGORY.to_string(), "alpha".to_string()],
        ..Group::default()
    };

    let order = index.ordered_for_group(&group);
    assert_eq!(order, ["alpha", DEFAULT_CATEGORY]);
}

proptest! {
    /// Indexing never loses or duplicates an item: each attribute appears
    /// exactly once under each of its labels, or exactly once under the
    /// default label when it has none.
    #[test]
    fn membership_is_exact(specs in prop::collection::vec(
        (
            "[a-z]{1,8}",
            prop::collection::btree_set("[a-d]", 0..3),
        ),
        1..20,
    )) {
        let mut attributes = Vec::new();
        let mut seen = std::collections::BTreeSet::new();
        for (name, labels) in &specs {
            if !seen.insert(name.clone()) {
                continue;
            }
            let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
            attributes.push(attribute(name, &labels));
        }
        let schema = Schema { attributes: attributes.clone(), ..Schema::default() };
        let index = build_category_index(&schema);

        for record in &attributes {
            if record.categories.is_empty() {
                let hits = index
                    .attributes_in(DEFAULT_CATEGORY)
                    .iter()
                    .filter(|n| **n == record.name)
                    .count();
                prop_assert_eq!(hits, 1);
            } else {
                for label in &record.categories {
                    let hits = index
                        .attributes_in(label)
                        .iter()
                        .filter(|n| **n == record.name)
                        .count();
                    prop_assert_eq!(hits, 1);
                }
                let default_hits = index
                    .attributes_in(DEFAULT_CATEGORY)
                    .iter()
                    .filter(|n| **n == record.name)
                    .count();
                prop_assert_eq!(default_hits, 0);
            }
        }
    }
}
