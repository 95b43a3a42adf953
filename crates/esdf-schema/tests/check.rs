//! Cross-reference checker tests.

use esdf_model::{Attribute, Dataset, Group, Schema};
use esdf_schema::{IssueKind, build_category_index, check_schema};

fn attribute(name: &str) -> Attribute {
    Attribute {
        name: name.to_string(),
        ..Attribute::default()
    }
}

fn group(name: &str, attributes: &[&str]) -> Group {
    Group {
        name: name.to_string(),
        attributes: attributes.iter().map(|a| (*a).to_string()).collect(),
        ..Group::default()
    }
}

#[test]
fn clean_schema_reports_counts_only() {
    let schema = Schema {
        version: "0.2".to_string(),
        attributes: vec![attribute("energy")],
        groups: vec![group("system", &["energy"])],
        ..Schema::default()
    };
    let index = build_category_index(&schema);
    let report = check_schema(&schema, &index);

    assert!(report.issues.is_empty());
    assert_eq!(report.counts.attributes, 1);
    assert_eq!(report.counts.groups, 1);
    // "others" alone.
    assert_eq!(report.counts.categories, 1);
}

#[test]
fn missing_group_member_is_a_warning() {
    let schema = Schema {
        attributes: vec![attribute("energy")],
        groups: vec![group("system", &["energy", "ghost"])],
        ..Schema::default()
    };
    let index = build_category_index(&schema);
    let report = check_schema(&schema, &index);

    assert!(report.has_missing_references());
    assert!(report.issues.iter().any(|issue| {
        issue.kind == IssueKind::MissingReference
            && issue.message == "attribute ghost not found (group system)"
    }));
}

#[test]
fn missing_dimension_reference_is_reported() {
    let schema = Schema {
        attributes: vec![attribute("energy")],
        datasets: vec![Dataset {
            name: "forces".to_string(),
            dimensions: 1,
            dims: vec!["number_of_atoms".to_string()],
            ..Dataset::default()
        }],
        groups: vec![group("system", &["energy"])],
        ..Schema::default()
    };
    let index = build_category_index(&schema);
    let report = check_schema(&schema, &index);

    assert!(report.has_missing_references());
    assert!(report.issues.iter().any(|issue| issue
        .message
        .contains("dimension number_of_atoms of dataset forces")));
}

#[test]
fn unused_and_multiply_used_attributes_are_flagged() {
    let schema = Schema {
        attributes: vec![attribute("shared"), attribute("orphan")],
        groups: vec![group("a", &["shared"]), group("b", &["shared"])],
        ..Schema::default()
    };
    let index = build_category_index(&schema);
    let report = check_schema(&schema, &index);

    assert!(!report.has_missing_references());
    assert!(report.issues.iter().any(|issue| {
        issue.kind == IssueKind::UnusedAttribute
            && issue.message.contains("orphan is not referenced")
    }));
    assert!(report.issues.iter().any(|issue| {
        issue.kind == IssueKind::MultiUse && issue.message == "attribute shared used 2 times"
    }));
}

#[test]
fn subgroup_references_resolve_against_the_subgroup_table() {
    let schema = Schema {
        attributes: vec![attribute("energy")],
        sub_groups: vec![group("symmetry", &["energy"])],
        groups: vec![Group {
            name: "system".to_string(),
            sub_groups: vec!["symmetry".to_string(), "phantom".to_string()],
            ..Group::default()
        }],
        ..Schema::default()
    };
    let index = build_category_index(&schema);
    let report = check_schema(&schema, &index);

    let messages: Vec<&str> = report
        .issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect();
    assert!(messages.contains(&"subgroup phantom not found (group system)"));
    assert!(!messages.iter().any(|m| m.contains("symmetry not found")));
}
