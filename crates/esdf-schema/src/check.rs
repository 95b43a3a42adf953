//! Cross-reference checking.
//!
//! Verifies that every name-based weak reference in the schema resolves:
//! group membership lists, dimension definitions, disjunction alternatives,
//! and pending dependency targets. Also reports attributes no group ever
//! references and attributes shared by several groups. Nothing here is
//! fatal; the generators run on a best-effort document either way.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{info, warn};

use esdf_model::{Group, ItemRecord, NameIndex, Schema};

use crate::index::CategoryIndex;

/// Classification of a check finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A name points at a record that does not exist.
    MissingReference,
    /// An attribute is defined but referenced by no group.
    UnusedAttribute,
    /// An attribute is referenced by more than one group.
    MultiUse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Info,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckIssue {
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    pub message: String,
}

impl CheckIssue {
    fn new(kind: IssueKind, message: String) -> Self {
        let severity = match kind {
            IssueKind::MultiUse => IssueSeverity::Info,
            _ => IssueSeverity::Warning,
        };
        Self {
            kind,
            severity,
            message,
        }
    }
}

/// Record counts discovered in the schema.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SchemaCounts {
    pub attributes: usize,
    pub datasets: usize,
    pub groups: usize,
    pub sub_groups: usize,
    pub categories: usize,
    pub dependencies: usize,
}

/// Full check outcome, serializable for machine-readable summaries.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaReport {
    pub schema_version: String,
    pub counts: SchemaCounts,
    pub issues: Vec<CheckIssue>,
}

impl SchemaReport {
    pub fn has_missing_references(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.kind == IssueKind::MissingReference)
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }
}

/// Run all cross-reference checks against a loaded schema.
pub fn check_schema(schema: &Schema, index: &CategoryIndex) -> SchemaReport {
    let attributes = schema.attribute_index();
    let datasets = schema.dataset_index();
    let sub_groups = schema.sub_group_index();
    let mut issues = Vec::new();
    let mut use_counter: BTreeMap<&str, usize> = BTreeMap::new();
    for attribute in &schema.attributes {
        use_counter.insert(&attribute.name, 0);
    }

    for item in &schema.attributes {
        check_dims(item, &attributes, &mut issues);
    }
    for item in &schema.datasets {
        check_dims(item, &attributes, &mut issues);
    }

    for group in schema.groups.iter().chain(&schema.sub_groups) {
        check_group(
            group,
            &attributes,
            &datasets,
            &sub_groups,
            &mut use_counter,
            &mut issues,
        );
    }

    // Pending, not-yet-attached dependency targets.
    for condition in &schema.dependencies {
        match condition.target() {
            Some((kind, name)) => {
                let table = match kind {
                    esdf_model::ItemKind::Attribute => &attributes,
                    esdf_model::ItemKind::Dataset => &datasets,
                };
                if !table.contains(name) {
                    issues.push(CheckIssue::new(
                        IssueKind::MissingReference,
                        format!("{kind} {name} not found (dependency target)"),
                    ));
                }
            }
            None => issues.push(CheckIssue::new(
                IssueKind::MissingReference,
                "dependency condition names no target".to_string(),
            )),
        }
    }

    for (name, count) in &use_counter {
        match count {
            0 => issues.push(CheckIssue::new(
                IssueKind::UnusedAttribute,
                format!("attribute {name} is not referenced by any group"),
            )),
            1 => {}
            _ => issues.push(CheckIssue::new(
                IssueKind::MultiUse,
                format!("attribute {name} used {count} times"),
            )),
        }
    }

    for issue in &issues {
        match issue.severity {
            IssueSeverity::Warning => warn!("{}", issue.message),
            IssueSeverity::Info => info!("{}", issue.message),
        }
    }

    SchemaReport {
        schema_version: schema.version.clone(),
        counts: SchemaCounts {
            attributes: schema.attributes.len(),
            datasets: schema.datasets.len(),
            groups: schema.groups.len(),
            sub_groups: schema.sub_groups.len(),
            categories: index.categories().len(),
            dependencies: schema.dependencies.len(),
        },
        issues,
    }
}

fn check_dims(item: &dyn ItemRecord, attributes: &NameIndex, issues: &mut Vec<CheckIssue>) {
    for dim in item.dims() {
        if !attributes.contains(dim) {
            issues.push(CheckIssue::new(
                IssueKind::MissingReference,
                format!(
                    "dimension {dim} of {} {} is not a defined attribute",
                    item.kind(),
                    item.name()
                ),
            ));
        }
    }
}

fn check_group<'a>(
    group: &'a Group,
    attributes: &NameIndex,
    datasets: &NameIndex,
    sub_groups: &NameIndex,
    use_counter: &mut BTreeMap<&'a str, usize>,
    issues: &mut Vec<CheckIssue>,
) {
    for name in &group.attributes {
        if attributes.contains(name) {
            if let Some(count) = use_counter.get_mut(name.as_str()) {
                *count += 1;
            }
        } else {
            issues.push(CheckIssue::new(
                IssueKind::MissingReference,
                format!("attribute {name} not found (group {})", group.name),
            ));
        }
    }
    for name in &group.datasets {
        if !datasets.contains(name) {
            issues.push(CheckIssue::new(
                IssueKind::MissingReference,
                format!("dataset {name} not found (group {})", group.name),
            ));
        }
    }
    for name in &group.sub_groups {
        if !sub_groups.contains(name) {
            issues.push(CheckIssue::new(
                IssueKind::MissingReference,
                format!("subgroup {name} not found (group {})", group.name),
            ));
        }
    }
    for (list, table, kind) in [
        (&group.required_attributes, attributes, "attribute"),
        (&group.required_datasets, datasets, "dataset"),
        (&group.required_sub_groups, sub_groups, "subgroup"),
    ] {
        for alternatives in list.iter() {
            for name in alternatives {
                if !table.contains(name) {
                    issues.push(CheckIssue::new(
                        IssueKind::MissingReference,
                        format!(
                            "required {kind} {name} not found (group {})",
                            group.name
                        ),
                    ));
                }
            }
        }
    }
}
