//! Human-readable summaries printed after each subcommand.

use std::path::PathBuf;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use esdf_schema::{IssueKind, IssueSeverity, SchemaReport};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

pub fn print_written(title: &str, written: &[PathBuf]) {
    println!("{title}:");
    for path in written {
        println!("- {}", path.display());
    }
}

pub fn print_check_summary(report: &SchemaReport) {
    println!("Schema version: {}", report.schema_version);

    let mut counts = Table::new();
    counts.set_header(vec![header_cell("Records"), header_cell("Count")]);
    apply_table_style(&mut counts);
    if let Some(column) = counts.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    counts.add_row(vec![Cell::new("Attributes"), Cell::new(report.counts.attributes)]);
    counts.add_row(vec![Cell::new("Datasets"), Cell::new(report.counts.datasets)]);
    counts.add_row(vec![Cell::new("Groups"), Cell::new(report.counts.groups)]);
    counts.add_row(vec![Cell::new("Subgroups"), Cell::new(report.counts.sub_groups)]);
    counts.add_row(vec![Cell::new("Categories"), Cell::new(report.counts.categories)]);
    counts.add_row(vec![Cell::new("Dependencies"), Cell::new(report.counts.dependencies)]);
    println!("{counts}");

    if report.issues.is_empty() {
        println!("No issues found.");
        return;
    }
    let mut issues = Table::new();
    issues.set_header(vec![
        header_cell("Severity"),
        header_cell("Kind"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut issues);
    for issue in &report.issues {
        issues.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(kind_label(issue.kind)),
            Cell::new(&issue.message),
        ]);
    }
    println!("{issues}");
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Warning => Cell::new("warning").fg(Color::Yellow),
        IssueSeverity::Info => Cell::new("info").fg(Color::Cyan),
    }
}

fn kind_label(kind: IssueKind) -> &'static str {
    match kind {
        IssueKind::MissingReference => "missing reference",
        IssueKind::UnusedAttribute => "unused attribute",
        IssueKind::MultiUse => "multiple use",
    }
}
