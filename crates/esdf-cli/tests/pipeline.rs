//! End-to-end tests for the generation pipelines.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use esdf_cli::pipeline::{run_check, run_docs, run_headers};

const SCHEMA: &str = r#"{
    "Version": "0.2",
    "Attributes": [
        {
            "Name": "number_of_atoms",
            "Data_type": "ESDF_DT_UINT",
            "Description": ["Total number of atoms in the system."],
            "Category": []
        },
        {
            "Name": "mode",
            "Data_type": "ESDF_DT_STRING",
            "String_length": 32,
            "Description": ["Execution mode."],
            "Category": ["config"]
        },
        {
            "Name": "threads",
            "Data_type": "ESDF_DT_UINT",
            "Category": ["config"]
        }
    ],
    "Datasets": [
        {
            "Name": "forces",
            "Data_type": "ESDF_DT_DOUBLE",
            "Dimensions": 1,
            "Dims_definitions": ["number_of_atoms"],
            "Category": ["results"]
        }
    ],
    "Groups": [
        {
            "Name": "system",
            "Description": ["Physical system description."],
            "Attributes": ["number_of_atoms", "mode", "threads"],
            "Datasets": ["forces"],
            "Category_Order": ["config", "results"]
        }
    ],
    "Dependencies": [
        {
            "Attribute": "mode",
            "Value": "fast",
            "Rules": [{"Required_Attributes": [["threads"]]}]
        }
    ]
}"#;

static DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

fn unique_temp_dir(label: &str) -> PathBuf {
    let ordinal = DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!(
        "esdf-specgen-{label}-{}-{ordinal}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_schema(dir: &PathBuf, contents: &str) -> PathBuf {
    let path = dir.join("schema.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn docs_pipeline_is_deterministic() {
    let dir = unique_temp_dir("docs");
    let schema = write_schema(&dir, SCHEMA);

    let first_out = dir.join("first");
    let second_out = dir.join("second");
    let first = run_docs(&schema, &first_out).unwrap();
    let second = run_docs(&schema, &second_out).unwrap();

    assert!(first.attach.is_clean());
    let names: Vec<_> = first
        .written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["system.rst", "index.rst"]);

    for (a, b) in first.written.iter().zip(&second.written) {
        assert_eq!(a.file_name(), b.file_name());
        assert_eq!(fs::read_to_string(a).unwrap(), fs::read_to_string(b).unwrap());
    }

    let system = fs::read_to_string(&first.written[0]).unwrap();
    assert!(system.contains("System\n======\n"));
    assert!(system.contains("If ``mode`` == ``fast`` then:"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn headers_pipeline_emits_four_files() {
    let dir = unique_temp_dir("headers");
    let schema = write_schema(&dir, SCHEMA);

    let out = dir.join("include");
    let written = run_headers(&schema, &out).unwrap();
    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "esdf_attributes_ID.h",
            "esdf_attributes_specs.h",
            "esdf_groups_ID.h",
            "esdf_groups_specs.h",
        ]
    );

    let ids = fs::read_to_string(&written[0]).unwrap();
    assert!(ids.contains("#define NUMBER_OF_ATOMS 0"));
    let specs = fs::read_to_string(&written[1]).unwrap();
    assert!(specs.contains("mode_specs"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn check_pipeline_reports_missing_dependency_target() {
    let broken = SCHEMA.replace("\"Attribute\": \"mode\"", "\"Attribute\": \"ghost\"");
    let dir = unique_temp_dir("check");
    let schema = write_schema(&dir, &broken);

    let report = run_check(&schema).unwrap();
    assert!(report.has_missing_references());
    assert!(
        report
            .issues
            .iter()
            .any(|issue| issue.message.contains("attribute ghost not found"))
    );

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn check_pipeline_clean_schema_has_no_missing_references() {
    let dir = unique_temp_dir("check-clean");
    let schema = write_schema(&dir, SCHEMA);

    let report = run_check(&schema).unwrap();
    assert_eq!(report.schema_version, "0.2");
    assert_eq!(report.counts.attributes, 3);
    assert_eq!(report.counts.datasets, 1);
    assert_eq!(report.counts.groups, 1);
    assert!(!report.has_missing_references());

    fs::remove_dir_all(&dir).ok();
}
