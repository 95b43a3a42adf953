//! Subcommand entry points.

use anyhow::Result;

use esdf_cli::pipeline::{run_check, run_docs, run_headers};

use crate::cli::{CheckArgs, DocsArgs, HeadersArgs};
use crate::summary::{print_check_summary, print_written};

pub fn docs(args: &DocsArgs) -> Result<i32> {
    let result = run_docs(&args.schema, &args.output_dir)?;
    for diagnostic in &result.attach.unresolved {
        eprintln!("warning: {diagnostic}; condition dropped");
    }
    print_written("Documents", &result.written);
    Ok(0)
}

pub fn headers(args: &HeadersArgs) -> Result<i32> {
    let written = run_headers(&args.schema, &args.output_dir)?;
    print_written("Headers", &written);
    Ok(0)
}

pub fn check(args: &CheckArgs) -> Result<i32> {
    let report = run_check(&args.schema)?;
    print_check_summary(&report);
    Ok(if report.has_missing_references() { 1 } else { 0 })
}
