//! regdex validate - Validate artifact YAML files against the catalog schema

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::catalog::validate::{ValidationReport, validate_directory, validate_file};
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json};
use crate::error::{RegdexError, Result};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// A single artifact file to validate (default: all of --artifacts-dir)
    pub file: Option<PathBuf>,

    /// Artifact authoring directory
    #[arg(long, default_value = "artifacts")]
    pub artifacts_dir: PathBuf,

    /// Show warnings and recommendations for valid files too
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

pub fn run(ctx: &AppContext, args: &ValidateArgs) -> Result<()> {
    let (reports, detailed) = match &args.file {
        Some(file) => {
            if !file.exists() {
                return Err(RegdexError::Config(format!(
                    "file not found: {}",
                    file.display()
                )));
            }
            // Single-file runs always show full findings.
            (vec![validate_file(file)], true)
        }
        None => (validate_directory(&args.artifacts_dir)?, args.detailed),
    };

    let invalid = reports.iter().filter(|r| !r.is_valid()).count();

    if ctx.output_format == OutputFormat::Json {
        emit_json(&build_report(&reports))?;
    } else {
        display_human(&reports, detailed);
    }

    if invalid > 0 {
        return Err(RegdexError::ValidationFailed(format!(
            "{invalid} artifact file(s) failed validation"
        )));
    }
    Ok(())
}

#[derive(Serialize)]
struct ValidateOutput {
    files: usize,
    valid: usize,
    invalid: usize,
    errors: usize,
    warnings: usize,
    reports: Vec<FileReport>,
}

#[derive(Serialize)]
struct FileReport {
    file: String,
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
    recommendations: Vec<String>,
}

fn build_report(reports: &[ValidationReport]) -> ValidateOutput {
    let valid = reports.iter().filter(|r| r.is_valid()).count();
    ValidateOutput {
        files: reports.len(),
        valid,
        invalid: reports.len() - valid,
        errors: reports.iter().map(|r| r.errors.len()).sum(),
        warnings: reports.iter().map(|r| r.warnings.len()).sum(),
        reports: reports
            .iter()
            .map(|r| FileReport {
                file: r.file.display().to_string(),
                valid: r.is_valid(),
                errors: r.errors.clone(),
                warnings: r.warnings.clone(),
                recommendations: r.recommendations.clone(),
            })
            .collect(),
    }
}

fn display_human(reports: &[ValidationReport], detailed: bool) {
    let valid = reports.iter().filter(|r| r.is_valid()).count();
    let invalid = reports.len() - valid;
    let total_errors: usize = reports.iter().map(|r| r.errors.len()).sum();
    let total_warnings: usize = reports.iter().map(|r| r.warnings.len()).sum();

    let mut layout = HumanLayout::new();
    layout.title("Validation");
    layout.kv("Files validated", &reports.len().to_string());
    layout.kv("Valid", &valid.to_string());
    layout.kv("Invalid", &invalid.to_string());
    layout.kv("Errors", &total_errors.to_string());
    layout.kv("Warnings", &total_warnings.to_string());
    if !reports.is_empty() {
        let rate = (valid as f64 / reports.len() as f64) * 100.0;
        layout.kv("Success rate", &format!("{rate:.1}%"));
    }

    for report in reports.iter().filter(|r| !r.is_valid()) {
        layout.blank();
        layout.section(&report.file.display().to_string());
        for error in &report.errors {
            layout.bullet(&format!("error: {error}"));
        }
        for warning in report.warnings.iter().take(3) {
            layout.bullet(&format!("warning: {warning}"));
        }
        if report.warnings.len() > 3 {
            layout.bullet(&format!(
                "... and {} more warnings",
                report.warnings.len() - 3
            ));
        }
    }

    if detailed {
        for report in reports.iter().filter(|r| r.is_valid()) {
            if report.warnings.is_empty() && report.recommendations.is_empty() {
                continue;
            }
            layout.blank();
            layout.section(&report.file.display().to_string());
            for warning in &report.warnings {
                layout.bullet(&format!("warning: {warning}"));
            }
            for recommendation in &report.recommendations {
                layout.bullet(&format!("note: {recommendation}"));
            }
        }
    }

    emit_human(layout);
}
