//! Artifact authoring-file validation.
//!
//! Validation runs over raw YAML values rather than the typed model so a
//! malformed field (say, an unknown criticality) is reported as a finding
//! instead of aborting deserialization. Findings come in three severities:
//! errors block the build, warnings and recommendations do not.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::Value;
use tracing::debug;
use walkdir::WalkDir;

use crate::core::artifact::{Criticality, HIVE_PREFIXES};
use crate::error::{RegdexError, Result};

pub const VALID_CATEGORIES: [&str; 13] = [
    "program-execution",
    "browser-activity",
    "file-operations",
    "user-behaviour",
    "external-storage",
    "persistence-methods",
    "system-modifications",
    "network-infrastructure",
    "remote-access",
    "security-monitoring",
    "communication-apps",
    "virtualization",
    "authentication",
];

/// Categories surfaced as quick filters in the browsing UI.
pub const PRIORITY_CATEGORIES: [&str; 8] = [
    "program-execution",
    "browser-activity",
    "file-operations",
    "user-behaviour",
    "persistence-methods",
    "system-modifications",
    "network-infrastructure",
    "security-monitoring",
];

pub const VALID_INVESTIGATION_TYPES: [&str; 14] = [
    "incident-response",
    "malware-analysis",
    "timeline-analysis",
    "behavioral-analysis",
    "insider-threat",
    "initial-access",
    "program-execution",
    "persistence-analysis",
    "privilege-escalation",
    "credential-theft",
    "lateral-movement",
    "remote-access",
    "data-exfiltration",
    "anti-forensics",
];

pub const VALID_REFERENCE_TYPES: [&str; 4] = ["official", "research", "blog", "tool"];

const MIN_TITLE_LENGTH: usize = 5;
const MIN_DESCRIPTION_LENGTH: usize = 10;
const MIN_DETAILED_FIELD_LENGTH: usize = 20;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^https?://[^\s<>"{}|\\^`\[\]]+$"#).expect("valid regex"));

/// Findings for one artifact file.
#[derive(Debug)]
pub struct ValidationReport {
    pub file: PathBuf,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ValidationReport {
    fn new(file: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
            errors: Vec::new(),
            warnings: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    fn recommend(&mut self, message: impl Into<String>) {
        self.recommendations.push(message.into());
    }
}

/// Validate one artifact YAML file.
pub fn validate_file(path: &Path) -> ValidationReport {
    let mut report = ValidationReport::new(path);

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            report.error(format!("read {}: {err}", path.display()));
            return report;
        }
    };

    let value: Value = match serde_yaml::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            report.error(format!("YAML parsing error: {err}"));
            return report;
        }
    };

    if value.is_null() {
        report.error("file is empty or contains invalid YAML");
        return report;
    }
    if !value.is_mapping() {
        report.error("root element must be a YAML mapping");
        return report;
    }

    check_required_fields(&value, &mut report);
    check_category(&value, &mut report);
    check_paths(&value, &mut report);
    check_details(&value, &mut report);
    check_metadata(&value, &mut report);
    check_author(&value, &mut report);
    check_contribution(&value, &mut report);
    check_limitations_and_correlation(&value, &mut report);

    report
}

/// Validate every artifact file under `dir` (category subdirectories,
/// `*.yml`/`*.yaml`). Files and directories with a `_` prefix are templates
/// and are skipped.
pub fn validate_directory(dir: &Path) -> Result<Vec<ValidationReport>> {
    if !dir.is_dir() {
        return Err(RegdexError::Config(format!(
            "artifacts directory not found: {}",
            dir.display()
        )));
    }

    let mut reports = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| RegdexError::Config(format!("walk artifacts: {err}")))?;
        if !is_artifact_file(entry.path()) {
            continue;
        }
        debug!(target: "validate", file = %entry.path().display(), "validating");
        reports.push(validate_file(entry.path()));
    }
    Ok(reports)
}

pub(crate) fn is_artifact_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.starts_with('_') {
        return false;
    }
    if path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('_'))
    {
        return false;
    }
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml" | "yaml")
    )
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn check_required_fields(value: &Value, report: &mut ValidationReport) {
    for field in ["title", "category", "description"] {
        match value.get(field) {
            None => report.error(format!("missing required field: '{field}'")),
            Some(v) => match v.as_str() {
                None => report.error(format!("field '{field}' must be a string")),
                Some(s) if s.trim().is_empty() => {
                    report.error(format!("field '{field}' cannot be empty"));
                }
                Some(s) => {
                    if field == "title" && s.len() < MIN_TITLE_LENGTH {
                        report.error(format!(
                            "title must be at least {MIN_TITLE_LENGTH} characters, got {}",
                            s.len()
                        ));
                    } else if field == "description" && s.len() < MIN_DESCRIPTION_LENGTH {
                        report.error(format!(
                            "description must be at least {MIN_DESCRIPTION_LENGTH} characters, got {}",
                            s.len()
                        ));
                    }
                }
            },
        }
    }
    if value.get("paths").is_none() {
        report.error("missing required field: 'paths'");
    }
}

fn check_category(value: &Value, report: &mut ValidationReport) {
    let Some(category) = str_field(value, "category") else {
        return;
    };
    if !VALID_CATEGORIES.contains(&category) {
        report.error(format!(
            "invalid category '{category}'; must be one of: {}",
            VALID_CATEGORIES.join(", ")
        ));
        return;
    }
    if PRIORITY_CATEGORIES.contains(&category) {
        report.recommend(format!(
            "category '{category}' is a priority category (appears in quick filters)"
        ));
    }
}

fn check_paths(value: &Value, report: &mut ValidationReport) {
    let Some(paths) = value.get("paths") else {
        return;
    };

    let paths: Vec<&str> = match paths {
        Value::String(path) => vec![path.as_str()],
        Value::Sequence(seq) => {
            let mut collected = Vec::new();
            for (i, item) in seq.iter().enumerate() {
                match item.as_str() {
                    Some(path) => collected.push(path),
                    None => report.error(format!("path {} must be a string", i + 1)),
                }
            }
            collected
        }
        _ => {
            report.error("paths must be a non-empty list or string");
            return;
        }
    };

    if paths.is_empty() {
        report.error("paths must be a non-empty list or string");
        return;
    }

    for (i, path) in paths.iter().enumerate() {
        if path.trim().is_empty() {
            report.error(format!("path {} cannot be empty", i + 1));
            continue;
        }
        let rooted = HIVE_PREFIXES
            .iter()
            .any(|hive| path.starts_with(&format!("{hive}\\")));
        if !rooted {
            report.warn(format!("path may not be a valid registry path: '{path}'"));
            let prefixes: Vec<String> =
                HIVE_PREFIXES.iter().map(|h| format!("{h}\\")).collect();
            report.recommend(format!(
                "registry paths should start with one of: {}",
                prefixes.join(", ")
            ));
        }
    }
}

fn check_details(value: &Value, report: &mut ValidationReport) {
    let Some(details) = value.get("details") else {
        report.warn("missing 'details' section (recommended)");
        return;
    };

    for (field, description) in [
        ("what", "explanation of what Windows stores"),
        ("forensic_value", "forensic significance explanation"),
        ("structure", "data format and structure description"),
    ] {
        match str_field(details, field) {
            None => report.warn(format!("missing details.{field} ({description})")),
            Some(text) if text.trim().len() < MIN_DETAILED_FIELD_LENGTH => {
                report.warn(format!(
                    "details.{field} should be more detailed (at least {MIN_DETAILED_FIELD_LENGTH} characters)"
                ));
            }
            Some(_) => {}
        }
    }

    match details.get("examples") {
        None => report.warn("missing details.examples (recommended)"),
        Some(Value::Sequence(seq)) if seq.is_empty() => report.warn("examples list is empty"),
        Some(Value::Sequence(_)) => {}
        Some(_) => report.warn("examples should be a list of strings"),
    }

    match details.get("tools") {
        None => report.warn("missing details.tools (recommended)"),
        Some(Value::Sequence(tools)) => check_tools(tools, report),
        Some(_) => report.warn("tools should be a list"),
    }
}

fn check_tools(tools: &[Value], report: &mut ValidationReport) {
    if tools.is_empty() {
        report.warn("tools list is empty");
        return;
    }

    for (i, tool) in tools.iter().enumerate() {
        // Bare names are accepted; object form needs at least a name.
        if tool.is_string() {
            continue;
        }
        if !tool.is_mapping() {
            report.warn(format!("tool {} should be a name or an object", i + 1));
            continue;
        }
        let Some(name) = str_field(tool, "name") else {
            report.error(format!("tool {} missing required 'name' field", i + 1));
            continue;
        };
        if name.trim().is_empty() {
            report.error(format!("tool {} name must be a non-empty string", i + 1));
            continue;
        }
        match str_field(tool, "url") {
            None => report.recommend(format!("tool '{name}' missing URL (recommended)")),
            Some(url) if !URL_PATTERN.is_match(url) => {
                report.warn(format!("tool '{name}' has invalid URL format"));
            }
            Some(_) => {}
        }
    }
}

fn check_metadata(value: &Value, report: &mut ValidationReport) {
    let Some(metadata) = value.get("metadata") else {
        report.warn("missing 'metadata' section (recommended)");
        return;
    };

    match str_field(metadata, "criticality") {
        None => report.recommend("missing metadata.criticality (recommended)"),
        Some(level) if Criticality::parse(level).is_none() => {
            report.error(format!(
                "invalid criticality '{level}'; must be one of: high, medium, low"
            ));
        }
        Some(_) => {}
    }

    match metadata.get("investigation_types") {
        None => report.recommend("missing metadata.investigation_types (recommended)"),
        Some(Value::Sequence(types)) => {
            let invalid: Vec<&str> = types
                .iter()
                .filter_map(Value::as_str)
                .filter(|t| !VALID_INVESTIGATION_TYPES.contains(t))
                .collect();
            if !invalid.is_empty() {
                report.error(format!("invalid investigation types: {}", invalid.join(", ")));
                report.error(format!(
                    "valid types: {}",
                    VALID_INVESTIGATION_TYPES.join(", ")
                ));
            }
        }
        Some(_) => report.error("investigation_types must be a list"),
    }

    match metadata.get("windows_versions") {
        None => report.recommend("missing metadata.windows_versions (recommended)"),
        Some(Value::Sequence(_)) => {}
        Some(_) => report.warn("windows_versions should be a list"),
    }

    if let Some(Value::Sequence(references)) = metadata.get("references") {
        check_references(references, report);
    }

    for field in ["introduced", "deprecated"] {
        if let Some(date) = str_field(metadata, field) {
            if !DATE_PATTERN.is_match(date) {
                report.warn(format!("metadata.{field} should be in YYYY-MM-DD format"));
            }
        }
    }
}

fn check_references(references: &[Value], report: &mut ValidationReport) {
    for (i, reference) in references.iter().enumerate() {
        if !reference.is_mapping() {
            report.warn(format!("reference {} should be an object", i + 1));
            continue;
        }
        if str_field(reference, "title").is_none() {
            report.error(format!("reference {} missing required 'title' field", i + 1));
            continue;
        }
        if let Some(url) = str_field(reference, "url") {
            if !URL_PATTERN.is_match(url) {
                report.warn(format!("reference {} has invalid URL format", i + 1));
            }
        }
        if let Some(kind) = str_field(reference, "type") {
            if !VALID_REFERENCE_TYPES.contains(&kind) {
                report.warn(format!(
                    "reference {} invalid type '{kind}'; valid types: {}",
                    i + 1,
                    VALID_REFERENCE_TYPES.join(", ")
                ));
            }
        }
    }
}

fn check_author(value: &Value, report: &mut ValidationReport) {
    let Some(author) = value.get("author") else {
        report.recommend("missing 'author' section (recommended for attribution)");
        return;
    };
    if !author.is_mapping() {
        report.warn("author should be an object with name and contact info");
        return;
    }
    match str_field(author, "name") {
        None => report.warn("author missing 'name' field"),
        Some(name) if name.trim().is_empty() => {
            report.warn("author name should be a non-empty string");
        }
        Some(_) => {}
    }
    if let Some(email) = str_field(author, "email") {
        if !EMAIL_PATTERN.is_match(email) {
            report.warn("author email format appears invalid");
        }
    }
}

fn check_contribution(value: &Value, report: &mut ValidationReport) {
    let Some(contribution) = value.get("contribution") else {
        report.recommend("missing 'contribution' section (recommended for tracking)");
        return;
    };
    if !contribution.is_mapping() {
        report.warn("contribution should be an object");
        return;
    }
    for field in ["date_added", "last_updated"] {
        if let Some(date) = str_field(contribution, field) {
            if !DATE_PATTERN.is_match(date) {
                report.warn(format!("contribution.{field} should be in YYYY-MM-DD format"));
            }
        }
    }
}

fn check_limitations_and_correlation(value: &Value, report: &mut ValidationReport) {
    match value.get("limitations") {
        None => {
            report.error("missing 'limitations' section: must specify what this artifact cannot determine or prove");
        }
        Some(Value::Sequence(items)) if items.is_empty() => {
            report.warn("limitations list is empty");
        }
        Some(Value::Sequence(items)) => {
            report.recommend(format!("{} limitation(s) specified", items.len()));
        }
        Some(_) => report.warn("limitations should be a list of strings"),
    }

    match value.get("correlation") {
        None => {
            report.error("missing 'correlation' section: must specify required evidence for definitive conclusions");
        }
        Some(correlation) if correlation.is_mapping() => {
            let required = correlation
                .get("required_for_definitive_conclusions")
                .and_then(Value::as_sequence)
                .is_some_and(|s| !s.is_empty());
            let strengthens = correlation
                .get("strengthens_evidence")
                .and_then(Value::as_sequence)
                .is_some_and(|s| !s.is_empty());
            if !required && !strengthens {
                report.warn("correlation section empty; should specify required evidence");
            }
        }
        Some(_) => {
            report.warn("correlation should be an object with required/strengthens fields");
        }
    }
}
