use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Input reports processed when no config file overrides them, in processing order.
pub const DEFAULT_REPORT_FILES: [&str; 4] = [
    "LowScoringUsers.csv",
    "UserIncompleteSessions.csv",
    "UserPhishingFailures.csv",
    "UserIncompleteRemediations.csv",
];

/// Header of the consolidated output, in `Record` field order.
pub const REPORT_HEADER: [&str; 12] = [
    "ReportType",
    "First Name",
    "Last Name",
    "Email",
    "Sent Date (UTC)",
    "Title",
    "Status",
    "Quiz Score",
    "Clicked",
    "Manager First Name",
    "Manager Last Name",
    "Manager Email",
];

/// One normalized row. Every value is the raw cell text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(rename = "ReportType")]
    pub report_type: String,
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Sent Date (UTC)")]
    pub sent_date_utc: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Quiz Score")]
    pub quiz_score: String,
    #[serde(rename = "Clicked")]
    pub clicked: String,
    #[serde(rename = "Manager First Name")]
    pub manager_first_name: String,
    #[serde(rename = "Manager Last Name")]
    pub manager_last_name: String,
    #[serde(rename = "Manager Email")]
    pub manager_email: String,
}

/// A report file and the label its records are tagged with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSource {
    pub file: String,
    pub report_type: String,
}

impl ReportSource {
    /// Labels the report with the file's base name minus a trailing `.csv`.
    pub fn from_file(file: impl Into<String>) -> Self {
        let file = file.into();
        let report_type = report_type_for(&file);
        Self { file, report_type }
    }

    pub fn with_report_type(file: impl Into<String>, report_type: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            report_type: report_type.into(),
        }
    }

    pub fn defaults() -> Vec<Self> {
        DEFAULT_REPORT_FILES
            .iter()
            .map(|file| Self::from_file(*file))
            .collect()
    }
}

fn report_type_for(file: &str) -> String {
    let base = Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file);
    base.strip_suffix(".csv").unwrap_or(base).to_string()
}

/// Records extracted from a single report, in file order.
#[derive(Debug, Clone)]
pub struct ReportBatch {
    pub source: ReportSource,
    pub records: Vec<Record>,
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub records: Vec<Record>,
    pub report_counts: BTreeMap<String, usize>,
}
