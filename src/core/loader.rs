//! Reads one report CSV and keeps the rows that belong to a manager.

use crate::domain::model::Record;
use crate::utils::error::{EtlError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;

const FIRST_NAME: &str = "First Name";
const LAST_NAME: &str = "Last Name";
const EMAIL: &str = "Email";
const SENT_DATE_UTC: &str = "Sent Date (UTC)";
const TITLE: &str = "Title";
const STATUS: &str = "Status";
const QUIZ_SCORE: &str = "Quiz Score";
const CLICKED: &str = "Clicked";
const MANAGER_FIRST_NAME: &str = "Manager First Name";
const MANAGER_LAST_NAME: &str = "Manager Last Name";
const MANAGER_EMAIL: &str = "Manager Email";

/// Position of a named column, comparing against trimmed header names.
pub fn column_index(headers: &StringRecord, column: &str) -> Option<usize> {
    headers.iter().position(|name| name.trim() == column)
}

/// Header positions resolved once per file.
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    first_name: Option<usize>,
    last_name: Option<usize>,
    email: Option<usize>,
    sent_date_utc: Option<usize>,
    title: Option<usize>,
    status: Option<usize>,
    quiz_score: Option<usize>,
    clicked: Option<usize>,
    manager_first_name: Option<usize>,
    manager_last_name: Option<usize>,
    manager_email: Option<usize>,
}

impl ColumnLayout {
    fn resolve(headers: &StringRecord) -> Self {
        Self {
            first_name: column_index(headers, FIRST_NAME),
            last_name: column_index(headers, LAST_NAME),
            email: column_index(headers, EMAIL),
            sent_date_utc: column_index(headers, SENT_DATE_UTC),
            title: column_index(headers, TITLE),
            status: column_index(headers, STATUS),
            quiz_score: column_index(headers, QUIZ_SCORE),
            clicked: column_index(headers, CLICKED),
            manager_first_name: column_index(headers, MANAGER_FIRST_NAME),
            manager_last_name: column_index(headers, MANAGER_LAST_NAME),
            manager_email: column_index(headers, MANAGER_EMAIL),
        }
    }
}

struct RowView<'a> {
    row: &'a StringRecord,
    report_type: &'a str,
}

impl RowView<'_> {
    fn required(&self, index: Option<usize>, column: &str) -> Result<String> {
        index
            .and_then(|i| self.row.get(i))
            .map(str::to_string)
            .ok_or_else(|| EtlError::MissingColumn {
                column: column.to_string(),
                report: self.report_type.to_string(),
            })
    }

    fn optional(&self, index: Option<usize>) -> String {
        index
            .and_then(|i| self.row.get(i))
            .unwrap_or_default()
            .to_string()
    }
}

/// Parses a report and returns one record per row whose last column equals
/// `manager_email` exactly. Row order is preserved.
///
/// Rows are filtered on raw bytes; only matching rows are decoded as UTF-8.
/// Missing required columns are only an error when a matching row needs them.
pub fn load_report<R: Read>(
    reader: R,
    report_type: &str,
    manager_email: &str,
) -> Result<Vec<Record>> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let layout = ColumnLayout::resolve(csv_reader.headers()?);

    let mut records = Vec::new();
    for row in csv_reader.byte_records() {
        let row = row?;
        if row.iter().last() != Some(manager_email.as_bytes()) {
            continue;
        }

        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let row = StringRecord::from_byte_record(row).map_err(|_| EtlError::InvalidEncoding {
            report: report_type.to_string(),
            line,
        })?;

        let view = RowView {
            row: &row,
            report_type,
        };
        let record = Record {
            report_type: report_type.to_string(),
            first_name: view.required(layout.first_name, FIRST_NAME)?,
            last_name: view.required(layout.last_name, LAST_NAME)?,
            email: view.required(layout.email, EMAIL)?,
            sent_date_utc: view.required(layout.sent_date_utc, SENT_DATE_UTC)?,
            title: view.required(layout.title, TITLE)?,
            status: view.optional(layout.status),
            quiz_score: view.optional(layout.quiz_score),
            clicked: view.optional(layout.clicked),
            manager_first_name: view.required(layout.manager_first_name, MANAGER_FIRST_NAME)?,
            manager_last_name: view.required(layout.manager_last_name, MANAGER_LAST_NAME)?,
            manager_email: view.required(layout.manager_email, MANAGER_EMAIL)?,
        };

        tracing::debug!(
            report = report_type,
            email = %record.email,
            "Matched row for manager"
        );
        records.push(record);
    }

    Ok(records)
}
