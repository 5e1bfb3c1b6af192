use crate::domain::model::{Record, ReportBatch, TransformResult};
use std::collections::BTreeMap;

/// Stable sort by report type, then first name (byte order).
pub fn sort_records(records: &mut [Record]) {
    records.sort_by(|a, b| {
        a.report_type
            .cmp(&b.report_type)
            .then_with(|| a.first_name.cmp(&b.first_name))
    });
}

/// Concatenates batches in processing order, then sorts.
pub fn merge_reports(batches: Vec<ReportBatch>) -> TransformResult {
    let mut records: Vec<Record> = batches.into_iter().flat_map(|b| b.records).collect();
    sort_records(&mut records);

    let mut report_counts = BTreeMap::new();
    for record in &records {
        *report_counts.entry(record.report_type.clone()).or_insert(0) += 1;
    }

    TransformResult {
        records,
        report_counts,
    }
}
