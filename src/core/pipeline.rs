use crate::core::loader::load_report;
use crate::core::merge::merge_reports;
use crate::core::writer::render_report;
use crate::core::{ConfigProvider, Pipeline, ReportBatch, Storage, TransformResult};
use crate::utils::error::Result;
use std::path::Path;

pub struct ManagerReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ManagerReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ManagerReportPipeline<S, C> {
    fn extract(&self) -> Result<Vec<ReportBatch>> {
        let manager_email = self.config.manager_email();
        let mut batches = Vec::with_capacity(self.config.report_sources().len());

        // 依序處理每個報表
        for source in self.config.report_sources() {
            let path = self.config.input_dir().join(&source.file);
            tracing::debug!("Reading report {}", path.display());

            let data = self.storage.read_file(&path).inspect_err(|e| {
                tracing::error!("Error processing file {}: {}", path.display(), e);
            })?;
            let records = load_report(data.as_slice(), &source.report_type, manager_email)
                .inspect_err(|e| {
                    tracing::error!("Error processing file {}: {}", path.display(), e);
                })?;

            tracing::info!(
                report = %source.report_type,
                matched = records.len(),
                "Loaded {}",
                source.file
            );
            batches.push(ReportBatch {
                source: source.clone(),
                records,
            });
        }

        Ok(batches)
    }

    fn transform(&self, batches: Vec<ReportBatch>) -> Result<TransformResult> {
        let result = merge_reports(batches);
        for (report_type, count) in &result.report_counts {
            tracing::debug!("{}: {} records", report_type, count);
        }
        Ok(result)
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let output_file = self.config.output_file();
        let data = render_report(&result.records)?;

        tracing::debug!(
            "Writing {} records ({} bytes) to {}",
            result.records.len(),
            data.len(),
            output_file
        );
        self.storage.write_file(Path::new(output_file), &data)?;

        Ok(output_file.to_string())
    }
}
