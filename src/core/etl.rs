use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting report consolidation");

        // Extract
        let batches = self.pipeline.extract()?;
        let extracted: usize = batches.iter().map(|b| b.records.len()).sum();
        tracing::info!(
            "Extracted {} records from {} reports ({:?})",
            extracted,
            batches.len(),
            started.elapsed()
        );

        // Transform
        let result = self.pipeline.transform(batches)?;
        tracing::info!(
            "Merged {} records across {} report types",
            result.records.len(),
            result.report_counts.len()
        );

        // Load
        let output_path = self.pipeline.load(result)?;
        tracing::info!(
            "Output saved to: {} (total {:?})",
            output_path,
            started.elapsed()
        );

        Ok(output_path)
    }
}
