use crate::domain::model::{ReportBatch, ReportSource, TransformResult};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn manager_email(&self) -> &str;
    fn output_file(&self) -> &str;
    fn input_dir(&self) -> &Path;
    fn report_sources(&self) -> &[ReportSource];
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<ReportBatch>>;
    fn transform(&self, batches: Vec<ReportBatch>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}

