pub mod etl;
pub mod loader;
pub mod merge;
pub mod pipeline;
pub mod writer;

pub use crate::domain::model::{Record, ReportBatch, ReportSource, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
