pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::ReportJob;
pub use core::{etl::EtlEngine, pipeline::ManagerReportPipeline};
pub use domain::model::{Record, ReportSource, DEFAULT_REPORT_FILES, REPORT_HEADER};
pub use utils::error::{EtlError, Result};
