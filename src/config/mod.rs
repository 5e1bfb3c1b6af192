#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::{ConfigProvider, ReportSource};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::{Path, PathBuf};

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct ReportJob {
    pub manager_email: String,
    pub output_file: String,
    pub input_dir: PathBuf,
    pub report_sources: Vec<ReportSource>,
}

impl ReportJob {
    /// Default report list, read from the working directory.
    pub fn new(manager_email: impl Into<String>, output_file: impl Into<String>) -> Self {
        Self {
            manager_email: manager_email.into(),
            output_file: output_file.into(),
            input_dir: PathBuf::from("."),
            report_sources: ReportSource::defaults(),
        }
    }

    pub fn with_input_dir(mut self, input_dir: impl Into<PathBuf>) -> Self {
        self.input_dir = input_dir.into();
        self
    }

    pub fn with_sources(mut self, report_sources: Vec<ReportSource>) -> Self {
        self.report_sources = report_sources;
        self
    }
}

impl ConfigProvider for ReportJob {
    fn manager_email(&self) -> &str {
        &self.manager_email
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    fn report_sources(&self) -> &[ReportSource] {
        &self.report_sources
    }
}

impl Validate for ReportJob {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("manager_email", &self.manager_email)?;
        validation::validate_path("output_file", &self.output_file)?;
        validation::validate_not_empty("reports", &self.report_sources)?;
        validation::validate_file_extensions(
            "reports",
            self.report_sources.iter().map(|s| s.file.as_str()),
            &["csv"],
        )?;
        Ok(())
    }
}
