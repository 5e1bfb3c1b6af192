use crate::domain::model::ReportSource;
use crate::utils::error::{EtlError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Report set described in a TOML file.
///
/// ```toml
/// input_dir = "exports"
///
/// [[reports]]
/// file = "LowScoringUsers.csv"
/// report_type = "LowScoringUsers"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportSetConfig {
    pub input_dir: Option<String>,
    #[serde(default)]
    pub reports: Vec<ReportEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportEntry {
    pub file: String,
    pub report_type: Option<String>,
}

impl ReportSetConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REPORT_DIR})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Configured sources, or the built-in report list when none are given.
    pub fn report_sources(&self) -> Vec<ReportSource> {
        if self.reports.is_empty() {
            return ReportSource::defaults();
        }

        self.reports
            .iter()
            .map(|entry| match &entry.report_type {
                Some(report_type) => ReportSource::with_report_type(&entry.file, report_type),
                None => ReportSource::from_file(&entry.file),
            })
            .collect()
    }
}
