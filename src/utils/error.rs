use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Row {line} of report '{report}' is not valid UTF-8")]
    InvalidEncoding { report: String, line: u64 },

    #[error("Required column '{column}' not found in report '{report}'")]
    MissingColumn { column: String, report: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Schema,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    /// 進程退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError(_) => ErrorCategory::Io,
            EtlError::CsvError(e) if e.is_io_error() => ErrorCategory::Io,
            EtlError::CsvError(_) | EtlError::InvalidEncoding { .. } => ErrorCategory::Parse,
            EtlError::MissingColumn { .. } => ErrorCategory::Schema,
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Parse | ErrorCategory::Schema | ErrorCategory::Config => {
                ErrorSeverity::High
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Check that every report file exists in the input directory".to_string()
            }
            EtlError::IoError(_) => {
                "Check file permissions and that the output directory exists".to_string()
            }
            EtlError::CsvError(_) => {
                "Re-export the report; every row must have the same number of fields as the header"
                    .to_string()
            }
            EtlError::InvalidEncoding { .. } => {
                "Re-export the report as UTF-8".to_string()
            }
            EtlError::MissingColumn { column, .. } => {
                format!("Add a '{}' column to the report header", column)
            }
            EtlError::ConfigError { .. } => "Check the TOML syntax of the config file".to_string(),
            EtlError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::IoError(e) => format!("Could not access a file: {}", e),
            EtlError::CsvError(e) => format!("A report is not valid CSV: {}", e),
            EtlError::InvalidEncoding { report, line } => {
                format!("Report '{}' has non-UTF-8 text on line {}", report, line)
            }
            EtlError::MissingColumn { column, report } => {
                format!("Report '{}' has no '{}' column", report, column)
            }
            EtlError::ConfigError { message } => format!("Invalid configuration: {}", message),
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
