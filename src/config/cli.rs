use crate::config::toml_config::ReportSetConfig;
use crate::config::ReportJob;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "manager-report", version)]
#[command(about = "Consolidate phishing-training reports for a single manager")]
pub struct CliConfig {
    /// Keep only rows whose Manager Email equals this value exactly
    pub manager_email: String,

    /// Path of the consolidated CSV to write
    pub output_file: String,

    /// Further positionals are accepted and ignored
    #[arg(hide = true)]
    pub ignored_args: Vec<String>,

    /// Directory holding the input reports [default: .]
    #[arg(long)]
    pub input_dir: Option<String>,

    /// TOML file listing the reports to merge
    #[arg(long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Command-line flags win over the config file, which wins over defaults.
    pub fn resolve(&self) -> Result<ReportJob> {
        if !self.ignored_args.is_empty() {
            tracing::warn!("Ignoring extra arguments: {:?}", self.ignored_args);
        }

        let file_config = match &self.config {
            Some(path) => {
                tracing::info!("Loading report set from {}", path);
                ReportSetConfig::from_file(path)?
            }
            None => ReportSetConfig::default(),
        };

        let input_dir = self
            .input_dir
            .clone()
            .or_else(|| file_config.input_dir.clone())
            .unwrap_or_else(|| ".".to_string());

        Ok(ReportJob::new(&self.manager_email, &self.output_file)
            .with_input_dir(input_dir)
            .with_sources(file_config.report_sources()))
    }
}
