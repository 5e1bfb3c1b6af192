use clap::Parser;
use manager_report::utils::{logger, validation::Validate};
use manager_report::{CliConfig, EtlEngine, EtlError, LocalStorage, ManagerReportPipeline};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting manager-report");
    tracing::debug!("CLI config: {:?}", config);

    let job = match config.resolve() {
        Ok(job) => job,
        Err(e) => fail(&e),
    };

    // 驗證配置
    if let Err(e) = job.validate() {
        fail(&e);
    }

    let storage = LocalStorage::new(".");
    let pipeline = ManagerReportPipeline::new(storage, job);
    let engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            println!("Report generated: {}", output_path);
        }
        Err(e) => fail(&e),
    }
}

fn fail(e: &EtlError) -> ! {
    tracing::error!(
        "Report generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("error: {}", e.user_friendly_message());
    eprintln!("hint: {}", e.recovery_suggestion());

    // 所有錯誤都是致命的
    std::process::exit(e.severity().exit_code());
}
