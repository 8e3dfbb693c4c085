use clap::Parser;
use gazetteer_filter::utils::{logger, validation::Validate};
use gazetteer_filter::{CliConfig, ProjectionEngine};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting gazetteer-filter");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let engine = ProjectionEngine::new(config);

    match engine.run() {
        Ok(summary) => {
            println!(
                "✅ Wrote {} records to {}",
                summary.records_written,
                engine.config().output_path
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Projection failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
