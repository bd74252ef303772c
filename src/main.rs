use clap::Parser;
use lottie_unmark::core::ConfigProvider;
use lottie_unmark::utils::{logger, validation::Validate};
use lottie_unmark::{CliConfig, EtlEngine, EtlError, LocalStorage, TomlConfig, WatermarkPipeline};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let outcome = match config.config.clone() {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            TomlConfig::from_file(&path).and_then(|toml| run(toml.with_dry_run(config.dry_run)))
        }
        None => run(config),
    };

    if let Err(e) = outcome {
        tracing::debug!(
            "Layer removal failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());
        match &e {
            EtlError::FileNotFound { .. } => println!("{}", e.user_friendly_message()),
            _ => eprintln!("{}", e.user_friendly_message()),
        }
        std::process::exit(e.exit_code());
    }
}

fn run<C: ConfigProvider + Validate>(config: C) -> Result<(), EtlError> {
    config.validate()?;

    let storage = LocalStorage::new(config.base_path().to_string());
    let dry_run = config.dry_run();
    let engine = EtlEngine::new(WatermarkPipeline::new(storage, config));

    engine.run_with_report(|report| println!("{}", report))?;
    if dry_run {
        println!("Dry run: file left unchanged.");
    }
    Ok(())
}
