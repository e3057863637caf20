use clap::Parser;
use continent_tour::core::ConfigProvider;
use continent_tour::utils::error::ErrorSeverity;
use continent_tour::utils::monitor::RunMonitor;
use continent_tour::utils::{logger, validation::Validate};
use continent_tour::{
    CliConfig, JsonFileCatalog, OutputFormat, TomlConfig, TourEngine, TourError,
};
use std::io::BufRead;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    // 設定檔先合併，決定輸出格式後再初始化日誌
    let file_config = match &config.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };
    if let Some(file) = &file_config {
        config.merge_file(file);
    }

    match config.output_format() {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting continent-tour");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let mut monitor = RunMonitor::new(config.monitoring_enabled());

    let source = JsonFileCatalog::new(config.catalog_path());
    let engine = match TourEngine::from_source(&source) {
        Ok(engine) => engine,
        Err(e) => fail(&e),
    };
    monitor.log_phase("Catalog loaded and indexed");

    let start_id = match config.city.clone() {
        Some(city) => city,
        None => match read_start_city() {
            Ok(city) => city,
            Err(e) => fail(&e),
        },
    };

    let report = match engine.tour(&start_id, config.latitude_mode()) {
        Ok(report) => report,
        Err(e) => fail(&e),
    };
    monitor.log_phase("Traversal");

    match report.render(config.output_format()) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => fail(&e),
    }

    Ok(())
}

fn read_start_city() -> continent_tour::Result<String> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn fail(e: &TourError) -> ! {
    tracing::error!(
        "❌ Tour failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
