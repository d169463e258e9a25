use clap::Parser;
use map_typegen::config::LogFormat;
use map_typegen::utils::error::ErrorSeverity;
use map_typegen::utils::logger;
use map_typegen::{execute, CliConfig, IndoorMapCatalog, ModelCatalog, TypegenConfig, TypegenError};

fn main() {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ Type generation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        // 依錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(cli: &CliConfig) -> Result<(), TypegenError> {
    let catalog = IndoorMapCatalog::new();

    if cli.list_models {
        for model in catalog.models() {
            println!("{} ({} fields)", model.name, model.fields.len());
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TypegenConfig::from_file(path)?
        }
        None => TypegenConfig::default(),
    };

    // 命令列覆蓋設定檔
    if let Some(output) = &cli.output {
        config = config.with_output(output.clone());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&catalog, &config, cli.dry_run, &mut out)?;
    Ok(())
}
