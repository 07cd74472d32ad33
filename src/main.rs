use clap::Parser;
use small_drills::app::runner::run_command;
use small_drills::utils::error::{DrillError, ErrorSeverity};
use small_drills::utils::{logger, validation::Validate};
use small_drills::{CliConfig, TomlConfig};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let settings = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading settings from: {}", path);
            TomlConfig::from_file(path)
        }
        None => Ok(TomlConfig::default()),
    };

    // 驗證配置
    let settings = match settings.and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            fail(e);
        }
    };

    match run_command(&config.command, &settings).await {
        Ok(output) if output.is_empty() => {}
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ Drill failed: {} (Severity: {:?})", e, e.severity());
            fail(e);
        }
    }
}

fn fail(e: DrillError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
