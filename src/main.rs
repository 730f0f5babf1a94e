use clap::Parser;
use garden_advice::utils::logger;
use garden_advice::{AdvisorEngine, CliConfig, CycleOutcome, StdConsole};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting garden-advice CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 建立主控台與引擎
    let console = StdConsole::new();
    let mut engine = AdvisorEngine::new(console);

    match engine.run() {
        Ok(CycleOutcome::Advised { month, season }) => {
            tracing::info!("✅ Advice delivered for month {} ({})", month.number(), season);
        }
        Ok(CycleOutcome::Rejected { message }) => {
            // 無效輸入已回報給使用者,正常結束
            tracing::warn!("⚠️ Rejected input: {}", message);
        }
        Err(e) => {
            tracing::error!("❌ Console error: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
