use aave_borrow::utils::{logger, validation::Validate};
use aave_borrow::{CliConfig, LendingRun, RunReport};
use clap::Parser;

async fn run(config: &CliConfig) -> aave_borrow::Result<RunReport> {
    // 驗證配置並解析 network 設定
    config.validate()?;
    let table = config.connection.network_table()?;
    let settings = config.run_settings(&table)?;
    let provider = config.connection.connect(&table)?;

    LendingRun::new(provider, settings).run().await
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();
    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting aave-borrow");
    tracing::debug!("CLI config: {:?}", config);

    match run(&config).await {
        Ok(report) => {
            tracing::info!("✅ Run completed for {}", report.account);
            if let Some(borrow) = &report.borrow {
                tracing::info!(
                    "📉 Debt after repay: {} ETH (accrued interest may remain)",
                    borrow.after_repay.total_debt_eth
                );
            }
            match serde_json::to_string(&report) {
                Ok(json) => tracing::debug!("Report: {}", json),
                Err(e) => tracing::warn!("⚠️ Report not serializable: {}", e),
            }
        }
        Err(e) => {
            // 任何一步失敗都直接中止，已送出的交易不會回滾
            tracing::error!("❌ Run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
