use aave_borrow::core::runner::sender_account;
use aave_borrow::core::weth::get_weth;
use aave_borrow::utils::{logger, validation::Validate};
use aave_borrow::GetWethConfig;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GetWethConfig::parse();
    logger::init_logger(config.verbose, false);

    config.validate()?;
    let amount = config.amount_wei()?;
    let table = config.connection.network_table()?;
    let weth = config.connection.addresses(&table)?.weth;
    let provider = config.connection.connect(&table)?;

    let account = sender_account(&provider, config.account).await?;
    get_weth(&provider, weth, account, amount, config.confirmations).await?;
    Ok(())
}
