use crate::config::RunSettings;
use crate::core::erc20::approve_erc20;
use crate::core::pool::LendingPool;
use crate::core::price::{borrow_amount, latest_price, positive_price};
use crate::core::weth::get_weth;
use crate::core::{DynProvider, Result, RunReport};
use crate::domain::model::BorrowOutcome;
use crate::utils::error::LendingError;
use alloy::primitives::utils::format_ether;
use alloy::primitives::Address;
use alloy::providers::Provider;

/// `account` if given, otherwise the node's first account.
pub async fn sender_account(provider: &DynProvider, account: Option<Address>) -> Result<Address> {
    if let Some(account) = account {
        return Ok(account);
    }
    let accounts = provider.get_accounts().await?;
    accounts.first().copied().ok_or(LendingError::NoAccountError)
}

/// Runs fund → deposit → borrow → repay in order and stops at the first
/// failure. Nothing is rolled back.
pub struct LendingRun {
    provider: DynProvider,
    settings: RunSettings,
}

impl LendingRun {
    pub fn new(provider: DynProvider, settings: RunSettings) -> Self {
        Self { provider, settings }
    }

    pub async fn run(&self) -> Result<RunReport> {
        let provider = &self.provider;
        let settings = &self.settings;
        let addresses = &settings.addresses;

        let account = sender_account(provider, settings.account).await?;
        tracing::info!("👤 Using account {}", account);

        // 1. Fund
        let weth_balance = get_weth(
            provider,
            addresses.weth,
            account,
            settings.amount,
            settings.confirmations,
        )
        .await?;

        // 2. Resolve pool
        let pool = LendingPool::resolve(
            provider,
            addresses.lending_pool_addresses_provider,
            account,
            settings.confirmations,
        )
        .await?;
        println!("LendingPool address: {}", pool.address());

        // 3. Deposit
        approve_erc20(
            provider,
            addresses.weth,
            pool.address(),
            settings.amount,
            account,
            settings.confirmations,
        )
        .await?;
        pool.deposit(addresses.weth, settings.amount).await?;
        let after_deposit = pool.user_account_data().await?;

        let mut report = RunReport {
            account,
            lending_pool: pool.address(),
            deposited: settings.amount,
            weth_balance,
            after_deposit,
            borrow: None,
        };

        if settings.deposit_only {
            tracing::info!("⏭️ Deposit-only run, skipping borrow and repay");
            return Ok(report);
        }

        // 4. Borrow
        let quote = latest_price(provider, addresses.dai_eth_price_feed).await?;
        let dai_price = positive_price(quote.answer)?;
        let amount = borrow_amount(
            after_deposit.available_borrows_eth,
            dai_price,
            settings.borrow_ratio_bps,
        )?;
        println!("You can borrow {} DAI", format_ether(amount));

        pool.borrow(addresses.dai, amount, settings.rate_mode).await?;
        let after_borrow = pool.user_account_data().await?;

        // 5. Repay (利息會讓債務留下一點尾數)
        pool.repay(addresses.dai, amount, settings.rate_mode).await?;
        let after_repay = pool.user_account_data().await?;

        report.borrow = Some(BorrowOutcome {
            dai_price,
            amount,
            after_borrow,
            after_repay,
        });
        Ok(report)
    }
}
