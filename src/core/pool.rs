use crate::config::RateMode;
use crate::contracts::ILendingPool::{self, ILendingPoolInstance};
use crate::contracts::ILendingPoolAddressesProvider;
use crate::core::contract::confirm;
use crate::core::erc20::approve_erc20;
use crate::core::{AccountData, DynProvider, Result};
use alloy::primitives::{Address, U256};

/// Aave has no live referral program; 0 means "no referrer".
pub const REFERRAL_CODE: u16 = 0;

/// A lending pool resolved for one caller.
pub struct LendingPool<'a> {
    provider: &'a DynProvider,
    contract: ILendingPoolInstance<&'a DynProvider>,
    account: Address,
    confirmations: u64,
}

impl<'a> LendingPool<'a> {
    /// 透過 address provider 取得目前的 lending pool 地址
    pub async fn resolve(
        provider: &'a DynProvider,
        addresses_provider: Address,
        account: Address,
        confirmations: u64,
    ) -> Result<Self> {
        let address = ILendingPoolAddressesProvider::new(addresses_provider, provider)
            .getLendingPool()
            .from(account)
            .call()
            .await?;
        tracing::debug!(
            "🏦 Address provider {} points at {}",
            addresses_provider,
            address
        );

        Ok(Self {
            provider,
            contract: ILendingPool::new(address, provider),
            account,
            confirmations,
        })
    }

    pub fn address(&self) -> Address {
        *self.contract.address()
    }

    pub fn account(&self) -> Address {
        self.account
    }

    /// The caller must have approved `amount` of `asset` to the pool first.
    pub async fn deposit(&self, asset: Address, amount: U256) -> Result<()> {
        println!("Depositing...");
        let pending = self
            .contract
            .deposit(asset, amount, self.account, REFERRAL_CODE)
            .from(self.account)
            .send()
            .await?;
        confirm("pool.deposit", pending, self.confirmations).await?;
        println!("Deposited!");
        Ok(())
    }

    pub async fn user_account_data(&self) -> Result<AccountData> {
        let data = self
            .contract
            .getUserAccountData(self.account)
            .from(self.account)
            .call()
            .await?;

        let account_data = AccountData {
            total_collateral_eth: data.totalCollateralETH,
            total_debt_eth: data.totalDebtETH,
            available_borrows_eth: data.availableBorrowsETH,
            current_liquidation_threshold: data.currentLiquidationThreshold,
            ltv: data.ltv,
            health_factor: data.healthFactor,
        };

        println!("Total Collateral: {} ETH", account_data.total_collateral_eth);
        println!("Total Debt: {} ETH", account_data.total_debt_eth);
        println!("Available to Borrow: {} ETH", account_data.available_borrows_eth);
        tracing::debug!(
            "LTV {} / liquidation threshold {} / health factor {}",
            account_data.ltv,
            account_data.current_liquidation_threshold,
            account_data.health_factor
        );

        Ok(account_data)
    }

    pub async fn borrow(&self, asset: Address, amount: U256, rate_mode: RateMode) -> Result<()> {
        let pending = self
            .contract
            .borrow(
                asset,
                amount,
                rate_mode.as_u256(),
                REFERRAL_CODE,
                self.account,
            )
            .from(self.account)
            .send()
            .await?;
        confirm("pool.borrow", pending, self.confirmations).await?;
        println!("You've borrowed!");
        Ok(())
    }

    /// Approves `amount` of `asset` to the pool, then repays it. Interest
    /// accrued since the borrow stays on the books.
    pub async fn repay(&self, asset: Address, amount: U256, rate_mode: RateMode) -> Result<()> {
        approve_erc20(
            self.provider,
            asset,
            self.address(),
            amount,
            self.account,
            self.confirmations,
        )
        .await?;

        let pending = self
            .contract
            .repay(asset, amount, rate_mode.as_u256(), self.account)
            .from(self.account)
            .send()
            .await?;
        confirm("pool.repay", pending, self.confirmations).await?;
        println!("Repaid!");
        Ok(())
    }
}
