use alloy::primitives::{Address, I256, U256};
use serde::Serialize;

/// `getUserAccountData` figures, denominated in ETH wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AccountData {
    pub total_collateral_eth: U256,
    pub total_debt_eth: U256,
    pub available_borrows_eth: U256,
    pub current_liquidation_threshold: U256,
    pub ltv: U256,
    pub health_factor: U256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub round_id: u128,
    pub answer: I256,
    pub updated_at: u64,
}

/// Outcome of the borrow/repay leg of a run.
#[derive(Debug, Clone, Serialize)]
pub struct BorrowOutcome {
    pub dai_price: U256,
    pub amount: U256,
    pub after_borrow: AccountData,
    pub after_repay: AccountData,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub account: Address,
    pub lending_pool: Address,
    pub deposited: U256,
    pub weth_balance: U256,
    pub after_deposit: AccountData,
    pub borrow: Option<BorrowOutcome>,
}
