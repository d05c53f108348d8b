use crate::contracts::IERC20;
use crate::core::contract::confirm;
use crate::core::{DynProvider, Result};
use alloy::primitives::{Address, U256};

/// Let `spender` pull up to `amount` of `token` from `account`.
pub async fn approve_erc20(
    provider: &DynProvider,
    token: Address,
    spender: Address,
    amount: U256,
    account: Address,
    confirmations: u64,
) -> Result<()> {
    tracing::info!("🔓 Approving {} of {} for {}", amount, token, spender);
    let pending = IERC20::new(token, provider)
        .approve(spender, amount)
        .from(account)
        .send()
        .await?;
    confirm("approve", pending, confirmations).await?;
    println!("Approved!");
    Ok(())
}

pub async fn allowance(
    provider: &DynProvider,
    token: Address,
    owner: Address,
    spender: Address,
) -> Result<U256> {
    Ok(IERC20::new(token, provider)
        .allowance(owner, spender)
        .call()
        .await?)
}

pub async fn balance_of(provider: &DynProvider, token: Address, account: Address) -> Result<U256> {
    Ok(IERC20::new(token, provider).balanceOf(account).call().await?)
}
