use crate::contracts::IWeth;
use crate::core::contract::confirm;
use crate::core::{DynProvider, Result};
use alloy::primitives::{Address, U256};

/// Wrap `amount` of native ETH into WETH for `account` and return the new
/// WETH balance.
pub async fn get_weth(
    provider: &DynProvider,
    weth: Address,
    account: Address,
    amount: U256,
    confirmations: u64,
) -> Result<U256> {
    tracing::info!("💧 Wrapping {} wei into WETH", amount);
    let token = IWeth::new(weth, provider);
    let pending = token.deposit().value(amount).from(account).send().await?;
    confirm("weth.deposit", pending, confirmations).await?;

    let balance = token.balanceOf(account).call().await?;
    println!("Got {} WETH", balance);
    Ok(balance)
}
