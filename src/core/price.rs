use crate::contracts::AggregatorV3Interface;
use crate::core::{DynProvider, PriceQuote, Result};
use crate::utils::error::LendingError;
use alloy::primitives::{Address, I256, U256};

const BPS_DENOMINATOR: u64 = 10_000;

/// Latest answer of a Chainlink feed.
pub async fn latest_price(provider: &DynProvider, feed: Address) -> Result<PriceQuote> {
    let round = AggregatorV3Interface::new(feed, provider)
        .latestRoundData()
        .call()
        .await?;

    let quote = PriceQuote {
        round_id: round.roundId.to::<u128>(),
        answer: round.answer,
        updated_at: round.updatedAt.saturating_to::<u64>(),
    };

    println!("The DAI / ETH price is {}", quote.answer);
    match chrono::DateTime::from_timestamp(quote.updated_at as i64, 0) {
        Some(updated) => tracing::info!(
            "🕒 Round {} updated at {}",
            quote.round_id,
            updated.to_rfc3339()
        ),
        None => tracing::warn!("⚠️ Round {} has an unreadable timestamp", quote.round_id),
    }

    Ok(quote)
}

/// Feed answers are signed; only a strictly positive one can price a borrow.
pub fn positive_price(answer: I256) -> Result<U256> {
    if answer <= I256::ZERO {
        return Err(LendingError::InvalidPriceError {
            answer: answer.to_string(),
        });
    }
    Ok(answer.into_raw())
}

/// DAI (in wei) worth `ratio_bps` of `available_borrows_eth`, given the DAI
/// price in ETH wei.
pub fn borrow_amount(available_borrows_eth: U256, price: U256, ratio_bps: u64) -> Result<U256> {
    if price.is_zero() {
        return Err(LendingError::InvalidPriceError {
            answer: "0".to_string(),
        });
    }

    // 先乘後除，避免整數除法提早截斷
    let one_dai = U256::from(10u64).pow(U256::from(18));
    Ok(available_borrows_eth * U256::from(ratio_bps) * one_dai
        / U256::from(BPS_DENOMINATOR)
        / price)
}
