use crate::core::Result;
use crate::utils::error::LendingError;
use alloy::network::Ethereum;
use alloy::providers::PendingTransactionBuilder;
use alloy::rpc::types::TransactionReceipt;

/// Wait until a sent transaction is `confirmations` blocks deep.
/// A mined receipt with status 0 is an error.
pub async fn confirm(
    label: &str,
    pending: PendingTransactionBuilder<Ethereum>,
    confirmations: u64,
) -> Result<TransactionReceipt> {
    let tx_hash = *pending.tx_hash();
    tracing::debug!("📨 {} sent: {}", label, tx_hash);

    let receipt = pending
        .with_required_confirmations(confirmations)
        .get_receipt()
        .await?;
    if !receipt.status() {
        return Err(LendingError::TransactionReverted { tx_hash });
    }

    tracing::debug!(
        "⛽ {} used {} gas in block {:?}",
        label,
        receipt.gas_used,
        receipt.block_number
    );
    Ok(receipt)
}
