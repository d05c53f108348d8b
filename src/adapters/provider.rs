use crate::utils::error::{LendingError, Result};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::transports::http::Http;
use alloy::transports::IntoBoxTransport;
use std::time::Duration;
use url::Url;

/// HTTP provider for `rpc_url`. Every request gives up after
/// `request_timeout`; receipts are polled every `poll_interval`.
pub fn connect(
    rpc_url: &str,
    request_timeout: Duration,
    poll_interval: Duration,
) -> Result<DynProvider> {
    let url: Url = rpc_url
        .parse()
        .map_err(|e: url::ParseError| LendingError::InvalidConfigValueError {
            field: "rpc_url".to_string(),
            value: rpc_url.to_string(),
            reason: e.to_string(),
        })?;

    let client = reqwest::Client::builder().timeout(request_timeout).build()?;
    let transport = Http::with_client(client, url);
    let is_local = transport.guess_local();
    tracing::debug!("🔌 Connecting to {} (local: {})", rpc_url, is_local);

    Ok(with_transport(transport, is_local, poll_interval))
}

/// Wrap any transport in a provider with no fillers: gas, nonce and
/// signature are left to the node's unlocked account.
pub fn with_transport<T: IntoBoxTransport>(
    transport: T,
    is_local: bool,
    poll_interval: Duration,
) -> DynProvider {
    let client = RpcClient::new(transport, is_local).with_poll_interval(poll_interval);
    ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_client(client)
        .erased()
}
