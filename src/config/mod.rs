pub mod network;

#[cfg(feature = "cli")]
use crate::adapters::provider::connect;
use crate::config::network::{NetworkAddresses, NetworkTable};
#[cfg(feature = "cli")]
use crate::core::DynProvider;
use crate::utils::error::{LendingError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use alloy::primitives::{utils::parse_ether, Address, U256};
use std::time::Duration;

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// Aave v2 interest-rate mode passed to `borrow`/`repay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RateMode {
    Stable,
    Variable,
}

impl RateMode {
    pub fn as_u256(self) -> U256 {
        match self {
            RateMode::Stable => U256::from(1),
            RateMode::Variable => U256::from(2),
        }
    }
}

/// Everything a run needs once the CLI and the network table are resolved.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub addresses: NetworkAddresses,
    pub account: Option<Address>,
    pub amount: U256,
    pub borrow_ratio_bps: u64,
    pub rate_mode: RateMode,
    pub confirmations: u64,
    pub deposit_only: bool,
}

impl RunSettings {
    /// mainnet 地址加上原腳本的預設值 (0.02 ETH, 95%, stable)
    pub fn with_defaults(addresses: NetworkAddresses) -> Self {
        Self {
            addresses,
            account: None,
            amount: U256::from(20_000_000_000_000_000u64),
            borrow_ratio_bps: 9_500,
            rate_mode: RateMode::Stable,
            confirmations: 1,
            deposit_only: false,
        }
    }
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        validate_range("borrow_ratio_bps", self.borrow_ratio_bps, 1, 10_000)?;
        validate_positive_number("confirmations", self.confirmations, 1)?;
        if self.amount.is_zero() {
            return Err(LendingError::InvalidConfigValueError {
                field: "amount".to_string(),
                value: "0".to_string(),
                reason: "Amount must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Where the node is and how patiently to talk to it. Shared by both binaries.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Args)]
pub struct NetworkArgs {
    /// Network entry to use from the address table
    #[arg(long, default_value = network::MAINNET)]
    pub network: String,

    /// TOML file with extra network entries
    #[arg(long)]
    pub networks_file: Option<String>,

    /// JSON-RPC endpoint, overrides the network entry
    #[arg(long)]
    pub rpc_url: Option<String>,

    #[arg(long, default_value = "1000")]
    pub poll_interval_ms: u64,

    #[arg(long, default_value = "30")]
    pub request_timeout_secs: u64,
}

#[cfg(feature = "cli")]
impl NetworkArgs {
    pub fn network_table(&self) -> Result<NetworkTable> {
        let table = match &self.networks_file {
            Some(path) => NetworkTable::from_file(path)?,
            None => NetworkTable::builtin(),
        };
        table.validate()?;
        Ok(table)
    }

    pub fn addresses(&self, table: &NetworkTable) -> Result<NetworkAddresses> {
        Ok(table.get(&self.network)?.addresses.clone())
    }

    /// 決定 RPC endpoint: CLI 參數 > network 設定 > 預設值
    pub fn resolve_rpc_url(&self, table: &NetworkTable) -> Result<String> {
        if let Some(url) = &self.rpc_url {
            return Ok(url.clone());
        }
        let entry = table.get(&self.network)?;
        Ok(entry
            .rpc_url
            .clone()
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string()))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Provider for the resolved endpoint, using the configured timeouts.
    pub fn connect(&self, table: &NetworkTable) -> Result<DynProvider> {
        let rpc_url = self.resolve_rpc_url(table)?;
        validate_url("rpc_url", &rpc_url)?;
        tracing::info!("🌐 Network {} via {}", self.network, rpc_url);
        connect(&rpc_url, self.request_timeout(), self.poll_interval())
    }
}

#[cfg(feature = "cli")]
impl Validate for NetworkArgs {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("network", &self.network)?;
        if let Some(url) = &self.rpc_url {
            validate_url("rpc_url", url)?;
        }
        validate_positive_number("poll_interval_ms", self.poll_interval_ms, 1)?;
        validate_positive_number("request_timeout_secs", self.request_timeout_secs, 1)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "aave-borrow")]
#[command(about = "Deposit WETH into Aave, borrow DAI against it and repay")]
pub struct CliConfig {
    #[command(flatten)]
    pub connection: NetworkArgs,

    /// Sender account, defaults to the node's first account
    #[arg(long)]
    pub account: Option<Address>,

    /// Amount of ETH to wrap and deposit
    #[arg(long, default_value = "0.02")]
    pub amount: String,

    /// Share of the available borrows to take, in basis points
    #[arg(long, default_value = "9500")]
    pub borrow_ratio_bps: u64,

    #[arg(long, value_enum, default_value = "stable")]
    pub rate_mode: RateMode,

    #[arg(long, default_value = "1")]
    pub confirmations: u64,

    /// Only fund, approve and deposit
    #[arg(long)]
    pub deposit_only: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn run_settings(&self, table: &NetworkTable) -> Result<RunSettings> {
        let settings = RunSettings {
            addresses: self.connection.addresses(table)?,
            account: self.account,
            amount: parse_ether(&self.amount)?,
            borrow_ratio_bps: self.borrow_ratio_bps,
            rate_mode: self.rate_mode,
            confirmations: self.confirmations,
            deposit_only: self.deposit_only,
        };
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.connection.validate()?;
        validate_non_empty_string("amount", &self.amount)
    }
}

/// Arguments of the standalone `get_weth` binary.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "get_weth")]
#[command(about = "Wrap ETH into WETH for the sender account")]
pub struct GetWethConfig {
    #[command(flatten)]
    pub connection: NetworkArgs,

    #[arg(long)]
    pub account: Option<Address>,

    #[arg(long, default_value = "0.02")]
    pub amount: String,

    #[arg(long, default_value = "1")]
    pub confirmations: u64,

    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl GetWethConfig {
    /// Validated amount in wei.
    pub fn amount_wei(&self) -> Result<U256> {
        let amount = parse_ether(&self.amount)?;
        if amount.is_zero() {
            return Err(LendingError::InvalidConfigValueError {
                field: "amount".to_string(),
                value: self.amount.clone(),
                reason: "Amount must be greater than zero".to_string(),
            });
        }
        Ok(amount)
    }
}

#[cfg(feature = "cli")]
impl Validate for GetWethConfig {
    fn validate(&self) -> Result<()> {
        self.connection.validate()?;
        validate_positive_number("confirmations", self.confirmations, 1)
    }
}
