use crate::utils::error::{LendingError, Result};
use crate::utils::validation::{validate_url, Validate};
use alloy::primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const MAINNET: &str = "mainnet";

/// Contract addresses the run needs on one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAddresses {
    pub weth: Address,
    pub lending_pool_addresses_provider: Address,
    pub dai: Address,
    pub dai_eth_price_feed: Address,
}

impl NetworkAddresses {
    pub fn mainnet() -> Self {
        Self {
            weth: address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
            lending_pool_addresses_provider: address!("B53C1a33016B2DC2fF3653530bfF1848a515c8c5"),
            dai: address!("6B175474E89094C44Da98b954EedeAC495271d0F"),
            dai_eth_price_feed: address!("773616E4d11A78F511299002da57A0a94577F1f4"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEntry {
    pub rpc_url: Option<String>,
    #[serde(flatten)]
    pub addresses: NetworkAddresses,
}

/// network 名稱 → 合約地址表
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkTable {
    #[serde(default)]
    pub networks: HashMap<String, NetworkEntry>,
}

impl NetworkTable {
    pub fn builtin() -> Self {
        let mut networks = HashMap::new();
        networks.insert(
            MAINNET.to_string(),
            NetworkEntry {
                rpc_url: None,
                addresses: NetworkAddresses::mainnet(),
            },
        );
        Self { networks }
    }

    /// 從 TOML 檔案載入，檔案中的 network 會覆蓋內建的同名設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LendingError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let parsed: NetworkTable =
            toml::from_str(&processed_content).map_err(|e| LendingError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;

        let mut table = Self::builtin();
        table.networks.extend(parsed.networks);
        Ok(table)
    }

    /// 替換環境變數 (例如 ${MAINNET_RPC_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
            LendingError::ConfigError {
                message: format!("Invalid env var pattern: {}", e),
            }
        })?;

        let mut missing = Vec::new();
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let name = &caps[1];
            match std::env::var(name) {
                Ok(value) => value,
                Err(_) => {
                    missing.push(name.to_string());
                    String::new()
                }
            }
        });

        if !missing.is_empty() {
            return Err(LendingError::ConfigError {
                message: format!("Missing environment variables: {}", missing.join(", ")),
            });
        }

        Ok(result.into_owned())
    }

    pub fn get(&self, name: &str) -> Result<&NetworkEntry> {
        self.networks
            .get(name)
            .ok_or_else(|| LendingError::UnknownNetworkError {
                name: name.to_string(),
            })
    }
}

impl Validate for NetworkTable {
    fn validate(&self) -> Result<()> {
        for (name, entry) in &self.networks {
            if let Some(rpc_url) = &entry.rpc_url {
                validate_url(&format!("networks.{}.rpc_url", name), rpc_url)?;
            }
        }
        Ok(())
    }
}
