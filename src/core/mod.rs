pub mod contract;
pub mod erc20;
pub mod pool;
pub mod price;
pub mod runner;
pub mod weth;

pub use crate::domain::model::{AccountData, PriceQuote, RunReport};
pub use crate::utils::error::Result;
pub use alloy::providers::DynProvider;
