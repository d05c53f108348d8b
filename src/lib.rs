pub mod adapters;
pub mod config;
pub mod contracts;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, GetWethConfig, NetworkArgs};

pub use adapters::provider::connect;
pub use config::network::{NetworkAddresses, NetworkTable};
pub use config::{RateMode, RunSettings};
pub use core::runner::LendingRun;
pub use domain::model::{AccountData, RunReport};
pub use utils::error::{LendingError, Result};
