// Adapters layer: how the run reaches an Ethereum node.

pub mod provider;
