// Domain layer: what a run reads back from the chain.

pub mod model;
