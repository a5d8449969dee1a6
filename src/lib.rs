pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{ChainConfig, OutputFormat};
pub use crate::core::{chain::ConfiguredChain, engine::ChainEngine};
pub use domain::{model::ChainOutcome, sequence::Sequence};
pub use utils::error::{ChainError, Result};
