//! Configuration
//!
//! Layered configuration: built-in defaults, then the global config file,
//! then an explicit `--config` file, then `AETHERTREE__*` environment
//! variables (highest).

mod facade;
mod merge;
pub mod paths;
mod sources;

pub use facade::ConfigLoader;

use crate::api::ApiConfig;
use crate::listing::ListingConfig;
use crate::logging::LoggingConfig;
use crate::tree::{ParserConfig, RenderConfig};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `AETHERTREE__LISTING__MAX_FILES=20`.
pub const ENV_PREFIX: &str = "AETHERTREE";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AetherConfig {
    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub listing: ListingConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}
