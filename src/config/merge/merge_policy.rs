//! Base layer: serialized defaults, so partially specified sections still
//! deserialize.

use crate::config::AetherConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = Config::try_from(&AetherConfig::default())?;
    Ok(Config::builder().add_source(defaults))
}
