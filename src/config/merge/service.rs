//! MergeService: orchestrates sources, applies merge policy, deserializes to AetherConfig.

use super::merge_policy;
use crate::config::sources::{environment, explicit_file, global_file};
use crate::config::AetherConfig;
use crate::error::ApiError;
use std::path::Path;
use tracing::debug;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> global file -> explicit file -> environment (highest).
    pub fn load(explicit: Option<&Path>) -> Result<AetherConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = match explicit {
            Some(path) => {
                debug!(path = %path.display(), "Layering explicit config file");
                explicit_file::add_to_builder(builder, path)?
            }
            None => builder,
        };
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
