//! Configuration for the MAC vendor filter.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use vf_error::{ConfigError, Result};
use vf_traits::FieldRef;

/// Configuration for a [`MacVendorFilter`](crate::MacVendorFilter).
///
/// Field names accept `name` or `[outer][inner]` notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Event field holding the MAC address.
    pub source: String,

    /// Event field that receives the vendor name.
    pub target: String,

    /// Path to the YAML vendor mapping document.
    pub map_path: PathBuf,
}

impl FilterConfig {
    /// Creates a new config.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        map_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            map_path: map_path.into(),
        }
    }

    /// Builds a config from plugin parameters (`source`, `target`, `map_path`).
    ///
    /// Unrecognized parameters are ignored.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self> {
        let option = |key: &'static str| {
            params
                .get(key)
                .cloned()
                .ok_or(ConfigError::MissingOption(key))
        };

        Ok(Self {
            source: option("source")?,
            target: option("target")?,
            map_path: option("map_path")?.into(),
        })
    }

    /// Returns the parsed source field reference.
    pub fn source_field(&self) -> FieldRef {
        FieldRef::new(self.source.as_str())
    }

    /// Returns the parsed target field reference.
    pub fn target_field(&self) -> FieldRef {
        FieldRef::new(self.target.as_str())
    }
}
