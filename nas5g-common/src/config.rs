//! Codec configuration
//!
//! The IE codec itself is stateless; this module carries the few policy
//! knobs an embedding application may set, loadable from YAML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::logging::{self, LogLevel};

/// How much checking a decoder applies to sub-field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueCheck {
    /// Accept every bit pattern that fits the field widths
    #[default]
    Structural,
    /// Reject code points the protocol leaves unassigned
    Semantic,
}

/// Configuration for NAS IE encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Sub-field value checking applied after decoding
    #[serde(default)]
    pub value_check: ValueCheck,
    /// Log level used when the application initializes logging from this config
    #[serde(default)]
    pub log_level: LogLevel,
}

impl CodecConfig {
    /// Configuration that rejects unassigned code points.
    pub fn semantic() -> Self {
        Self {
            value_check: ValueCheck::Semantic,
            ..Self::default()
        }
    }

    /// Returns true if decoders should run semantic validation.
    pub fn validates_values(&self) -> bool {
        self.value_check == ValueCheck::Semantic
    }

    /// Install the `fmt` subscriber at this configuration's `log_level`.
    ///
    /// Same rules as [`logging::init_logging`]: `RUST_LOG` wins and an
    /// existing global subscriber is left in place.
    pub fn init_logging(&self) {
        logging::init_logging(self.log_level);
    }

    /// Parses a codec configuration from a YAML string.
    ///
    /// # Example
    /// ```
    /// use nas5g_common::{CodecConfig, ValueCheck};
    ///
    /// let config = CodecConfig::from_yaml("value_check: semantic\n").unwrap();
    /// assert_eq!(config.value_check, ValueCheck::Semantic);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a codec configuration from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Serializes the configuration to a YAML string.
    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }
}
