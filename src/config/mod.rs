//! Typed configuration for [`PassThroughPlugin`](crate::PassThroughPlugin).
//!
//! Raw configuration arrives from the host as a JSON mapping. It is checked
//! field by field (see [`validate_config`]) so that a rejected payload reports
//! every problem at once, then converted into an immutable
//! [`PassThroughConfig`].

pub mod coercion;
pub mod validation;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PluginError, PluginResult};
use crate::stage::Stage;

pub use validation::ValidationResult;
use validation::FieldReader;

pub(crate) const STAGE_KEY: &str = "stage";
pub(crate) const ANNOUNCE_KEY: &str = "announce_enabled";
/// Older payloads spell the announce flag this way.
pub(crate) const LEGACY_ANNOUNCE_KEY: &str = "enable_output_say";

const KNOWN_KEYS: &[&str] = &[STAGE_KEY, ANNOUNCE_KEY, LEGACY_ANNOUNCE_KEY];

fn default_announce() -> bool {
    true
}

/// Validated pass-through configuration.
///
/// Deserializing goes through [`PassThroughConfig::from_value`], so serde
/// payloads follow the same rules as the plugin constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct PassThroughConfig {
    pub stage: Stage,
    pub announce_enabled: bool,
}

impl TryFrom<Value> for PassThroughConfig {
    type Error = PluginError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        Self::from_value(crate::passthrough::PASS_THROUGH_PLUGIN, &raw)
    }
}

impl PassThroughConfig {
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            announce_enabled: default_announce(),
        }
    }

    pub fn with_announce(mut self, enabled: bool) -> Self {
        self.announce_enabled = enabled;
        self
    }

    /// Validate `raw` and build the typed config.
    ///
    /// Schema violations yield [`PluginError::Configuration`] listing every
    /// failing field; a well-formed but unknown stage yields
    /// [`PluginError::InvalidStage`].
    pub fn from_value(plugin: &str, raw: &Value) -> PluginResult<Self> {
        let (report, fields) = read_fields(raw);
        let (stage, announce_enabled) = match fields {
            Some(fields) if report.success => fields,
            _ => {
                tracing::warn!(plugin = %plugin, errors = ?report.errors, "rejected plugin configuration");
                return Err(PluginError::Configuration {
                    plugin: plugin.to_string(),
                    errors: report.errors,
                });
            }
        };
        let stage = stage.parse::<Stage>()?;
        Ok(Self {
            stage,
            announce_enabled,
        })
    }

    /// The config as a JSON mapping, suitable for round-tripping to the host.
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            STAGE_KEY: self.stage,
            ANNOUNCE_KEY: self.announce_enabled,
        })
    }
}

/// Check `raw` against the pass-through schema without building a config.
///
/// `stage` must be present and a string; `announce_enabled` (or its legacy
/// spelling) must be boolean-like when present. Stage membership is not
/// checked here.
pub fn validate_config(raw: &Value) -> ValidationResult {
    read_fields(raw).0
}

fn read_fields(raw: &Value) -> (ValidationResult, Option<(String, bool)>) {
    let mut reader = FieldReader::new(raw);
    let stage = reader.required_str(STAGE_KEY);
    let announce = reader.optional_bool(ANNOUNCE_KEY, &[LEGACY_ANNOUNCE_KEY], default_announce());
    let unknown = reader.unknown_keys(KNOWN_KEYS);
    if !unknown.is_empty() {
        tracing::debug!(keys = ?unknown, "ignoring unknown configuration keys");
    }
    let report = reader.finish();
    (report, stage.map(|stage| (stage, announce)))
}
