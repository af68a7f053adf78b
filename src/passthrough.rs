//! The configurable pass-through plugin.
//!
//! One type covers every stage of the default pipeline: the stage is a
//! construction-time setting rather than a subtype. At the terminal stage the
//! plugin can announce the message it forwards.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::any::Any;

use crate::config::{self, PassThroughConfig, ValidationResult, STAGE_KEY};
use crate::context::ExecutionContext;
use crate::error::{PluginError, PluginResult};
use crate::resources::Resources;
use crate::stage::Stage;
use crate::traits::Plugin;

pub const PASS_THROUGH_PLUGIN: &str = "PassThroughPlugin";

/// Forwards the current message unchanged, optionally announcing it at
/// [`Stage::TERMINAL`].
#[derive(Debug, Clone)]
pub struct PassThroughPlugin {
    resources: Resources,
    config: PassThroughConfig,
    supported_stages: [Stage; 1],
}

impl PassThroughPlugin {
    pub fn new(resources: Resources, config: &Value) -> PluginResult<Self> {
        let config = PassThroughConfig::from_value(PASS_THROUGH_PLUGIN, config)?;
        tracing::debug!(
            plugin = PASS_THROUGH_PLUGIN,
            stage = %config.stage,
            announce_enabled = config.announce_enabled,
            resources = resources.len(),
            "configured plugin"
        );
        Ok(Self {
            resources,
            supported_stages: [config.stage],
            config,
        })
    }

    /// Build a plugin bound to `stage`, with `overrides` merged on top.
    ///
    /// Keys in `overrides` replace the defaults, `stage` included.
    pub fn for_stage(
        resources: Resources,
        stage: Stage,
        overrides: Option<&Value>,
    ) -> PluginResult<Self> {
        let mut merged = Map::new();
        merged.insert(STAGE_KEY.to_string(), Value::from(stage.as_str()));
        match overrides {
            None | Some(Value::Null) => {}
            Some(Value::Object(extra)) => {
                merged.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            Some(other) => return Self::new(resources, other),
        }
        Self::new(resources, &Value::Object(merged))
    }

    /// Schema check used by [`PassThroughPlugin::new`].
    pub fn validate_config(config: &Value) -> ValidationResult {
        config::validate_config(config)
    }

    pub fn config(&self) -> &PassThroughConfig {
        &self.config
    }

    pub fn stage(&self) -> Stage {
        self.config.stage
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    fn announces(&self) -> bool {
        self.config.stage.is_terminal() && self.config.announce_enabled
    }
}

#[async_trait]
impl Plugin for PassThroughPlugin {
    fn name(&self) -> &str {
        PASS_THROUGH_PLUGIN
    }

    fn supported_stages(&self) -> &[Stage] {
        &self.supported_stages
    }

    async fn execute(&self, context: &mut dyn ExecutionContext) -> PluginResult<String> {
        let message = context.message().unwrap_or_default().to_string();
        tracing::trace!(stage = %self.config.stage, len = message.len(), "pass-through");

        if self.announces() {
            tracing::debug!(stage = %self.config.stage, "announcing message");
            context.announce(&message).await.map_err(PluginError::Host)?;
        }

        Ok(message)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
