//! Error types for stage plugins.

use thiserror::Error;

use crate::context::HostError;
use crate::stage::Stage;

/// Errors raised while configuring, assembling, or executing plugins.
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("{plugin} configuration validation failed: {}", errors.join(", "))]
    Configuration { plugin: String, errors: Vec<String> },
    #[error("Invalid stage '{value}'. Must be one of: {}", valid.join(", "))]
    InvalidStage { value: String, valid: Vec<String> },
    #[error("Plugin '{plugin}' does not support stage {stage}; supported: {}", format_stages(supported))]
    StageMismatch {
        plugin: String,
        stage: Stage,
        supported: Vec<Stage>,
    },
    #[error("Stage {0} has plugins but is missing from the stage order")]
    UnorderedStage(Stage),
    /// Failure raised by the host's execution context, surfaced untouched.
    #[error(transparent)]
    Host(HostError),
}

impl PluginError {
    pub(crate) fn invalid_stage(value: impl Into<String>) -> Self {
        PluginError::InvalidStage {
            value: value.into(),
            valid: Stage::ALL.iter().map(|s| s.as_str().to_string()).collect(),
        }
    }
}

fn format_stages(stages: &[Stage]) -> String {
    stages
        .iter()
        .map(Stage::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience alias for plugin results.
pub type PluginResult<T> = Result<T, PluginError>;
