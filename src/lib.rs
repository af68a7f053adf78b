//! # stage-plugins: standard plugins for a six-stage agent pipeline
//!
//! The host pipeline runs messages through six stages in order:
//! `input → parse → think → do → review → output`. This crate provides the
//! plugins that ship with it:
//!
//! - [`PassThroughPlugin`]: forwards the message unchanged; bound to exactly one
//!   stage by configuration and, at the output stage, optionally announces it.
//! - Stage-typed contracts ([`InputAdapter`], [`OutputAdapter`],
//!   [`PromptPlugin`], [`ToolPlugin`]) whose wrappers pin an implementation to
//!   its stages and declare the resources it needs.
//! - [`default_workflow`]: the built-in pipeline with one pass-through plugin
//!   per stage.
//!
//! Running the pipeline, ordering stages and injecting resources are the
//! host's job. The host talks to plugins through [`Plugin`] and
//! [`ExecutionContext`].
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use stage_plugins::{PassThroughPlugin, Plugin, RecordingContext, Resources, Stage};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), stage_plugins::PluginError> {
//! let plugin = PassThroughPlugin::new(Resources::new(), &json!({"stage": "output"}))?;
//! assert_eq!(plugin.supported_stages(), &[Stage::Output]);
//!
//! let mut ctx = RecordingContext::new("done");
//! assert_eq!(plugin.execute(&mut ctx).await?, "done");
//! assert_eq!(ctx.announced(), ["done".to_string()]);
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod config;
pub mod context;
pub mod contracts;
pub mod error;
pub mod passthrough;
pub mod resources;
pub mod stage;
pub mod traits;
pub mod workflow;

pub use crate::config::{validate_config, PassThroughConfig, ValidationResult};
pub use crate::context::{ExecutionContext, HostError, RecordingContext};
pub use crate::contracts::{
    InputAdapter, InputAdapterPlugin, OutputAdapter, OutputAdapterPlugin, PromptPlugin,
    PromptPluginAdapter, ToolPlugin, ToolPluginAdapter,
};
pub use crate::error::{PluginError, PluginResult};
pub use crate::passthrough::{PassThroughPlugin, PASS_THROUGH_PLUGIN};
pub use crate::resources::Resources;
pub use crate::stage::Stage;
pub use crate::traits::Plugin;
pub use crate::workflow::{default_workflow, Workflow};
