//! Stage-typed extension points.
//!
//! Each contract is a trait a downstream crate implements; the matching
//! wrapper fixes the stages it may run in and the resources it needs, so an
//! implementation cannot end up registered at the wrong point of the pipeline.
//!
//! | Contract | Wrapper | Stages | Dependencies |
//! |----------|---------|--------|--------------|
//! | [`InputAdapter`] | [`InputAdapterPlugin`] | input | none |
//! | [`OutputAdapter`] | [`OutputAdapterPlugin`] | output | none |
//! | [`PromptPlugin`] | [`PromptPluginAdapter`] | think, review | `llm` |
//! | [`ToolPlugin`] | [`ToolPluginAdapter`] | do | none |

use async_trait::async_trait;

use crate::context::ExecutionContext;
use crate::error::PluginResult;

/// Converts external input into the pipeline's message representation.
#[async_trait]
pub trait InputAdapter: Send + Sync {
    fn name(&self) -> &str;

    async fn adapt_input(&self, context: &mut dyn ExecutionContext) -> PluginResult<String>;
}

/// Converts pipeline results into an external representation.
#[async_trait]
pub trait OutputAdapter: Send + Sync {
    fn name(&self) -> &str;

    async fn adapt_output(&self, context: &mut dyn ExecutionContext) -> PluginResult<String>;
}

/// LLM-driven reasoning or validation.
#[async_trait]
pub trait PromptPlugin: Send + Sync {
    fn name(&self) -> &str;

    async fn prompt(&self, context: &mut dyn ExecutionContext) -> PluginResult<String>;
}

/// Executes an external action.
#[async_trait]
pub trait ToolPlugin: Send + Sync {
    fn name(&self) -> &str;

    async fn invoke(&self, context: &mut dyn ExecutionContext) -> PluginResult<String>;
}

stage_bound_plugin! {
    /// Runs an [`InputAdapter`] in the input stage.
    InputAdapterPlugin<InputAdapter> => adapt_input,
    stages: [Input],
    dependencies: [],
}

stage_bound_plugin! {
    /// Runs an [`OutputAdapter`] in the output stage.
    OutputAdapterPlugin<OutputAdapter> => adapt_output,
    stages: [Output],
    dependencies: [],
}

stage_bound_plugin! {
    /// Runs a [`PromptPlugin`] in the think and review stages.
    PromptPluginAdapter<PromptPlugin> => prompt,
    stages: [Think, Review],
    dependencies: ["llm"],
}

stage_bound_plugin! {
    /// Runs a [`ToolPlugin`] in the do stage.
    ToolPluginAdapter<ToolPlugin> => invoke,
    stages: [Do],
    dependencies: [],
}
