#![allow(unused)]

use std::sync::Arc;

use async_trait::async_trait;

use stage_plugins::{
    ExecutionContext, HostError, OutputAdapter, PluginResult, Resources, ToolPlugin,
};

/// Install a test subscriber once; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

pub struct MockLlm;

pub fn mock_resources() -> Resources {
    let mut resources = Resources::new();
    resources.insert("test_resource", ());
    resources.insert_arc("llm", Arc::new(MockLlm));
    resources
}

/// Context whose `announce` yields to the runtime before recording, the way a
/// host forwarding to a channel would.
pub struct YieldingContext {
    pub message: Option<String>,
    pub announced: Vec<String>,
}

impl YieldingContext {
    pub fn new(message: Option<&str>) -> Self {
        Self {
            message: message.map(str::to_string),
            announced: Vec::new(),
        }
    }
}

#[async_trait]
impl ExecutionContext for YieldingContext {
    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    async fn announce(&mut self, text: &str) -> Result<(), HostError> {
        tokio::task::yield_now().await;
        self.announced.push(text.to_string());
        Ok(())
    }
}

/// Output adapter wrapping the message in a JSON envelope.
pub struct JsonEnvelope;

#[async_trait]
impl OutputAdapter for JsonEnvelope {
    fn name(&self) -> &str {
        "json_envelope"
    }

    async fn adapt_output(&self, context: &mut dyn ExecutionContext) -> PluginResult<String> {
        let body = serde_json::json!({ "reply": context.message().unwrap_or_default() });
        context.announce(&body.to_string()).await.map_err(stage_plugins::PluginError::Host)?;
        Ok(body.to_string())
    }
}

/// Tool that reports its invocation and leaves the message alone.
pub struct NoopTool;

#[async_trait]
impl ToolPlugin for NoopTool {
    fn name(&self) -> &str {
        "noop_tool"
    }

    async fn invoke(&self, context: &mut dyn ExecutionContext) -> PluginResult<String> {
        Ok(context.message().unwrap_or_default().to_string())
    }
}
