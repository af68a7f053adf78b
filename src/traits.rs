use async_trait::async_trait;
use std::any::Any;

use crate::context::ExecutionContext;
use crate::error::PluginResult;
use crate::resources::Resources;
use crate::stage::Stage;

/// Unified plugin interface.
///
/// A plugin declares the stages it may run in and the resource names it
/// expects the host to inject, then handles one message per `execute` call.
#[async_trait]
pub trait Plugin: Send + Sync {
    fn name(&self) -> &str;

    fn supported_stages(&self) -> &[Stage];

    /// Resource names the host must provide before this plugin can run.
    fn dependencies(&self) -> &[&'static str] {
        &[]
    }

    async fn execute(&self, context: &mut dyn ExecutionContext) -> PluginResult<String>;

    fn as_any(&self) -> &dyn Any;

    fn supports(&self, stage: Stage) -> bool {
        self.supported_stages().contains(&stage)
    }

    /// Declared dependencies absent from `resources`, in declaration order.
    fn missing_dependencies(&self, resources: &Resources) -> Vec<&'static str> {
        self.dependencies()
            .iter()
            .copied()
            .filter(|name| !resources.contains(name))
            .collect()
    }
}
