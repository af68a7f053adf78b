//! Stage-to-plugin mapping handed to the host's executor, and the default
//! six-stage pipeline.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{PluginError, PluginResult};
use crate::passthrough::PassThroughPlugin;
use crate::resources::Resources;
use crate::stage::Stage;
use crate::traits::Plugin;

/// Plugins for each stage plus the order the host should run stages in.
#[derive(Clone)]
pub struct Workflow {
    steps: BTreeMap<Stage, Vec<Arc<dyn Plugin>>>,
    stage_order: Vec<Stage>,
}

impl Workflow {
    /// Every plugin must support the stage it is listed under, and every
    /// stage with plugins must appear in `stage_order`.
    pub fn new(
        steps: BTreeMap<Stage, Vec<Arc<dyn Plugin>>>,
        stage_order: &[Stage],
    ) -> PluginResult<Self> {
        for (stage, plugins) in &steps {
            if !stage_order.contains(stage) {
                return Err(PluginError::UnorderedStage(*stage));
            }
            if let Some(plugin) = plugins.iter().find(|p| !p.supports(*stage)) {
                return Err(PluginError::StageMismatch {
                    plugin: plugin.name().to_string(),
                    stage: *stage,
                    supported: plugin.supported_stages().to_vec(),
                });
            }
        }
        Ok(Self {
            steps,
            stage_order: stage_order.to_vec(),
        })
    }

    pub fn steps(&self) -> &BTreeMap<Stage, Vec<Arc<dyn Plugin>>> {
        &self.steps
    }

    pub fn plugins(&self, stage: Stage) -> &[Arc<dyn Plugin>] {
        self.steps.get(&stage).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn stage_order(&self) -> &[Stage] {
        &self.stage_order
    }

    /// Stages with their plugins, following `stage_order`.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, &[Arc<dyn Plugin>])> + '_ {
        self.stage_order
            .iter()
            .map(move |stage| (*stage, self.plugins(*stage)))
    }

    /// Total number of plugins across all stages.
    pub fn len(&self) -> usize {
        self.steps.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps: BTreeMap<Stage, Vec<&str>> = self
            .steps
            .iter()
            .map(|(stage, plugins)| (*stage, plugins.iter().map(|p| p.name()).collect()))
            .collect();
        f.debug_struct("Workflow")
            .field("steps", &steps)
            .field("stage_order", &self.stage_order)
            .finish()
    }
}

/// Build the built-in workflow: one [`PassThroughPlugin`] per stage, with
/// announce enabled on the output stage.
pub fn default_workflow(resources: &Resources) -> PluginResult<Workflow> {
    let mut steps: BTreeMap<Stage, Vec<Arc<dyn Plugin>>> = BTreeMap::new();
    for stage in Stage::ALL {
        let overrides = stage
            .is_terminal()
            .then(|| serde_json::json!({ "announce_enabled": true }));
        let plugin = PassThroughPlugin::for_stage(resources.clone(), stage, overrides.as_ref())?;
        steps.insert(stage, vec![Arc::new(plugin)]);
    }
    tracing::debug!(stages = Stage::ALL.len(), "assembled default workflow");
    Workflow::new(steps, &Stage::ALL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::{PromptPlugin, PromptPluginAdapter};
    use crate::context::ExecutionContext;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl PromptPlugin for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        async fn prompt(&self, context: &mut dyn ExecutionContext) -> PluginResult<String> {
            Ok(context.message().unwrap_or_default().to_string())
        }
    }

    #[test]
    fn test_default_workflow_shape() {
        let workflow = default_workflow(&Resources::new()).unwrap();
        assert_eq!(workflow.stage_order(), &Stage::ALL);
        assert_eq!(workflow.steps().keys().copied().collect::<Vec<_>>(), Stage::ALL.to_vec());
        assert_eq!(workflow.len(), 6);
        for (stage, plugins) in workflow.iter() {
            assert_eq!(plugins.len(), 1);
            assert_eq!(plugins[0].supported_stages(), &[stage]);
        }
    }

    #[test]
    fn test_new_rejects_stage_mismatch() {
        let mut steps: BTreeMap<Stage, Vec<Arc<dyn Plugin>>> = BTreeMap::new();
        steps.insert(Stage::Do, vec![Arc::new(PromptPluginAdapter::new(Echo))]);
        let err = Workflow::new(steps, &Stage::ALL).unwrap_err();
        match err {
            PluginError::StageMismatch { plugin, stage, supported } => {
                assert_eq!(plugin, "echo");
                assert_eq!(stage, Stage::Do);
                assert_eq!(supported, vec![Stage::Think, Stage::Review]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_unordered_stage() {
        let mut steps: BTreeMap<Stage, Vec<Arc<dyn Plugin>>> = BTreeMap::new();
        steps.insert(Stage::Review, vec![Arc::new(PromptPluginAdapter::new(Echo))]);
        let err = Workflow::new(steps, &[Stage::Think]).unwrap_err();
        assert!(matches!(err, PluginError::UnorderedStage(Stage::Review)));
    }

    #[test]
    fn test_empty_workflow() {
        let workflow = Workflow::new(BTreeMap::new(), &Stage::ALL).unwrap();
        assert!(workflow.is_empty());
        assert!(workflow.plugins(Stage::Input).is_empty());
        assert_eq!(workflow.iter().count(), 6);
        assert!(format!("{workflow:?}").contains("stage_order"));
    }
}
