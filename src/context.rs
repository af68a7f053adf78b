//! Execution context seen by plugins while a stage runs.

use async_trait::async_trait;

/// Error type the host's context reports from `announce`.
pub type HostError = Box<dyn std::error::Error + Send + Sync>;

/// Per-invocation context owned by the host.
///
/// Plugins borrow it for the duration of one `execute` call and never keep it.
#[async_trait]
pub trait ExecutionContext: Send {
    /// Current message, if any.
    fn message(&self) -> Option<&str>;

    /// Publish `text` to whoever is listening on the far side of the pipeline.
    async fn announce(&mut self, text: &str) -> Result<(), HostError>;
}

// --- Fake implementation ---

/// In-memory context that records announcements.
#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    pub message: Option<String>,
    announced: Vec<String>,
    fail_with: Option<String>,
}

impl RecordingContext {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Context without a message.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Make every subsequent `announce` call fail with `error`.
    pub fn failing_with(mut self, error: impl Into<String>) -> Self {
        self.fail_with = Some(error.into());
        self
    }

    /// Texts announced so far, in call order.
    pub fn announced(&self) -> &[String] {
        &self.announced
    }
}

#[async_trait]
impl ExecutionContext for RecordingContext {
    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    async fn announce(&mut self, text: &str) -> Result<(), HostError> {
        if let Some(error) = &self.fail_with {
            return Err(error.clone().into());
        }
        self.announced.push(text.to_string());
        Ok(())
    }
}
