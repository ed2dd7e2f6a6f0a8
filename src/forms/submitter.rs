//! Submission Operation
//!
//! The pipeline hands accepted form data to a [`Submitter`]. The site has
//! no backend yet, so the shipped implementation only simulates latency.

use std::collections::BTreeMap;

use async_trait::async_trait;

/// Field name -> value. Later fields with the same name overwrite earlier ones.
pub type FormData = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("transport failed: {0}")]
    Transport(String),
}

/// Delivers form data somewhere. Resolves `Ok` on success.
#[async_trait(?Send)]
pub trait Submitter {
    async fn submit(&self, data: &FormData) -> Result<(), SubmitError>;
}

/// Waits a fixed latency, logs the data and succeeds
pub struct SimulatedSubmitter {
    latency_ms: u32,
}

impl SimulatedSubmitter {
    pub fn new(latency_ms: u32) -> Self {
        Self { latency_ms }
    }
}

#[async_trait(?Send)]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, data: &FormData) -> Result<(), SubmitError> {
        gloo_timers::future::TimeoutFuture::new(self.latency_ms).await;
        let payload = serde_json::to_string(data).map_err(|e| SubmitError::Transport(e.to_string()))?;
        tracing::info!(%payload, "simulated form submission");
        Ok(())
    }
}
