use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

use crate::SubmissionPayload;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    Failure(String),
}

/// Delivers a validated contact message to its destination.
///
/// Expected failures (rejected message, unreachable relay) resolve to
/// [`SubmissionResult::Failure`]. `Err` is reserved for faults the gateway
/// could not anticipate.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn send(&self, payload: SubmissionPayload) -> anyhow::Result<SubmissionResult>;
}

#[async_trait]
impl<G: SubmissionGateway + ?Sized> SubmissionGateway for Arc<G> {
    async fn send(&self, payload: SubmissionPayload) -> anyhow::Result<SubmissionResult> {
        (**self).send(payload).await
    }
}

#[async_trait]
impl<G: SubmissionGateway + ?Sized> SubmissionGateway for &G {
    async fn send(&self, payload: SubmissionPayload) -> anyhow::Result<SubmissionResult> {
        (**self).send(payload).await
    }
}

/// Development gateway: waits a fixed delay then reports success without
/// delivering anything.
#[derive(Clone, Debug)]
pub struct DelayedGateway {
    delay: Duration,
}

impl DelayedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for DelayedGateway {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl SubmissionGateway for DelayedGateway {
    async fn send(&self, payload: SubmissionPayload) -> anyhow::Result<SubmissionResult> {
        tracing::debug!(
            name = payload.name(),
            email = payload.email(),
            message_len = payload.message().len(),
            delay = ?self.delay,
            "Stub gateway accepted contact message"
        );

        tokio::time::sleep(self.delay).await;

        Ok(SubmissionResult::Success)
    }
}
