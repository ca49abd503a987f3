use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use fox2it_contact::{Field, FormController, SubmissionGateway, SubmissionPayload, SubmissionResult};
use tokio::sync::Notify;

#[derive(Clone, Copy, Debug)]
#[allow(dead_code)]
pub enum Outcome {
    Succeed,
    Reject,
    Fault,
}

/// Records every payload it receives and answers with a fixed outcome.
#[derive(Clone)]
pub struct FakeGateway {
    outcome: Outcome,
    delay: Duration,
    release: Option<Arc<Notify>>,
    sent: Arc<Mutex<Vec<SubmissionPayload>>>,
}

#[allow(dead_code)]
impl FakeGateway {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            delay: Duration::ZERO,
            release: None,
            sent: Arc::default(),
        }
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Hold every send until the returned handle is notified.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let release = Arc::new(Notify::new());
        self.release = Some(release.clone());

        (self, release)
    }

    pub fn sent(&self) -> Vec<SubmissionPayload> {
        self.sent.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl SubmissionGateway for FakeGateway {
    async fn send(&self, payload: SubmissionPayload) -> anyhow::Result<SubmissionResult> {
        self.sent.lock().unwrap().push(payload);

        if let Some(release) = &self.release {
            release.notified().await;
        }

        tokio::time::sleep(self.delay).await;

        match self.outcome {
            Outcome::Succeed => Ok(SubmissionResult::Success),
            Outcome::Reject => Ok(SubmissionResult::Failure("550 mailbox unavailable".to_owned())),
            Outcome::Fault => anyhow::bail!("connection reset by peer"),
        }
    }
}

#[allow(dead_code)]
pub fn fill<G: SubmissionGateway>(
    controller: &mut FormController<G>,
    name: &str,
    email: &str,
    message: &str,
) {
    controller.on_field_change(Field::Name, name);
    controller.on_field_change(Field::Email, email);
    controller.on_field_change(Field::Message, message);
}
