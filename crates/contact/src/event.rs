use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::Notification;

/// Everything a presentation layer needs to mirror the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    Submitting(bool),
    Notified(Notification),
    Reset,
}

#[derive(Clone, Default)]
pub struct EventSink(Option<UnboundedSender<FormEvent>>);

impl EventSink {
    pub fn channel() -> (Self, UnboundedReceiver<FormEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (Self(Some(tx)), rx)
    }

    pub fn emit(&self, event: FormEvent) {
        let Some(tx) = &self.0 else {
            return;
        };

        if tx.send(event).is_err() {
            tracing::debug!("form event receiver dropped");
        }
    }
}

impl From<UnboundedSender<FormEvent>> for EventSink {
    fn from(value: UnboundedSender<FormEvent>) -> Self {
        Self(Some(value))
    }
}
