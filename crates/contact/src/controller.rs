use crate::{
    ContactForm, ContactFormState, Error, EventSink, Field, FormEvent, Notification,
    SubmissionGateway, SubmissionPayload, SubmissionResult,
};

/// Owns the contact form state and drives one submission at a time.
///
/// `submit` borrows the controller mutably for its whole duration, so a
/// second submission cannot start until the first one has resolved.
pub struct FormController<G> {
    state: ContactFormState,
    gateway: G,
    events: EventSink,
}

impl<G: SubmissionGateway> FormController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            state: ContactFormState::default(),
            gateway,
            events: EventSink::default(),
        }
    }

    pub fn with_events(mut self, events: impl Into<EventSink>) -> Self {
        self.events = events.into();
        self
    }

    pub fn state(&self) -> &ContactFormState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting
    }

    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.state.form.set(field, value.into());
    }

    pub async fn submit(&mut self) -> Notification {
        let Self {
            state,
            gateway,
            events,
        } = self;

        let _submitting = Submitting::begin(&mut state.is_submitting, events);

        let result = deliver(&state.form, gateway).await;
        let notification = Notification::from_result(&result);
        events.emit(FormEvent::Notified(notification));

        if result.is_ok() {
            state.form = ContactForm::default();
            events.emit(FormEvent::Reset);
        }

        notification
    }
}

async fn deliver<G: SubmissionGateway>(form: &ContactForm, gateway: &G) -> Result<(), Error> {
    let payload = SubmissionPayload::try_from(form)?;

    tracing::info!(
        name = payload.name(),
        email = payload.email(),
        "Submitting contact form"
    );

    match gateway.send(payload).await {
        Ok(SubmissionResult::Success) => Ok(()),
        Ok(SubmissionResult::Failure(reason)) => {
            tracing::warn!(reason = %reason, "Contact message rejected by gateway");

            Err(Error::Gateway(reason))
        }
        Err(err) => {
            tracing::error!(err = %err, "Contact gateway failed");

            Err(Error::Gateway(err.to_string()))
        }
    }
}

impl Notification {
    fn from_result(result: &Result<(), Error>) -> Self {
        match result {
            Ok(_) => Self::Sent,
            Err(err) => Self::from(err),
        }
    }
}

/// Holds `is_submitting` up until dropped, including when the submit future
/// itself is dropped mid-flight.
struct Submitting<'a> {
    flag: &'a mut bool,
    events: &'a EventSink,
}

impl<'a> Submitting<'a> {
    fn begin(flag: &'a mut bool, events: &'a EventSink) -> Self {
        *flag = true;
        events.emit(FormEvent::Submitting(true));

        Self { flag, events }
    }
}

impl Drop for Submitting<'_> {
    fn drop(&mut self) {
        *self.flag = false;
        self.events.emit(FormEvent::Submitting(false));
    }
}
