use anyhow::Context;
use askama::Template;
use fox2it_contact::SubmissionPayload;
use lettre::{
    Address, Message,
    message::{Mailbox, MultiPart},
};
use time::OffsetDateTime;

pub const SUBJECT: &str = "New message from contact page";

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactHtmlTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub site_name: &'a str,
    pub year: i32,
}

#[derive(askama::Template)]
#[template(path = "contact.txt")]
pub struct ContactPlainTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub site_name: &'a str,
    pub year: i32,
}

/// Addresses a contact message is routed through.
#[derive(Clone, Debug)]
pub struct Route {
    pub from: Mailbox,
    pub to: Mailbox,
    pub site_name: String,
}

impl Route {
    pub fn build_message(&self, payload: &SubmissionPayload) -> anyhow::Result<Message> {
        let year = OffsetDateTime::now_utc().year();

        let html = ContactHtmlTemplate {
            name: payload.name(),
            email: payload.email(),
            message: payload.message(),
            site_name: &self.site_name,
            year,
        }
        .render()
        .context("Failed to render HTML contact template")?;

        let plain = ContactPlainTemplate {
            name: payload.name(),
            email: payload.email(),
            message: payload.message(),
            site_name: &self.site_name,
            year,
        }
        .render()
        .context("Failed to render plain text contact template")?;

        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(SUBJECT);

        match payload.email().parse::<Address>() {
            Ok(address) => {
                builder = builder.reply_to(Mailbox::new(Some(payload.name().to_owned()), address));
            }
            Err(err) => {
                tracing::warn!(err = %err, "Submitter address not usable as Reply-To");
            }
        }

        builder
            .multipart(MultiPart::alternative_plain_html(plain, html))
            .context("Failed to build contact message")
    }
}
