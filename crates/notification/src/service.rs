//! Contact message delivery over SMTP using lettre

use std::fmt;

use anyhow::Context;
use async_trait::async_trait;
use fox2it_contact::{SubmissionGateway, SubmissionPayload, SubmissionResult};
use lettre::{SmtpTransport, Transport, transport::smtp::authentication::Credentials};
use serde::Deserialize;

use crate::contact::Route;

#[derive(Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
    #[serde(default = "default_site_name")]
    pub site_name: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
            site_name: default_site_name(),
        }
    }
}

impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field(
                "smtp_password",
                &if self.smtp_password.is_empty() {
                    ""
                } else {
                    "<redacted>"
                },
            )
            .field("from_address", &self.from_address)
            .field("contact_address", &self.contact_address)
            .field("site_name", &self.site_name)
            .finish()
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "Fox 2 IT Solutions <noreply@fox2it.localhost>".to_string()
}

fn default_contact_address() -> String {
    "contact@fox2it.localhost".to_string()
}

fn default_site_name() -> String {
    "Fox 2 IT Solutions".to_string()
}

/// Gateway that mails every contact message to the configured inbox
#[derive(Clone)]
pub struct SmtpGateway {
    mailer: SmtpTransport,
    route: Route,
}

impl SmtpGateway {
    /// Create a new SMTP gateway from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "SMTP gateway initialized with authentication and TLS"
            );

            // relay() negotiates STARTTLS, which suits submission on port 587
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        let route = Route {
            from: config
                .from_address
                .parse()
                .context("Failed to parse from address")?,
            to: config
                .contact_address
                .parse()
                .context("Failed to parse contact address")?,
            site_name: config.site_name.to_owned(),
        };

        Ok(Self { mailer, route })
    }

    pub fn route(&self) -> &Route {
        &self.route
    }
}

#[async_trait]
impl SubmissionGateway for SmtpGateway {
    #[tracing::instrument(skip_all, fields(to = %self.route.to))]
    async fn send(&self, payload: SubmissionPayload) -> anyhow::Result<SubmissionResult> {
        let message = match self.route.build_message(&payload) {
            Ok(message) => message,
            Err(err) => {
                tracing::warn!(err = %err, "Contact message could not be built");

                return Ok(SubmissionResult::Failure(err.to_string()));
            }
        };

        tracing::info!("Sending contact email");

        // SmtpTransport blocks on the socket
        let mailer = self.mailer.clone();
        let sent = tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .context("SMTP delivery task failed")?;

        match sent {
            Ok(response) => {
                tracing::info!(code = %response.code(), "Contact email accepted");

                Ok(SubmissionResult::Success)
            }
            Err(err) => {
                tracing::error!(err = %err, "Failed to send contact email via SMTP");

                Ok(SubmissionResult::Failure(err.to_string()))
            }
        }
    }
}
