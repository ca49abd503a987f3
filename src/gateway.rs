use std::{sync::Arc, time::Duration};

use fox2it_contact::{DelayedGateway, SubmissionGateway};
use fox2it_notification::SmtpGateway;

use crate::config::{Config, GatewayKind};

/// Build the gateway selected by `contact.gateway`
pub fn build_gateway(config: &Config) -> anyhow::Result<Arc<dyn SubmissionGateway>> {
    let gateway: Arc<dyn SubmissionGateway> = match config.contact.gateway {
        GatewayKind::Stub => {
            tracing::warn!(
                delay_ms = config.contact.stub_delay_ms,
                "Using stub contact gateway, messages are not delivered"
            );

            Arc::new(DelayedGateway::new(Duration::from_millis(
                config.contact.stub_delay_ms,
            )))
        }
        GatewayKind::Smtp => Arc::new(SmtpGateway::new(&config.email)?),
    };

    Ok(gateway)
}
