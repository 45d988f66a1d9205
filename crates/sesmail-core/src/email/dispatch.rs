/// Dispatch of composed envelopes through SES
use crate::constants::LOG_TARGET_DISPATCH;
use crate::error::MailerError;
use crate::models::{Envelope, SendSuccess};
use crate::services::ClientProvider;
use crate::services::ses::SimpleEmail;
use crate::services::transport::MailOptions;
use aws_sdk_ses::config::Credentials;
use std::sync::Arc;
use tracing::info;

pub struct DispatchGateway {
    clients: Arc<dyn ClientProvider>,
}

impl DispatchGateway {
    pub fn new(clients: Arc<dyn ClientProvider>) -> Self {
        Self { clients }
    }

    /// Sends through the transport when attachments are present, otherwise
    /// through the direct email API. Both paths wait for the provider's answer.
    pub async fn send(
        &self,
        envelope: Envelope,
        has_attachments: bool,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> Result<SendSuccess, MailerError> {
        let message_id = if has_attachments {
            self.send_with_attachments(envelope, region, credentials)
                .await?
        } else {
            self.send_simple(&envelope, region, credentials).await?
        };

        Ok(SendSuccess::new(Some(message_id)))
    }

    async fn send_with_attachments(
        &self,
        envelope: Envelope,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> Result<String, MailerError> {
        let transport = self.clients.mail_transport(region, credentials).await?;
        let info = transport.send_mail(MailOptions::from(envelope)).await?;

        info!(
            target: LOG_TARGET_DISPATCH,
            path = "transport",
            region = %region,
            message_id = %info.message_id,
            recipients = info.envelope.len(),
            "Email with attachments accepted"
        );
        Ok(info.message_id)
    }

    async fn send_simple(
        &self,
        envelope: &Envelope,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> Result<String, MailerError> {
        let api = self.clients.email_api(region, credentials).await?;
        let message_id = api.send_email(&SimpleEmail::from(envelope)).await?;

        info!(
            target: LOG_TARGET_DISPATCH,
            path = "simple",
            region = %region,
            message_id = %message_id,
            "Email accepted"
        );
        Ok(message_id)
    }
}
