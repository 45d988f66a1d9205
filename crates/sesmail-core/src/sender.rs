/// Send entry point: compose, dispatch, normalize
use crate::email::{DispatchGateway, EmailComposer};
use crate::error::MailerError;
use crate::models::{RegionConfig, SendFailure, SendRequest, SendSuccess};
use crate::services::{AwsClientFactory, ClientProvider};
use crate::utils::logging::{redact_email, redact_subject};
use std::sync::Arc;
use tracing::{error, info};

/// Composes and dispatches emails with the collaborators of a [`ClientProvider`].
pub struct EmailService {
    composer: EmailComposer,
    gateway: DispatchGateway,
}

impl EmailService {
    pub fn new(clients: Arc<dyn ClientProvider>) -> Self {
        Self {
            composer: EmailComposer::new(clients.clone()),
            gateway: DispatchGateway::new(clients),
        }
    }

    /// Sends one email. Every error, whatever its stage, is turned into a
    /// [`SendFailure`] here and nowhere else.
    #[tracing::instrument(
        name = "sesmail.send",
        skip(self, request, config),
        fields(
            from = %redact_email(&request.from_address),
            subject = %redact_subject(&request.subject),
            recipients = request.to_addresses.len() + request.cc_addresses.len(),
        )
    )]
    pub async fn send(
        &self,
        request: &SendRequest,
        config: &RegionConfig,
    ) -> Result<SendSuccess, SendFailure> {
        match self.try_send(request, config).await {
            Ok(success) => {
                info!(
                    message_id = success.provider_response.as_deref().unwrap_or("unknown"),
                    "Email sent"
                );
                Ok(success)
            }
            Err(e) => {
                error!(
                    kind = e.kind(),
                    error = %redact_email(&e.to_string()),
                    "Error while sending email"
                );
                Err(SendFailure::from(e))
            }
        }
    }

    async fn try_send(
        &self,
        request: &SendRequest,
        config: &RegionConfig,
    ) -> Result<SendSuccess, MailerError> {
        let composition = self.composer.compose(request, config).await?;

        info!(
            has_attachments = composition.has_attachments,
            dispatch_region = %composition.regions.dispatch,
            "Email composed"
        );

        self.gateway
            .send(
                composition.envelope,
                composition.has_attachments,
                &composition.regions.dispatch,
                config.credentials.as_ref(),
            )
            .await
    }
}

/// Sends one email with real AWS clients built for the configured regions.
///
/// # Examples
/// ```no_run
/// use sesmail_core::{RegionConfig, SendRequest, send_email};
///
/// # async fn example() {
/// let request = SendRequest::new(
///     "sender@example.com",
///     vec!["recipient@example.com".to_string()],
///     "Hello from sesmail",
/// );
/// let result = send_email(request, RegionConfig::new("us-east-1")).await;
/// # }
/// ```
pub async fn send_email(
    request: SendRequest,
    config: RegionConfig,
) -> Result<SendSuccess, SendFailure> {
    let factory = AwsClientFactory::from_config(&config);
    EmailService::new(Arc::new(factory))
        .send(&request, &config)
        .await
}
