/// Request validation and message composition
use crate::constants::DEFAULT_EMAIL_BODY;
use crate::email::attachment::AttachmentFetcher;
use crate::email::template::TemplateRenderer;
use crate::error::{MailerError, ValidationError};
use crate::models::request::non_empty;
use crate::models::{
    AttachmentDescriptor, Envelope, RegionConfig, ResolvedRegions, SendRequest,
};
use crate::services::ClientProvider;
use aws_sdk_ses::config::Credentials;
use std::sync::Arc;

/// Output of composition: what to send, how, and where
#[derive(Debug, Clone)]
pub struct Composition {
    pub envelope: Envelope,
    pub has_attachments: bool,
    pub regions: ResolvedRegions,
}

/// Checks a request without touching the network. The first violation wins.
pub fn validate(request: &SendRequest, config: &RegionConfig) -> Result<(), MailerError> {
    config.validate()?;

    if request.from_address.is_empty() {
        return Err(ValidationError::MissingSender.into());
    }

    if request.to_addresses.is_empty() {
        return Err(ValidationError::MissingRecipients.into());
    }

    if request.subject.is_empty() {
        return Err(ValidationError::MissingSubject.into());
    }

    if non_empty(&request.template_bucket).is_some() && non_empty(&request.template_key).is_none()
    {
        return Err(ValidationError::TemplateKeyRequired.into());
    }

    if non_empty(&request.attachment_bucket).is_some() && request.attachment_keys.is_empty() {
        return Err(ValidationError::AttachmentKeysRequired.into());
    }

    Ok(())
}

pub struct EmailComposer {
    clients: Arc<dyn ClientProvider>,
}

impl EmailComposer {
    pub fn new(clients: Arc<dyn ClientProvider>) -> Self {
        Self { clients }
    }

    /// Validates the request, then renders the body and fetches attachments
    /// concurrently. Any failure aborts composition.
    #[tracing::instrument(name = "sesmail.compose", skip_all)]
    pub async fn compose(
        &self,
        request: &SendRequest,
        config: &RegionConfig,
    ) -> Result<Composition, MailerError> {
        validate(request, config)?;

        let regions = config.resolve();
        let credentials = config.credentials.as_ref();

        let (html_body, attachments) = tokio::try_join!(
            self.render_body(request, &regions.template, credentials),
            self.fetch_attachments(request, &regions.attachment, credentials),
        )?;

        let envelope = Envelope {
            from: request.from_address.clone(),
            to: request.to_addresses.clone(),
            cc: request.cc_addresses.clone(),
            subject: request.subject.clone(),
            html_body,
            attachments,
        };
        let has_attachments = envelope.has_attachments();

        Ok(Composition {
            envelope,
            has_attachments,
            regions,
        })
    }

    async fn render_body(
        &self,
        request: &SendRequest,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> Result<String, MailerError> {
        let Some((bucket, key)) = request.template_source() else {
            return Ok(DEFAULT_EMAIL_BODY.to_string());
        };

        let store = self.clients.object_store(region, credentials).await?;
        TemplateRenderer::new(store)
            .render(bucket, key, &request.template_data)
            .await
    }

    async fn fetch_attachments(
        &self,
        request: &SendRequest,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> Result<Vec<AttachmentDescriptor>, MailerError> {
        let Some((bucket, keys)) = request.attachment_source() else {
            return Ok(Vec::new());
        };

        let store = self.clients.object_store(region, credentials).await?;
        AttachmentFetcher::new(store).fetch_all(bucket, keys).await
    }
}
