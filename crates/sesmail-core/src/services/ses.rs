/// SES simple email sending
use crate::constants::SES_CONTENT_CHARSET;
use crate::error::MailerError;
use crate::models::Envelope;
use async_trait::async_trait;
use aws_sdk_ses::types::{Body, Content, Destination, Message};
use aws_smithy_types::error::display::DisplayErrorContext;

/// Minimal request for the direct email API: no attachments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleEmail {
    pub source: String,
    pub to_addresses: Vec<String>,
    pub cc_addresses: Vec<String>,
    pub subject: String,
    pub html_body: String,
}

impl From<&Envelope> for SimpleEmail {
    fn from(envelope: &Envelope) -> Self {
        Self {
            source: envelope.from.clone(),
            to_addresses: envelope.to.clone(),
            cc_addresses: envelope.cc.clone(),
            subject: envelope.subject.clone(),
            html_body: envelope.html_body.clone(),
        }
    }
}

/// Direct email API; returns the provider message id
#[async_trait]
pub trait EmailApi: Send + Sync {
    async fn send_email(&self, email: &SimpleEmail) -> Result<String, MailerError>;
}

pub struct SesEmailApi {
    client: aws_sdk_ses::Client,
}

impl SesEmailApi {
    pub fn new(client: aws_sdk_ses::Client) -> Self {
        Self { client }
    }
}

fn utf8_content(data: &str) -> Result<Content, MailerError> {
    Content::builder()
        .data(data)
        .charset(SES_CONTENT_CHARSET)
        .build()
        .map_err(|e| MailerError::Dispatch(format!("Failed to build SES content: {}", e)))
}

#[async_trait]
impl EmailApi for SesEmailApi {
    async fn send_email(&self, email: &SimpleEmail) -> Result<String, MailerError> {
        let destination = Destination::builder()
            .set_to_addresses(Some(email.to_addresses.clone()))
            .set_cc_addresses(Some(email.cc_addresses.clone()))
            .build();

        let message = Message::builder()
            .subject(utf8_content(&email.subject)?)
            .body(Body::builder().html(utf8_content(&email.html_body)?).build())
            .build();

        let response = self
            .client
            .send_email()
            .source(&email.source)
            .destination(destination)
            .message(message)
            .send()
            .await
            .map_err(|e| {
                MailerError::Dispatch(format!("SES send_email failed: {}", DisplayErrorContext(&e)))
            })?;

        let message_id = response.message_id;
        tracing::info!(
            message_id = %message_id,
            recipients = email.to_addresses.len() + email.cc_addresses.len(),
            "Sent email via SES"
        );
        Ok(message_id)
    }
}
