/// Mail transport for messages that carry attachments
use crate::email::mime::build_mime_message;
use crate::error::MailerError;
use crate::models::{AttachmentDescriptor, Envelope};
use async_trait::async_trait;
use aws_sdk_ses::primitives::Blob;
use aws_sdk_ses::types::RawMessage;
use aws_smithy_types::error::display::DisplayErrorContext;

/// Options handed to a [`MailTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailOptions {
    pub from: String,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub subject: String,
    pub html: String,
    pub attachments: Vec<AttachmentDescriptor>,
}

impl From<Envelope> for MailOptions {
    fn from(envelope: Envelope) -> Self {
        Self {
            from: envelope.from,
            to: envelope.to,
            cc: envelope.cc,
            subject: envelope.subject,
            html: envelope.html_body,
            attachments: envelope.attachments,
        }
    }
}

impl MailOptions {
    pub fn destinations(&self) -> Vec<String> {
        self.to.iter().chain(self.cc.iter()).cloned().collect()
    }
}

/// Delivery report of a completed transport send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportInfo {
    pub message_id: String,
    /// Addresses the message was submitted for
    pub envelope: Vec<String>,
}

/// Sends a fully composed message. Resolves only once the provider has
/// accepted or rejected it.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send_mail(&self, options: MailOptions) -> Result<TransportInfo, MailerError>;
}

/// Transport that renders MIME locally and submits it with SES `SendRawEmail`
pub struct SesTransport {
    client: aws_sdk_ses::Client,
}

impl SesTransport {
    pub fn new(client: aws_sdk_ses::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MailTransport for SesTransport {
    async fn send_mail(&self, options: MailOptions) -> Result<TransportInfo, MailerError> {
        let raw_email = build_mime_message(&options)?;
        let destinations = options.destinations();

        let raw_message = RawMessage::builder()
            .data(Blob::new(raw_email))
            .build()
            .map_err(|e| MailerError::Dispatch(format!("Failed to build raw message: {}", e)))?;

        let response = self
            .client
            .send_raw_email()
            .raw_message(raw_message)
            .source(&options.from)
            .set_destinations(Some(destinations.clone()))
            .send()
            .await
            .map_err(|e| {
                MailerError::Dispatch(format!(
                    "SES send_raw_email failed: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        let message_id = response.message_id;
        tracing::info!(
            message_id = %message_id,
            recipients = destinations.len(),
            attachment_count = options.attachments.len(),
            "Sent raw email via SES"
        );

        Ok(TransportInfo {
            message_id,
            envelope: destinations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_mail_options_from_envelope() {
        let envelope = Envelope {
            from: "sender@example.com".to_string(),
            to: vec!["to@example.com".to_string()],
            cc: vec!["cc@example.com".to_string()],
            subject: "Report".to_string(),
            html_body: "<p>See attached</p>".to_string(),
            attachments: vec![AttachmentDescriptor {
                filename: "report.pdf".to_string(),
                content: Bytes::from_static(b"%PDF-1.4"),
            }],
        };

        let options = MailOptions::from(envelope);
        assert_eq!(options.html, "<p>See attached</p>");
        assert_eq!(options.attachments.len(), 1);
        assert_eq!(options.destinations(), vec!["to@example.com", "cc@example.com"]);
    }
}
