/// MIME rendering for messages with attachments
use crate::error::MailerError;
use crate::services::transport::MailOptions;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, Message, MultiPart, SinglePart};
use std::str::FromStr;

/// MIME type of an attachment, from the extension of its object key.
/// Unknown or missing extensions are `application/octet-stream`.
pub fn detect_content_type(filename: &str) -> &'static str {
    let Some((_, extension)) = filename.rsplit_once('.') else {
        return "application/octet-stream";
    };

    match extension.to_ascii_lowercase().as_str() {
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "xml" => "application/xml",
        "zip" => "application/zip",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        _ => "application/octet-stream",
    }
}

fn to_mailbox(address: &str) -> Result<Mailbox, MailerError> {
    Mailbox::from_str(address).map_err(|e| {
        MailerError::Dispatch(format!("Invalid email address '{}': {}", address, e))
    })
}

/// Renders `multipart/mixed`: the HTML body followed by every attachment, in order.
pub fn build_mime_message(options: &MailOptions) -> Result<Vec<u8>, MailerError> {
    let mut message_builder = Message::builder()
        .from(to_mailbox(&options.from)?)
        .subject(&options.subject);

    for to in &options.to {
        message_builder = message_builder.to(to_mailbox(to)?);
    }

    for cc in &options.cc {
        message_builder = message_builder.cc(to_mailbox(cc)?);
    }

    let mut multipart = MultiPart::mixed().singlepart(SinglePart::html(options.html.clone()));

    for attachment in &options.attachments {
        let content_type = detect_content_type(&attachment.filename);
        tracing::debug!(
            filename = %attachment.filename,
            size = attachment.content.len(),
            content_type = %content_type,
            "Adding attachment to email"
        );

        let content_type = ContentType::parse(content_type).map_err(|e| {
            MailerError::Dispatch(format!("Invalid content type '{}': {}", content_type, e))
        })?;

        multipart = multipart.singlepart(
            Attachment::new(attachment.filename.clone())
                .body(attachment.content.to_vec(), content_type),
        );
    }

    let message = message_builder.multipart(multipart).map_err(|e| {
        MailerError::Dispatch(format!(
            "Failed to build multipart message with attachments: {}",
            e
        ))
    })?;

    Ok(message.formatted())
}
