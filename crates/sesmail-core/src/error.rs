/// Error types for sesmail
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported AWS service: {0}")]
    UnsupportedService(String),

    #[error("Failed to render template s3://{bucket}/{key}: {source}")]
    TemplateFetch {
        bucket: String,
        key: String,
        #[source]
        source: StorageError,
    },

    #[error("Failed to fetch attachment s3://{bucket}/{key}: {source}")]
    AttachmentFetch {
        bucket: String,
        key: String,
        #[source]
        source: StorageError,
    },

    #[error("Dispatch error: {0}")]
    Dispatch(String),
}

/// A mandatory request field is missing or inconsistent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("sender mandatory")]
    MissingSender,

    #[error("recipient mandatory")]
    MissingRecipients,

    #[error("subject mandatory")]
    MissingSubject,

    #[error("template key required")]
    TemplateKeyRequired,

    #[error("attachment keys required")]
    AttachmentKeysRequired,
}

/// Object store failures, wrapped by the template and attachment errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("S3 get_object failed: {0}")]
    GetObject(String),

    #[error("Failed to read S3 object body: {0}")]
    Body(String),

    #[error("S3 object body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

impl MailerError {
    /// The attachment key that failed, if this is an attachment error
    pub fn failed_attachment_key(&self) -> Option<&str> {
        match self {
            Self::AttachmentFetch { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Short machine-readable kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "configuration",
            Self::Validation(_) => "validation",
            Self::UnsupportedService(_) => "unsupported_service",
            Self::TemplateFetch { .. } => "template_fetch",
            Self::AttachmentFetch { .. } => "attachment_fetch",
            Self::Dispatch(_) => "dispatch",
        }
    }
}
