/// sesmail core - transactional email composition and dispatch
///
/// Fetches an optional HTML template and optional attachments from S3,
/// substitutes `{{placeholders}}`, and sends the result through SES either
/// as a simple message or as a raw MIME message carrying attachments.
pub mod constants;
pub mod email;
pub mod error;
pub mod models;
pub mod sender;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::{MailerError, StorageError, ValidationError};
pub use models::{RegionConfig, SendFailure, SendRequest, SendSuccess};
pub use sender::{EmailService, send_email};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
