/// Application constants
///
/// Fixed strings of the public result envelope plus tuning values.
// ============================================================================
// Result Envelope
// ============================================================================
/// Status code reported on a successful send
pub const STATUS_SUCCESS: u16 = 200;

/// Status code reported on any failed send
pub const STATUS_FAILURE: u16 = 400;

/// Message reported on a successful send
pub const SUCCESS_MESSAGE: &str = "Success";

/// Message reported on any failed send
pub const FAILURE_MESSAGE: &str = "Error occurred while sending email";

// ============================================================================
// Composition
// ============================================================================

/// Body used when no template is requested
pub const DEFAULT_EMAIL_BODY: &str = "No email body template provided.";

/// Charset declared on SES simple message content
pub const SES_CONTENT_CHARSET: &str = "UTF-8";

/// Maximum number of attachment downloads in flight at once
pub const MAX_PARALLEL_ATTACHMENT_FETCHES: usize = 4;

// ============================================================================
// Environment
// ============================================================================

/// Default region for every stage
pub const ENV_REGION: &str = "SESMAIL_REGION";

/// Standard AWS region variable, used when `SESMAIL_REGION` is unset
pub const ENV_AWS_REGION: &str = "AWS_REGION";

pub const ENV_TEMPLATE_REGION: &str = "SESMAIL_S3_TEMPLATE_REGION";
pub const ENV_DISPATCH_REGION: &str = "SESMAIL_SES_REGION";
pub const ENV_ATTACHMENT_REGION: &str = "SESMAIL_S3_ATTACHMENTS_REGION";

/// Endpoint override for LocalStack and test servers
pub const ENV_ENDPOINT_URL: &str = "SESMAIL_ENDPOINT_URL";

// ============================================================================
// Logging
// ============================================================================

/// Log target for dispatch outcomes
pub const LOG_TARGET_DISPATCH: &str = "dispatch";
