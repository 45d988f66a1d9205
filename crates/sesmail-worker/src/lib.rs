/// sesmail worker - Lambda function sending transactional email
///
/// This module contains the event handler for the sesmail Lambda.
pub mod handler;

// Re-export commonly used items
pub use handler::handler;
pub use sesmail_core::*;
