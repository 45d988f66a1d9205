/// Data models for sesmail
pub mod config;
pub mod email;
pub mod request;
pub mod result;

// Re-export commonly used types
pub use config::*;
pub use email::*;
pub use request::*;
pub use result::*;
