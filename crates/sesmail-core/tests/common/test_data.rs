/// Request and configuration fixtures
use aws_sdk_ses::config::Credentials;
use sesmail_core::{RegionConfig, SendRequest};
use std::collections::HashMap;

pub const SENDER: &str = "sender@example.com";
pub const RECIPIENT: &str = "recipient@example.com";
pub const DEFAULT_REGION: &str = "us-east-1";

/// Minimal valid request: sender, one recipient, subject
pub fn minimal_request() -> SendRequest {
    SendRequest::new(SENDER, vec![RECIPIENT.to_string()], "Hello from sesmail")
}

pub fn template_data(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn default_config() -> RegionConfig {
    RegionConfig::new(DEFAULT_REGION)
}

pub fn test_credentials() -> Credentials {
    Credentials::new("AKIDTESTKEY", "test-secret-key", None, None, "test")
}
