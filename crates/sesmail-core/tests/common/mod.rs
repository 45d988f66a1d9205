//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

pub mod mock_aws;
pub mod test_data;

/// Generate a unique bucket name so parallel tests never share objects
pub fn unique_bucket(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}
