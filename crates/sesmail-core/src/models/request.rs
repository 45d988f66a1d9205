/// Send request as accepted from callers
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Parameters of a single send.
///
/// Field names on the wire follow the public JSON contract
/// (`FromEmailAddress`, `ToAddresses`, ...). Empty strings in optional
/// fields mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRequest {
    #[serde(rename = "FromEmailAddress", default, deserialize_with = "null_as_default")]
    pub from_address: String,

    #[serde(rename = "ToAddresses", default, deserialize_with = "null_as_default")]
    pub to_addresses: Vec<String>,

    #[serde(rename = "Subject", default, deserialize_with = "null_as_default")]
    pub subject: String,

    #[serde(rename = "CcAddresses", default, deserialize_with = "null_as_default")]
    pub cc_addresses: Vec<String>,

    #[serde(rename = "BucketName", default, skip_serializing_if = "Option::is_none")]
    pub template_bucket: Option<String>,

    #[serde(rename = "BodyTemplate", default, skip_serializing_if = "Option::is_none")]
    pub template_key: Option<String>,

    #[serde(rename = "BodyData", default, deserialize_with = "null_as_default")]
    pub template_data: HashMap<String, String>,

    #[serde(
        rename = "AttachmentBucketName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub attachment_bucket: Option<String>,

    #[serde(rename = "attachmentKeys", default, deserialize_with = "null_as_default")]
    pub attachment_keys: Vec<String>,
}

impl SendRequest {
    pub fn new(
        from_address: impl Into<String>,
        to_addresses: Vec<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            from_address: from_address.into(),
            to_addresses,
            subject: subject.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_cc(mut self, cc_addresses: Vec<String>) -> Self {
        self.cc_addresses = cc_addresses;
        self
    }

    /// Render the body from `s3://bucket/key` with the given placeholder data.
    #[must_use]
    pub fn with_template(
        mut self,
        bucket: impl Into<String>,
        key: impl Into<String>,
        data: HashMap<String, String>,
    ) -> Self {
        self.template_bucket = Some(bucket.into());
        self.template_key = Some(key.into());
        self.template_data = data;
        self
    }

    /// Attach `s3://bucket/<key>` for every key, in order.
    #[must_use]
    pub fn with_attachments(mut self, bucket: impl Into<String>, keys: Vec<String>) -> Self {
        self.attachment_bucket = Some(bucket.into());
        self.attachment_keys = keys;
        self
    }

    /// Template location, present only when both bucket and key are set
    pub fn template_source(&self) -> Option<(&str, &str)> {
        match (
            non_empty(&self.template_bucket),
            non_empty(&self.template_key),
        ) {
            (Some(bucket), Some(key)) => Some((bucket, key)),
            _ => None,
        }
    }

    /// Attachment location, present only when a bucket and at least one key are set
    pub fn attachment_source(&self) -> Option<(&str, &[String])> {
        match non_empty(&self.attachment_bucket) {
            Some(bucket) if !self.attachment_keys.is_empty() => {
                Some((bucket, self.attachment_keys.as_slice()))
            }
            _ => None,
        }
    }
}

/// Treats `Some("")` the same as `None`.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
