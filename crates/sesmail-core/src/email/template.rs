/// Template fetch and `{{placeholder}}` substitution
use crate::error::{MailerError, StorageError};
use crate::services::s3::{ObjectStore, read_to_string};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

// Key is everything up to the first closing `}}`
static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{\{(.*?)\}\}").unwrap());

/// Replaces every `{{key}}` with `data[key]`, or the empty string when the
/// key is unknown. Single pass: substituted values are never re-scanned.
pub fn substitute(template: &str, data: &HashMap<String, String>) -> String {
    PLACEHOLDER_PATTERN
        .replace_all(template, |caps: &Captures| {
            data.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}

pub struct TemplateRenderer {
    store: Arc<dyn ObjectStore>,
}

impl TemplateRenderer {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Fetches `s3://bucket/key`, decodes the whole object as UTF-8 and
    /// substitutes placeholders.
    pub async fn render(
        &self,
        bucket: &str,
        key: &str,
        data: &HashMap<String, String>,
    ) -> Result<String, MailerError> {
        let to_error = |source: StorageError| MailerError::TemplateFetch {
            bucket: bucket.to_string(),
            key: key.to_string(),
            source,
        };

        let stream = self.store.get_object(bucket, key).await.map_err(to_error)?;
        let template = read_to_string(stream).await.map_err(to_error)?;

        let body = substitute(&template, data);
        tracing::debug!(
            bucket = %bucket,
            key = %crate::utils::logging::sanitize_s3_key_for_log(key),
            body = %crate::utils::logging::redact_body(&body),
            "Rendered email template"
        );
        Ok(body)
    }
}
