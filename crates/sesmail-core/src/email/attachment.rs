/// Attachment retrieval from the object store
use crate::constants::MAX_PARALLEL_ATTACHMENT_FETCHES;
use crate::error::{MailerError, StorageError};
use crate::models::AttachmentDescriptor;
use crate::services::s3::{ObjectStore, read_to_bytes};
use crate::utils::logging::sanitize_s3_key_for_log;
use futures::{StreamExt, TryStreamExt, stream};
use std::sync::Arc;

pub struct AttachmentFetcher {
    store: Arc<dyn ObjectStore>,
}

impl AttachmentFetcher {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Fetches every key from `bucket`.
    ///
    /// Downloads overlap (bounded by `MAX_PARALLEL_ATTACHMENT_FETCHES`) but the
    /// result keeps the order of `keys`. The first failing key fails the
    /// whole call; no partial list is ever returned.
    pub async fn fetch_all(
        &self,
        bucket: &str,
        keys: &[String],
    ) -> Result<Vec<AttachmentDescriptor>, MailerError> {
        tracing::info!(
            bucket = %bucket,
            attachment_count = keys.len(),
            "Fetching attachments"
        );

        let attachments: Vec<AttachmentDescriptor> = stream::iter(keys)
            .map(|key| self.fetch_one(bucket, key))
            .buffered(MAX_PARALLEL_ATTACHMENT_FETCHES)
            .try_collect()
            .await?;

        let total_size: usize = attachments.iter().map(|a| a.content.len()).sum();
        tracing::info!(
            attachment_count = attachments.len(),
            total_size = total_size,
            "All attachments fetched successfully"
        );

        Ok(attachments)
    }

    async fn fetch_one(&self, bucket: &str, key: &str) -> Result<AttachmentDescriptor, MailerError> {
        let to_error = |source: StorageError| {
            tracing::error!(
                bucket = %bucket,
                key = %sanitize_s3_key_for_log(key),
                error = %source,
                "Attachment fetch failed"
            );
            MailerError::AttachmentFetch {
                bucket: bucket.to_string(),
                key: key.to_string(),
                source,
            }
        };

        let stream = self.store.get_object(bucket, key).await.map_err(to_error)?;
        let content = read_to_bytes(stream).await.map_err(to_error)?;

        tracing::debug!(
            key = %sanitize_s3_key_for_log(key),
            size = content.len(),
            "Fetched attachment"
        );

        Ok(AttachmentDescriptor {
            filename: key.to_string(),
            content,
        })
    }
}
