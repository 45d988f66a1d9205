/// S3 object store
use crate::error::StorageError;
use async_trait::async_trait;
use aws_smithy_types::byte_stream::ByteStream;
use aws_smithy_types::error::display::DisplayErrorContext;
use bytes::Bytes;

/// Read access to blobs addressed by bucket and key
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<ByteStream, StorageError>;
}

/// S3 implementation of [`ObjectStore`]
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<ByteStream, StorageError> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                StorageError::GetObject(format!(
                    "s3://{}/{}: {}",
                    bucket,
                    key,
                    DisplayErrorContext(&e)
                ))
            })?;

        tracing::debug!(
            bucket = %bucket,
            key = %crate::utils::logging::sanitize_s3_key_for_log(key),
            content_length = ?response.content_length(),
            "Opened S3 object"
        );
        Ok(response.body)
    }
}

/// Drains a byte stream completely into memory.
pub async fn read_to_bytes(stream: ByteStream) -> Result<Bytes, StorageError> {
    let data = stream
        .collect()
        .await
        .map_err(|e| StorageError::Body(e.to_string()))?;
    Ok(data.into_bytes())
}

/// Drains a byte stream completely and decodes it as UTF-8.
pub async fn read_to_string(stream: ByteStream) -> Result<String, StorageError> {
    let bytes = read_to_bytes(stream).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}
