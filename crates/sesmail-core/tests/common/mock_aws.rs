/// In-memory AWS collaborators for integration testing
use async_trait::async_trait;
use aws_sdk_ses::config::Credentials;
use aws_smithy_types::byte_stream::ByteStream;
use sesmail_core::error::{MailerError, StorageError};
use sesmail_core::services::ses::SimpleEmail;
use sesmail_core::services::transport::{MailOptions, TransportInfo};
use sesmail_core::services::{ClientProvider, EmailApi, MailTransport, ObjectStore};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock S3 object store
#[derive(Clone, Default)]
pub struct MockS3 {
    pub objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    pub failing: Arc<Mutex<HashSet<String>>>,
    pub fetched: Arc<Mutex<Vec<String>>>,
    /// (client region, bucket/key) per fetch
    pub fetch_regions: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockS3 {
    fn path(bucket: &str, key: &str) -> String {
        format!("{}/{}", bucket, key)
    }

    pub fn put_object(&self, bucket: &str, key: &str, data: impl Into<Vec<u8>>) {
        self.objects
            .lock()
            .unwrap()
            .insert(Self::path(bucket, key), data.into());
    }

    /// Makes every fetch of this object fail
    pub fn fail_object(&self, bucket: &str, key: &str) {
        self.failing.lock().unwrap().insert(Self::path(bucket, key));
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    /// Object store view bound to the region its client was built for
    pub fn in_region(&self, region: &str) -> RegionalS3 {
        RegionalS3 {
            s3: self.clone(),
            region: region.to_string(),
        }
    }

    /// Region of the client that fetched `bucket/key`, if it was fetched
    pub fn fetch_region(&self, bucket: &str, key: &str) -> Option<String> {
        let path = Self::path(bucket, key);
        self.fetch_regions
            .lock()
            .unwrap()
            .iter()
            .find(|(_, fetched)| *fetched == path)
            .map(|(region, _)| region.clone())
    }
}

/// `MockS3` as seen through a client of one region
pub struct RegionalS3 {
    s3: MockS3,
    region: String,
}

#[async_trait]
impl ObjectStore for RegionalS3 {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<ByteStream, StorageError> {
        self.s3
            .fetch_regions
            .lock()
            .unwrap()
            .push((self.region.clone(), MockS3::path(bucket, key)));
        self.s3.get_object(bucket, key).await
    }
}

#[async_trait]
impl ObjectStore for MockS3 {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<ByteStream, StorageError> {
        let path = Self::path(bucket, key);
        self.fetched.lock().unwrap().push(path.clone());

        if self.failing.lock().unwrap().contains(&path) {
            return Err(StorageError::GetObject(format!("AccessDenied: {}", path)));
        }

        self.objects
            .lock()
            .unwrap()
            .get(&path)
            .cloned()
            .map(ByteStream::from)
            .ok_or_else(|| StorageError::GetObject(format!("NoSuchKey: {}", path)))
    }
}

/// Mock SES: records simple sends and raw (transport) sends
#[derive(Clone, Default)]
pub struct MockSES {
    pub simple_emails: Arc<Mutex<Vec<SimpleEmail>>>,
    pub raw_emails: Arc<Mutex<Vec<MailOptions>>>,
    pub failure: Arc<Mutex<Option<String>>>,
}

impl MockSES {
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn simple_emails(&self) -> Vec<SimpleEmail> {
        self.simple_emails.lock().unwrap().clone()
    }

    pub fn raw_emails(&self) -> Vec<MailOptions> {
        self.raw_emails.lock().unwrap().clone()
    }

    pub fn get_sent_count(&self) -> usize {
        self.simple_emails.lock().unwrap().len() + self.raw_emails.lock().unwrap().len()
    }

    fn check_failure(&self) -> Result<(), MailerError> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(MailerError::Dispatch(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EmailApi for MockSES {
    async fn send_email(&self, email: &SimpleEmail) -> Result<String, MailerError> {
        self.check_failure()?;
        let mut sent = self.simple_emails.lock().unwrap();
        sent.push(email.clone());
        Ok(format!("mock-simple-{}", sent.len()))
    }
}

#[async_trait]
impl MailTransport for MockSES {
    async fn send_mail(&self, options: MailOptions) -> Result<TransportInfo, MailerError> {
        self.check_failure()?;
        let envelope = options.destinations();
        let mut sent = self.raw_emails.lock().unwrap();
        sent.push(options);
        Ok(TransportInfo {
            message_id: format!("mock-raw-{}", sent.len()),
            envelope,
        })
    }
}

/// A client request made through the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRequest {
    pub service: &'static str,
    pub region: String,
    pub access_key_id: Option<String>,
}

/// Mock client provider handing out the shared mocks and recording regions
#[derive(Clone, Default)]
pub struct MockAws {
    pub s3: MockS3,
    pub ses: MockSES,
    pub requests: Arc<Mutex<Vec<ClientRequest>>>,
}

impl MockAws {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<ClientRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn regions_for(&self, service: &str) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|r| r.service == service)
            .map(|r| r.region)
            .collect()
    }

    fn record(&self, service: &'static str, region: &str, credentials: Option<&Credentials>) {
        self.requests.lock().unwrap().push(ClientRequest {
            service,
            region: region.to_string(),
            access_key_id: credentials.map(|c| c.access_key_id().to_string()),
        });
    }
}

#[async_trait]
impl ClientProvider for MockAws {
    async fn object_store(
        &self,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> Result<Arc<dyn ObjectStore>, MailerError> {
        self.record("s3", region, credentials);
        Ok(Arc::new(self.s3.in_region(region)))
    }

    async fn email_api(
        &self,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> Result<Arc<dyn EmailApi>, MailerError> {
        self.record("ses", region, credentials);
        Ok(Arc::new(self.ses.clone()))
    }

    async fn mail_transport(
        &self,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> Result<Arc<dyn MailTransport>, MailerError> {
        self.record("transport", region, credentials);
        Ok(Arc::new(self.ses.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_s3() {
        let s3 = MockS3::default();
        s3.put_object("bucket", "file.txt", b"content".to_vec());

        let body = s3.get_object("bucket", "file.txt").await.unwrap();
        let data = body.collect().await.unwrap().into_bytes();
        assert_eq!(data.as_ref(), b"content");
        assert!(s3.get_object("bucket", "missing.txt").await.is_err());
        assert_eq!(s3.fetched().len(), 2);
    }

    #[tokio::test]
    async fn test_regional_s3_records_region() {
        let s3 = MockS3::default();
        s3.put_object("bucket", "a.txt", b"a".to_vec());

        s3.in_region("eu-west-1")
            .get_object("bucket", "a.txt")
            .await
            .unwrap();

        assert_eq!(s3.fetch_region("bucket", "a.txt").as_deref(), Some("eu-west-1"));
        assert_eq!(s3.fetch_region("bucket", "b.txt"), None);
    }

    #[tokio::test]
    async fn test_mock_ses_failure() {
        let ses = MockSES::default();
        ses.fail_with("Throttling");

        let email = SimpleEmail {
            source: "a@example.com".to_string(),
            to_addresses: vec!["b@example.com".to_string()],
            cc_addresses: vec![],
            subject: "s".to_string(),
            html_body: "b".to_string(),
        };
        assert!(ses.send_email(&email).await.is_err());
        assert_eq!(ses.get_sent_count(), 0);
    }
}
