/// AWS client construction
use crate::error::MailerError;
use crate::models::RegionConfig;
use crate::services::s3::{ObjectStore, S3ObjectStore};
use crate::services::ses::{EmailApi, SesEmailApi};
use crate::services::transport::{MailTransport, SesTransport};
use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_ses::config::Credentials;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Services a client can be built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AwsService {
    S3,
    Ses,
}

impl AwsService {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S3 => "s3",
            Self::Ses => "ses",
        }
    }
}

impl fmt::Display for AwsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AwsService {
    type Err = MailerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "s3" => Ok(Self::S3),
            "ses" => Ok(Self::Ses),
            _ => Err(MailerError::UnsupportedService(s.to_string())),
        }
    }
}

/// A ready-to-use SDK client
#[derive(Debug, Clone)]
pub enum ClientHandle {
    S3(aws_sdk_s3::Client),
    Ses(aws_sdk_ses::Client),
}

impl ClientHandle {
    pub fn service(&self) -> AwsService {
        match self {
            Self::S3(_) => AwsService::S3,
            Self::Ses(_) => AwsService::Ses,
        }
    }

    pub fn into_s3(self) -> Result<aws_sdk_s3::Client, MailerError> {
        match self {
            Self::S3(client) => Ok(client),
            other => Err(MailerError::UnsupportedService(format!(
                "expected s3 client, got {}",
                other.service()
            ))),
        }
    }

    pub fn into_ses(self) -> Result<aws_sdk_ses::Client, MailerError> {
        match self {
            Self::Ses(client) => Ok(client),
            other => Err(MailerError::UnsupportedService(format!(
                "expected ses client, got {}",
                other.service()
            ))),
        }
    }
}

/// Source of collaborators for one send, bound to a region and credentials
#[async_trait]
pub trait ClientProvider: Send + Sync {
    async fn object_store(
        &self,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> Result<Arc<dyn ObjectStore>, MailerError>;

    async fn email_api(
        &self,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> Result<Arc<dyn EmailApi>, MailerError>;

    async fn mail_transport(
        &self,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> Result<Arc<dyn MailTransport>, MailerError>;
}

/// Builds a fresh SDK client on every call; nothing is cached.
#[derive(Debug, Clone, Default)]
pub struct AwsClientFactory {
    endpoint_url: Option<String>,
}

impl AwsClientFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &RegionConfig) -> Self {
        Self {
            endpoint_url: config.endpoint_url.clone().filter(|url| !url.is_empty()),
        }
    }

    /// Send every request to `endpoint_url`; S3 switches to path-style addressing.
    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Client for a service named by string (`"s3"` or `"ses"`, any case).
    pub async fn get_client(
        &self,
        service_name: &str,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> Result<ClientHandle, MailerError> {
        let service = AwsService::from_str(service_name)?;
        Ok(self.client(service, region, credentials).await)
    }

    pub async fn client(
        &self,
        service: AwsService,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> ClientHandle {
        match service {
            AwsService::S3 => ClientHandle::S3(self.s3_client(region, credentials).await),
            AwsService::Ses => ClientHandle::Ses(self.ses_client(region, credentials).await),
        }
    }

    pub async fn s3_client(
        &self,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> aws_sdk_s3::Client {
        let sdk_config = self.sdk_config(region, credentials).await;
        let config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(self.endpoint_url.is_some())
            .build();
        aws_sdk_s3::Client::from_conf(config)
    }

    pub async fn ses_client(
        &self,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> aws_sdk_ses::Client {
        let sdk_config = self.sdk_config(region, credentials).await;
        aws_sdk_ses::Client::new(&sdk_config)
    }

    async fn sdk_config(
        &self,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> aws_config::SdkConfig {
        let mut loader = aws_config::from_env().region(Region::new(region.to_string()));

        if let Some(credentials) = credentials {
            loader = loader.credentials_provider(credentials.clone());
        }

        if let Some(endpoint) = &self.endpoint_url {
            tracing::debug!(endpoint = %endpoint, "Using custom AWS endpoint");
            loader = loader.endpoint_url(endpoint);
        }

        loader.load().await
    }
}

#[async_trait]
impl ClientProvider for AwsClientFactory {
    async fn object_store(
        &self,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> Result<Arc<dyn ObjectStore>, MailerError> {
        tracing::debug!(region = %region, "Building S3 client");
        let client = self
            .client(AwsService::S3, region, credentials)
            .await
            .into_s3()?;
        Ok(Arc::new(S3ObjectStore::new(client)))
    }

    async fn email_api(
        &self,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> Result<Arc<dyn EmailApi>, MailerError> {
        tracing::debug!(region = %region, "Building SES client");
        let client = self
            .client(AwsService::Ses, region, credentials)
            .await
            .into_ses()?;
        Ok(Arc::new(SesEmailApi::new(client)))
    }

    async fn mail_transport(
        &self,
        region: &str,
        credentials: Option<&Credentials>,
    ) -> Result<Arc<dyn MailTransport>, MailerError> {
        tracing::debug!(region = %region, "Building SES transport");
        let client = self
            .client(AwsService::Ses, region, credentials)
            .await
            .into_ses()?;
        Ok(Arc::new(SesTransport::new(client)))
    }
}
