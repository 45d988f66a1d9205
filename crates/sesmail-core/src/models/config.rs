/// Region and credential configuration
use crate::constants::{
    ENV_ATTACHMENT_REGION, ENV_AWS_REGION, ENV_DISPATCH_REGION, ENV_ENDPOINT_URL, ENV_REGION,
    ENV_TEMPLATE_REGION,
};
use crate::error::MailerError;
use crate::models::request::non_empty;
use aws_sdk_ses::config::Credentials;
use serde::{Deserialize, Deserializer, Serialize};

/// Per-stage AWS configuration (`awsConfigParams` on the wire).
///
/// `region` is the mandatory default; each stage override falls back to it
/// when absent or empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionConfig {
    #[serde(rename = "region", default)]
    pub default_region: String,

    #[serde(rename = "s3TemplateRegion", default, skip_serializing_if = "Option::is_none")]
    pub template_region: Option<String>,

    #[serde(rename = "sesRegion", default, skip_serializing_if = "Option::is_none")]
    pub dispatch_region: Option<String>,

    #[serde(
        rename = "s3AttachementsRegion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub attachment_region: Option<String>,

    /// Passed unchanged to every client; `None` uses the SDK default chain
    #[serde(default, deserialize_with = "deserialize_credentials", skip_serializing)]
    pub credentials: Option<Credentials>,

    /// Endpoint override for LocalStack and test servers
    #[serde(rename = "endpointUrl", default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
}

/// Effective region of every stage after fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRegions {
    pub template: String,
    pub dispatch: String,
    pub attachment: String,
}

/// Returns the override when it is set and non-empty, otherwise the default.
pub fn resolve_region<'a>(override_region: Option<&'a str>, default_region: &'a str) -> &'a str {
    match override_region {
        Some(region) if !region.is_empty() => region,
        _ => default_region,
    }
}

impl RegionConfig {
    pub fn new(default_region: impl Into<String>) -> Self {
        Self {
            default_region: default_region.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_template_region(mut self, region: impl Into<String>) -> Self {
        self.template_region = Some(region.into());
        self
    }

    #[must_use]
    pub fn with_dispatch_region(mut self, region: impl Into<String>) -> Self {
        self.dispatch_region = Some(region.into());
        self
    }

    #[must_use]
    pub fn with_attachment_region(mut self, region: impl Into<String>) -> Self {
        self.attachment_region = Some(region.into());
        self
    }

    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Loads the configuration from `SESMAIL_*` environment variables.
    ///
    /// The default region comes from `SESMAIL_REGION`, then `AWS_REGION`.
    /// Empty variables count as unset. Credentials are left to the SDK
    /// default chain.
    pub fn from_env() -> Result<Self, MailerError> {
        let config = Self::from_vars(|name| std::env::var(name).ok())?;
        tracing::info!(region = %config.default_region, "Region configuration loaded from environment");
        Ok(config)
    }

    /// Builds the configuration from a variable lookup such as `std::env::var`.
    pub(crate) fn from_vars<F>(lookup: F) -> Result<Self, MailerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let default_region = var(ENV_REGION)
            .or_else(|| var(ENV_AWS_REGION))
            .ok_or_else(|| {
                MailerError::Config(format!("Missing {} or {}", ENV_REGION, ENV_AWS_REGION))
            })?;

        let config = Self {
            default_region,
            template_region: var(ENV_TEMPLATE_REGION),
            dispatch_region: var(ENV_DISPATCH_REGION),
            attachment_region: var(ENV_ATTACHMENT_REGION),
            credentials: None,
            endpoint_url: var(ENV_ENDPOINT_URL),
        };

        config.validate()?;
        Ok(config)
    }

    /// The default region is the only mandatory setting
    pub fn validate(&self) -> Result<(), MailerError> {
        if self.default_region.is_empty() {
            return Err(MailerError::Config("region mandatory".to_string()));
        }
        Ok(())
    }

    pub fn resolve(&self) -> ResolvedRegions {
        let default = self.default_region.as_str();
        ResolvedRegions {
            template: resolve_region(non_empty(&self.template_region), default).to_string(),
            dispatch: resolve_region(non_empty(&self.dispatch_region), default).to_string(),
            attachment: resolve_region(non_empty(&self.attachment_region), default).to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeyPair {
    access_key_id: String,
    secret_access_key: String,
    #[serde(default)]
    session_token: Option<String>,
}

fn deserialize_credentials<'de, D>(deserializer: D) -> Result<Option<Credentials>, D::Error>
where
    D: Deserializer<'de>,
{
    let pair = Option::<KeyPair>::deserialize(deserializer)?;
    Ok(pair.map(|pair| {
        Credentials::new(
            pair.access_key_id,
            pair.secret_access_key,
            pair.session_token,
            None,
            "sesmail-config",
        )
    }))
}
