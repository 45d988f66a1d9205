/// Lambda event handler
use anyhow::Context;
use lambda_runtime::{Error, LambdaEvent};
use serde::Deserialize;
use serde_json::Value;
use sesmail_core::{RegionConfig, SendFailure, SendRequest, send_email};
use tracing::{info, warn};

/// Payload of a send invocation
#[derive(Debug, Deserialize)]
pub struct SendEmailEvent {
    pub params: SendRequest,
    /// Falls back to `RegionConfig::from_env` when absent
    #[serde(rename = "awsConfigParams", default)]
    pub aws_config: Option<RegionConfig>,
}

/// Main Lambda handler
pub async fn handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    info!(request_id = %event.context.request_id, "Received send email event");
    Ok(process(event.payload).await?)
}

/// Sends the email described by `payload` and returns the result envelope.
///
/// Only a payload that cannot be parsed is an error; send failures are
/// returned as the serialized failure envelope.
pub async fn process(payload: Value) -> anyhow::Result<Value> {
    let event: SendEmailEvent =
        serde_json::from_value(payload).context("Invalid send email event")?;

    let config = match event.aws_config {
        Some(config) => config,
        None => match RegionConfig::from_env() {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "No usable region configuration");
                return Ok(serde_json::to_value(SendFailure::from(e))?);
            }
        },
    };

    let response = match send_email(event.params, config).await {
        Ok(success) => serde_json::to_value(success)?,
        Err(failure) => serde_json::to_value(failure)?,
    };

    Ok(response)
}
