use lambda_runtime::{Error, run, service_fn};
use sesmail_worker::handler;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    info!(version = sesmail_worker::VERSION, "Starting sesmail Lambda function");

    // Run the Lambda runtime
    run(service_fn(handler)).await
}
