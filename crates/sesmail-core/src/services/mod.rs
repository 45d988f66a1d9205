/// AWS service clients
pub mod clients;
pub mod s3;
pub mod ses;
pub mod transport;

// Re-export service traits
pub use clients::{AwsClientFactory, AwsService, ClientHandle, ClientProvider};
pub use s3::ObjectStore;
pub use ses::EmailApi;
pub use transport::MailTransport;
