//! AWS SDK client setup.

use aws_sdk_dynamodb::Client;

use crate::config::Config;

/// Creates a DynamoDB client for the configured target.
///
/// In local mode the endpoint points at DynamoDB Local. Otherwise the SDK's
/// default credential and region chain is used.
pub async fn create_client(config: &Config) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(region) = config.region() {
        sdk_config_loader = sdk_config_loader.region(aws_config::Region::new(region));
    }

    if let Some(endpoint) = config.endpoint_url() {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;

    tracing::info!(target_store = %config.target_display(), "DynamoDB client configured");

    Client::new(&sdk_config)
}
