use crate::cli::provider::aws::AWSConfigCliArgs;
use crate::core::cloud::CloudProvider;
use crate::types::params::MiscellaneousArgs;
use std::sync::Arc;

/// Build a provider pointed at the sandbox endpoint named by the
/// environment. The round-trip tests are ignored unless one is configured.
pub async fn sandbox_provider() -> Arc<CloudProvider> {
    dotenvy::dotenv().ok();

    let args = AWSConfigCliArgs {
        aws_region: std::env::var("AWS_REGION").ok(),
        aws_endpoint_url: std::env::var("AWS_ENDPOINT_URL")
            .ok()
            .map(|endpoint| endpoint.parse().expect("AWS_ENDPOINT_URL is not a valid URL")),
    };

    Arc::new(CloudProvider::from_aws_args(&args).await)
}

pub fn sandbox_misc() -> MiscellaneousArgs {
    MiscellaneousArgs { poll_interval: 1, timeout: 60 }
}
