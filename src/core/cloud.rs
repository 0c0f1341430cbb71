use crate::cli::provider::aws::AWSConfigCliArgs;
use aws_config::{Region, SdkConfig};

/// Cloud provider
/// This enum represents the different cloud providers that the checks can run against.
#[derive(Clone)]
pub enum CloudProvider {
    AWS(Box<SdkConfig>),
}

impl CloudProvider {
    /// Build a provider from the AWS CLI arguments.
    ///
    /// Credentials and any unset options come from the default environment
    /// chain; the region and endpoint flags override it when present. The
    /// endpoint override is what lets the binaries run against
    /// localstack-style sandboxes.
    pub async fn from_aws_args(args: &AWSConfigCliArgs) -> Self {
        let mut loader = aws_config::from_env();
        if let Some(region) = &args.aws_region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &args.aws_endpoint_url {
            loader = loader.endpoint_url(endpoint.as_str());
        }
        let config = loader.load().await;
        CloudProvider::AWS(Box::new(config))
    }

    /// Returns the AWS SDK config held by the provider.
    pub fn get_aws_config(&self) -> &SdkConfig {
        match self {
            CloudProvider::AWS(config) => config.as_ref(),
        }
    }

    pub fn get_provider_name(&self) -> String {
        match self {
            CloudProvider::AWS(_) => "AWS".to_string(),
        }
    }
}

impl std::fmt::Debug for CloudProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.get_provider_name().as_str())
    }
}

// Implement Display using Debug since they share the same formatting
impl std::fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
