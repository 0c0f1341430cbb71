use clap::Args;
use url::Url;

/// Parameters used to config AWS.
///
/// Credentials always come from the default environment chain; these flags
/// only override the region and, for sandboxed runs, the endpoint.
#[derive(Debug, Clone, Args)]
pub struct AWSConfigCliArgs {
    /// The region.
    #[arg(env = "AWS_REGION", long)]
    pub aws_region: Option<String>,

    /// Endpoint override for localstack-style sandboxes.
    #[arg(env = "AWS_ENDPOINT_URL", long)]
    pub aws_endpoint_url: Option<Url>,
}
