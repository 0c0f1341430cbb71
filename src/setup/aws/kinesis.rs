use crate::core::client::stream::kinesis::AWSKinesis;
use crate::core::client::stream::StreamClient;
use crate::core::cloud::CloudProvider;
use crate::core::traits::resource::Resource;
use crate::types::params::StreamArgs;
use crate::CloudcheckResult;
use async_trait::async_trait;
use aws_sdk_kinesis::types::StreamStatus;
use std::sync::Arc;
use tracing::{info, warn};

#[async_trait]
impl Resource for AWSKinesis {
    type SetupArgs = StreamArgs;

    async fn create_setup(provider: Arc<CloudProvider>, args: &Self::SetupArgs) -> CloudcheckResult<Self> {
        match provider.as_ref() {
            CloudProvider::AWS(aws_config) => Ok(Self::new(aws_config, args)),
        }
    }

    /// Create the stream when it does not exist yet.
    async fn setup(&self) -> CloudcheckResult<()> {
        if self.check_if_exists().await? {
            warn!("Stream '{}' already exists, skipping creation", self.stream_name());
            return Ok(());
        }

        info!("Creating stream: {}", self.stream_name());
        self.create_stream().await?;
        Ok(())
    }

    async fn check_if_exists(&self) -> CloudcheckResult<bool> {
        Ok(self.client().describe_stream().stream_name(self.stream_name()).send().await.is_ok())
    }

    /// The stream accepts records only once its status is ACTIVE.
    async fn is_ready_to_use(&self) -> CloudcheckResult<bool> {
        let output = self.client().describe_stream().stream_name(self.stream_name()).send().await;

        Ok(output
            .map(|output| {
                matches!(
                    output
                        .stream_description()
                        .expect("DescribeStream always returns a stream description on success")
                        .stream_status(),
                    StreamStatus::Active
                )
            })
            .unwrap_or(false))
    }

    async fn teardown(&self) -> CloudcheckResult<()> {
        info!("Deleting stream: {}", self.stream_name());
        self.delete_stream().await?;
        Ok(())
    }
}
