use crate::core::client::object_store::s3::AWSS3;
use crate::core::client::object_store::ObjectStoreClient;
use crate::core::cloud::CloudProvider;
use crate::core::traits::resource::Resource;
use crate::types::params::ObjectStoreArgs;
use crate::CloudcheckResult;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

#[async_trait]
impl Resource for AWSS3 {
    type SetupArgs = ObjectStoreArgs;

    async fn create_setup(provider: Arc<CloudProvider>, args: &Self::SetupArgs) -> CloudcheckResult<Self> {
        match provider.as_ref() {
            CloudProvider::AWS(aws_config) => Ok(Self::new(aws_config, args)),
        }
    }

    /// Create the bucket when it does not exist yet.
    async fn setup(&self) -> CloudcheckResult<()> {
        if self.check_if_exists().await? {
            warn!("Bucket '{}' already exists, skipping creation", self.bucket_name());
            return Ok(());
        }

        info!("Creating bucket: {}", self.bucket_name());
        self.create_bucket().await?;
        Ok(())
    }

    async fn check_if_exists(&self) -> CloudcheckResult<bool> {
        Ok(self.bucket_exists().await?)
    }

    /// A bucket that answers HEAD is ready.
    async fn is_ready_to_use(&self) -> CloudcheckResult<bool> {
        Ok(self.bucket_exists().await?)
    }

    async fn teardown(&self) -> CloudcheckResult<()> {
        info!("Deleting bucket: {}", self.bucket_name());
        self.delete_bucket().await?;
        Ok(())
    }
}
