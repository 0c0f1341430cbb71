use crate::core::client::document::dynamodb::AWSDynamo;
use crate::core::client::document::DocumentClient;
use crate::core::cloud::CloudProvider;
use crate::core::traits::resource::Resource;
use crate::types::params::DocumentArgs;
use crate::CloudcheckResult;
use async_trait::async_trait;
use aws_sdk_dynamodb::types::TableStatus;
use std::sync::Arc;
use tracing::{info, warn};

#[async_trait]
impl Resource for AWSDynamo {
    type SetupArgs = DocumentArgs;

    async fn create_setup(provider: Arc<CloudProvider>, args: &Self::SetupArgs) -> CloudcheckResult<Self> {
        match provider.as_ref() {
            CloudProvider::AWS(aws_config) => Ok(Self::new(aws_config, args)),
        }
    }

    /// Create the table when it does not exist yet.
    async fn setup(&self) -> CloudcheckResult<()> {
        if self.check_if_exists().await? {
            warn!("Table '{}' already exists, skipping creation", self.table_name());
            return Ok(());
        }

        info!("Creating table: {}", self.table_name());
        self.create_table().await?;
        Ok(())
    }

    async fn check_if_exists(&self) -> CloudcheckResult<bool> {
        Ok(self.client().describe_table().table_name(self.table_name()).send().await.is_ok())
    }

    /// The table serves reads and writes only once its status is ACTIVE.
    async fn is_ready_to_use(&self) -> CloudcheckResult<bool> {
        let output = self.client().describe_table().table_name(self.table_name()).send().await;

        Ok(matches!(
            output.ok().and_then(|output| output.table).and_then(|table| table.table_status),
            Some(TableStatus::Active)
        ))
    }

    async fn teardown(&self) -> CloudcheckResult<()> {
        info!("Deleting table: {}", self.table_name());
        self.delete_table().await?;
        Ok(())
    }
}
