use crate::core::client::object_store::{
    BucketSummary, ObjectMetadata, ObjectPage, ObjectStoreClient, ObjectStoreError,
};
use crate::types::params::ObjectStoreArgs;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::primitives::{ByteStream, DateTime};
use aws_sdk_s3::Client;
use bytes::Bytes;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AWSS3 {
    client: Arc<Client>,
    bucket_name: String,
}

impl AWSS3 {
    /// Creates a new instance of AWSS3 with the provided AWS configuration.
    ///
    /// # Arguments
    /// * `aws_config` - The AWS configuration.
    /// * `args` - The object store arguments naming the bucket.
    ///
    /// # Returns
    /// * `Self` - The new instance of AWSS3.
    pub fn new(aws_config: &SdkConfig, args: &ObjectStoreArgs) -> Self {
        let mut s3_config_builder = aws_sdk_s3::config::Builder::from(aws_config);
        // this is necessary for it to work with localstack-style endpoints
        s3_config_builder = s3_config_builder.force_path_style(true);
        let client = Client::from_conf(s3_config_builder.build());

        Self { client: Arc::new(client), bucket_name: args.bucket_name.clone() }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }
}

fn to_chrono(timestamp: &DateTime) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::from_timestamp(timestamp.secs(), timestamp.subsec_nanos())
}

#[async_trait]
impl ObjectStoreClient for AWSS3 {
    /// Create the bucket, with an explicit location constraint whenever the
    /// client region is not us-east-1.
    async fn create_bucket(&self) -> Result<(), ObjectStoreError> {
        let region = self.client.config().region().map(|r| r.to_string()).unwrap_or_else(|| "us-east-1".to_string());

        let mut bucket_builder = self.client.create_bucket().bucket(&self.bucket_name);

        if region != "us-east-1" {
            let constraint = aws_sdk_s3::types::BucketLocationConstraint::from(region.as_str());
            let cfg = aws_sdk_s3::types::CreateBucketConfiguration::builder().location_constraint(constraint).build();
            bucket_builder = bucket_builder.create_bucket_configuration(cfg);
        }

        bucket_builder.send().await?;
        Ok(())
    }

    async fn list_buckets(&self) -> Result<Vec<BucketSummary>, ObjectStoreError> {
        let output = self.client.list_buckets().send().await?;

        Ok(output
            .buckets()
            .iter()
            .map(|bucket| BucketSummary {
                name: bucket.name().unwrap_or_default().to_string(),
                created_at: bucket.creation_date().and_then(to_chrono),
            })
            .collect())
    }

    /// Fetch one page of object metadata.
    ///
    /// # Arguments
    /// * `continuation` - Continuation token from the previous page, if any.
    ///
    /// # Returns
    /// * `Result<ObjectPage, ObjectStoreError>` - The page and the next continuation token.
    async fn list_objects_page(&self, continuation: Option<String>) -> Result<ObjectPage, ObjectStoreError> {
        let output = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket_name)
            .set_continuation_token(continuation)
            .send()
            .await?;

        let objects = output
            .contents()
            .iter()
            .map(|object| ObjectMetadata {
                key: object.key().unwrap_or_default().to_string(),
                size: object.size().unwrap_or_default() as u64,
                last_modified: object.last_modified().and_then(to_chrono),
                storage_class: object.storage_class().map(|class| class.as_str().to_string()),
            })
            .collect();

        Ok(ObjectPage { objects, next_continuation: output.next_continuation_token().map(ToString::to_string) })
    }

    /// Put the data into the bucket with the specified key.
    ///
    /// # Arguments
    /// * `key` - The key of the object to put.
    /// * `data` - The data to put into the bucket.
    ///
    /// # Returns
    /// * `Result<(), ObjectStoreError>` - The result of the put operation.
    async fn put_object(&self, key: &str, data: Bytes) -> Result<(), ObjectStoreError> {
        self.client.put_object().bucket(&self.bucket_name).key(key).body(ByteStream::from(data)).send().await?;
        Ok(())
    }

    /// Get the data from the bucket with the specified key.
    ///
    /// # Arguments
    /// * `key` - The key of the object to retrieve.
    ///
    /// # Returns
    /// * `Result<Bytes, ObjectStoreError>` - The result of the get operation.
    async fn get_object(&self, key: &str) -> Result<Bytes, ObjectStoreError> {
        let output = self.client.get_object().bucket(&self.bucket_name).key(key).send().await?;

        let data = output.body.collect().await.map_err(|e| ObjectStoreError::ObjectStreamError(e.to_string()))?;

        Ok(data.into_bytes())
    }

    async fn copy_object(&self, source_key: &str, dest_key: &str) -> Result<(), ObjectStoreError> {
        self.client
            .copy_object()
            .bucket(&self.bucket_name)
            .copy_source(format!("{}/{}", self.bucket_name, source_key))
            .key(dest_key)
            .send()
            .await?;
        Ok(())
    }

    async fn delete_object(&self, key: &str) -> Result<(), ObjectStoreError> {
        self.client.delete_object().bucket(&self.bucket_name).key(key).send().await?;
        Ok(())
    }

    async fn delete_bucket(&self) -> Result<(), ObjectStoreError> {
        self.client.delete_bucket().bucket(&self.bucket_name).send().await?;
        Ok(())
    }

    async fn object_exists(&self, key: &str) -> Result<bool, ObjectStoreError> {
        Ok(self.client.head_object().bucket(&self.bucket_name).key(key).send().await.is_ok())
    }

    async fn bucket_exists(&self) -> Result<bool, ObjectStoreError> {
        Ok(self.client.head_bucket().bucket(&self.bucket_name).send().await.is_ok())
    }
}
