pub mod error;
pub mod s3;

use async_trait::async_trait;
use bytes::Bytes;
pub use error::ObjectStoreError;

/// One row of a bucket listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSummary {
    /// Bucket name
    pub name: String,

    /// Creation timestamp
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Object metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMetadata {
    /// Object key
    pub key: String,

    /// Object size in bytes
    pub size: u64,

    /// Last modified timestamp
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,

    /// Storage class
    pub storage_class: Option<String>,
}

/// One page of an object listing plus the continuation token for the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectPage {
    /// Objects carried by this page
    pub objects: Vec<ObjectMetadata>,

    /// Continuation token; listing is complete when absent
    pub next_continuation: Option<String>,
}

/// Trait defining object storage operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStoreClient: Send + Sync {
    /// Create the bucket.
    async fn create_bucket(&self) -> Result<(), ObjectStoreError>;

    /// List every bucket visible to the account.
    async fn list_buckets(&self) -> Result<Vec<BucketSummary>, ObjectStoreError>;

    /// Fetch one page of object metadata, resuming from `continuation`.
    async fn list_objects_page(&self, continuation: Option<String>) -> Result<ObjectPage, ObjectStoreError>;

    /// Put the data into the bucket with the specified key.
    async fn put_object(&self, key: &str, data: Bytes) -> Result<(), ObjectStoreError>;

    /// Get the data from the bucket with the specified key.
    async fn get_object(&self, key: &str) -> Result<Bytes, ObjectStoreError>;

    /// Server-side copy within the bucket.
    async fn copy_object(&self, source_key: &str, dest_key: &str) -> Result<(), ObjectStoreError>;

    /// Delete the object with the specified key.
    async fn delete_object(&self, key: &str) -> Result<(), ObjectStoreError>;

    /// Delete the bucket. It must be empty.
    async fn delete_bucket(&self) -> Result<(), ObjectStoreError>;

    /// Probe whether an object exists.
    async fn object_exists(&self, key: &str) -> Result<bool, ObjectStoreError>;

    /// Probe whether the bucket exists.
    async fn bucket_exists(&self) -> Result<bool, ObjectStoreError>;
}
