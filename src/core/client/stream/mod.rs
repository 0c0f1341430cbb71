pub mod error;
pub mod kinesis;

use async_trait::async_trait;
use bytes::Bytes;
pub use error::StreamError;

/// The subset of a stream description the checks report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamSummary {
    /// Stream name
    pub name: String,

    /// Lifecycle status reported by the service, e.g. CREATING or ACTIVE
    pub status: String,

    /// Identifiers of the shards backing the stream
    pub shard_ids: Vec<String>,
}

/// Acknowledgement for a single-record write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutRecordAck {
    /// Shard the record landed on
    pub shard_id: String,

    /// Sequence number assigned to the record
    pub sequence_number: String,
}

/// One record read back from a shard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamRecord {
    pub partition_key: String,
    pub sequence_number: String,
    pub data: Bytes,
}

/// Result of a single read through a shard iterator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordBatch {
    pub records: Vec<StreamRecord>,

    /// Cursor for resuming the read; absent when the shard is closed
    pub next_iterator: Option<String>,

    /// How far behind the tip of the stream this read was, in milliseconds
    pub millis_behind_latest: Option<i64>,
}

/// Trait defining stream operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StreamClient: Send + Sync {
    /// Create the stream with the configured shard count.
    async fn create_stream(&self) -> Result<(), StreamError>;

    /// Describe the stream.
    async fn describe_stream(&self) -> Result<StreamSummary, StreamError>;

    /// Write a single record under the given partition key.
    async fn put_record(&self, data: Bytes, partition_key: &str) -> Result<PutRecordAck, StreamError>;

    /// Write a batch of (data, partition key) records, returning the
    /// failed-record count reported by the service.
    async fn put_records(&self, entries: Vec<(Bytes, String)>) -> Result<usize, StreamError>;

    /// Obtain a TRIM_HORIZON iterator for the given shard.
    async fn shard_iterator(&self, shard_id: &str) -> Result<String, StreamError>;

    /// Read records through a shard iterator.
    async fn read_records(&self, iterator: &str) -> Result<RecordBatch, StreamError>;

    /// Delete the stream.
    async fn delete_stream(&self) -> Result<(), StreamError>;
}
