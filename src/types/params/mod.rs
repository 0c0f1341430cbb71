use crate::cli::object_store::ObjectStoreCliArgs;
use crate::cli::stream::StreamCliArgs;
use crate::cli::{document::DocumentCliArgs, PollCliArgs};

/// DocumentArgs - Arguments used to reach the document store table
#[derive(Debug, Clone)]
pub struct DocumentArgs {
    pub table_name: String,
}

impl From<DocumentCliArgs> for DocumentArgs {
    fn from(args: DocumentCliArgs) -> Self {
        Self { table_name: args.table_name }
    }
}

/// StreamArgs - Arguments used to reach the stream
#[derive(Debug, Clone)]
pub struct StreamArgs {
    pub stream_name: String,
    pub shard_count: i32,
}

impl From<StreamCliArgs> for StreamArgs {
    fn from(args: StreamCliArgs) -> Self {
        Self { stream_name: args.stream_name, shard_count: args.shard_count }
    }
}

/// ObjectStoreArgs - Arguments used to reach the bucket and name the objects
/// the check moves around
#[derive(Debug, Clone)]
pub struct ObjectStoreArgs {
    pub bucket_name: String,
    pub key: String,
    pub upload_path: std::path::PathBuf,
    pub download_path: std::path::PathBuf,
}

impl From<ObjectStoreCliArgs> for ObjectStoreArgs {
    fn from(args: ObjectStoreCliArgs) -> Self {
        Self {
            bucket_name: args.bucket_name,
            key: args.key,
            upload_path: args.upload_path,
            download_path: args.download_path,
        }
    }
}

/// Miscellaneous arguments
#[derive(Debug, Clone)]
pub struct MiscellaneousArgs {
    pub poll_interval: u64,
    pub timeout: u64,
}

impl From<PollCliArgs> for MiscellaneousArgs {
    fn from(args: PollCliArgs) -> Self {
        Self { poll_interval: args.poll_interval_secs, timeout: args.timeout_secs }
    }
}
