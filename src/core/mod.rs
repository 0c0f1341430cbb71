// Core module - contains all the core abstractions

pub mod client;
pub mod cloud;
pub mod traits;

// Re-export commonly used types from client
pub use client::document::{DocumentClient, TablePage};
pub use client::object_store::{BucketSummary, ObjectMetadata, ObjectPage, ObjectStoreClient};
pub use client::stream::{PutRecordAck, RecordBatch, StreamClient, StreamRecord, StreamSummary};
