use aws_sdk_kinesis::error::{BuildError, SdkError};
use aws_sdk_kinesis::operation::create_stream::CreateStreamError;
use aws_sdk_kinesis::operation::delete_stream::DeleteStreamError;
use aws_sdk_kinesis::operation::describe_stream::DescribeStreamError;
use aws_sdk_kinesis::operation::get_records::GetRecordsError;
use aws_sdk_kinesis::operation::get_shard_iterator::GetShardIteratorError;
use aws_sdk_kinesis::operation::put_record::PutRecordError;
use aws_sdk_kinesis::operation::put_records::PutRecordsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Failed to create stream: {0}")]
    CreateStreamError(#[from] SdkError<CreateStreamError>),
    #[error("Failed to describe stream: {0}")]
    DescribeStreamError(#[from] SdkError<DescribeStreamError>),
    #[error("Failed to put record: {0}")]
    PutRecordError(#[from] SdkError<PutRecordError>),
    #[error("Failed to put record batch: {0}")]
    PutRecordsError(#[from] SdkError<PutRecordsError>),
    #[error("Failed to get shard iterator: {0}")]
    GetShardIteratorError(#[from] SdkError<GetShardIteratorError>),
    #[error("Failed to get records: {0}")]
    GetRecordsError(#[from] SdkError<GetRecordsError>),
    #[error("Failed to delete stream: {0}")]
    DeleteStreamError(#[from] SdkError<DeleteStreamError>),
    /// The service accepted the request but returned no iterator for the shard
    #[error("No shard iterator returned for shard: {0}")]
    MissingShardIteratorError(String),
    #[error("Invalid request parameters: {0}")]
    RequestBuildError(#[from] BuildError),
}
