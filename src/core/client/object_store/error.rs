use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::copy_object::CopyObjectError;
use aws_sdk_s3::operation::create_bucket::CreateBucketError;
use aws_sdk_s3::operation::delete_bucket::DeleteBucketError;
use aws_sdk_s3::operation::delete_object::DeleteObjectError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::operation::list_buckets::ListBucketsError;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
use aws_sdk_s3::operation::put_object::PutObjectError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObjectStoreError {
    #[error("Failed to create bucket: {0}")]
    CreateBucketError(#[from] SdkError<CreateBucketError>),
    #[error("Failed to list buckets: {0}")]
    ListBucketsError(#[from] SdkError<ListBucketsError>),
    #[error("Failed to list objects: {0}")]
    ListObjectsError(#[from] SdkError<ListObjectsV2Error>),
    #[error("Failed to put object: {0}")]
    PutObjectError(#[from] SdkError<PutObjectError>),
    #[error("Failed to get object: {0}")]
    GetObjectError(#[from] SdkError<GetObjectError>),
    #[error("Failed to copy object: {0}")]
    CopyObjectError(#[from] SdkError<CopyObjectError>),
    #[error("Failed to delete object: {0}")]
    DeleteObjectError(#[from] SdkError<DeleteObjectError>),
    #[error("Failed to delete bucket: {0}")]
    DeleteBucketError(#[from] SdkError<DeleteBucketError>),
    #[error("Failed to stream object body: {0}")]
    ObjectStreamError(String),
}
