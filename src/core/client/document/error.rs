use aws_sdk_dynamodb::error::{BuildError, SdkError};
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::delete_table::DeleteTableError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::list_tables::ListTablesError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to create table: {0}")]
    CreateTableError(#[from] SdkError<CreateTableError>),
    #[error("Failed to list tables: {0}")]
    ListTablesError(#[from] SdkError<ListTablesError>),
    #[error("Failed to put item: {0}")]
    PutItemError(#[from] SdkError<PutItemError>),
    #[error("Failed to get item: {0}")]
    GetItemError(#[from] SdkError<GetItemError>),
    #[error("Failed to update item: {0}")]
    UpdateItemError(#[from] SdkError<UpdateItemError>),
    #[error("Failed to delete item: {0}")]
    DeleteItemError(#[from] SdkError<DeleteItemError>),
    #[error("Failed to delete table: {0}")]
    DeleteTableError(#[from] SdkError<DeleteTableError>),
    /// Attribute map conversion error
    #[error("Failed to convert item attributes: {0}")]
    MarshalError(#[from] serde_dynamo::Error),
    #[error("Invalid request parameters: {0}")]
    RequestBuildError(#[from] BuildError),
}
