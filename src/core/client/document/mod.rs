pub mod dynamodb;
pub mod error;

use crate::types::movie::Movie;
use async_trait::async_trait;
pub use error::DocumentError;

/// One page of a table listing plus the continuation token for the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePage {
    /// Table names carried by this page
    pub names: Vec<String>,

    /// Continuation token; listing is complete when absent
    pub last_evaluated: Option<String>,
}

/// Trait defining document store operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentClient: Send + Sync {
    /// Create the table with the composite (year, title) primary key.
    async fn create_table(&self) -> Result<(), DocumentError>;

    /// Fetch one page of table names, resuming from `exclusive_start`.
    async fn list_tables_page(&self, exclusive_start: Option<String>) -> Result<TablePage, DocumentError>;

    /// Write a movie record.
    async fn put_movie(&self, movie: &Movie) -> Result<(), DocumentError>;

    /// Read a movie back by its key. A missing item is `None`, not an error.
    async fn get_movie(&self, year: i32, title: &str) -> Result<Option<Movie>, DocumentError>;

    /// Update the nested rating attribute, returning the new value echoed by the service.
    async fn update_rating(&self, year: i32, title: &str, rating: f64) -> Result<Option<f64>, DocumentError>;

    /// Delete a movie by its key.
    async fn delete_movie(&self, year: i32, title: &str) -> Result<(), DocumentError>;

    /// Delete the table.
    async fn delete_table(&self) -> Result<(), DocumentError>;
}
