use crate::core::client::document::{DocumentClient, DocumentError, TablePage};
use crate::types::movie::Movie;
use crate::types::params::DocumentArgs;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, KeySchemaElement, KeyType, ProvisionedThroughput, ReturnValue,
    ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, to_item};
use std::sync::Arc;

/// Read and write capacity provisioned for the table created by `create_table`
const PROVISIONED_CAPACITY_UNITS: i64 = 10;

#[derive(Clone, Debug)]
pub struct AWSDynamo {
    client: Arc<Client>,
    table_name: String,
}

impl AWSDynamo {
    /// Creates a new instance of AWSDynamo with the provided AWS configuration.
    ///
    /// # Arguments
    /// * `aws_config` - The AWS configuration.
    /// * `args` - The document store arguments naming the table.
    ///
    /// # Returns
    /// * `Self` - The new instance of AWSDynamo.
    pub fn new(aws_config: &SdkConfig, args: &DocumentArgs) -> Self {
        Self { client: Arc::new(Client::new(aws_config)), table_name: args.table_name.clone() }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Marshal the composite (year, title) primary key of a movie record.
    fn movie_key(year: i32, title: &str) -> [(String, AttributeValue); 2] {
        [
            ("year".to_string(), AttributeValue::N(year.to_string())),
            ("title".to_string(), AttributeValue::S(title.to_string())),
        ]
    }
}

#[async_trait]
impl DocumentClient for AWSDynamo {
    /// Create the table with `year` (number) as the partition key and
    /// `title` (string) as the sort key.
    async fn create_table(&self) -> Result<(), DocumentError> {
        let year_attribute = AttributeDefinition::builder()
            .attribute_name("year")
            .attribute_type(ScalarAttributeType::N)
            .build()?;
        let title_attribute = AttributeDefinition::builder()
            .attribute_name("title")
            .attribute_type(ScalarAttributeType::S)
            .build()?;
        let hash_key = KeySchemaElement::builder().attribute_name("year").key_type(KeyType::Hash).build()?;
        let range_key = KeySchemaElement::builder().attribute_name("title").key_type(KeyType::Range).build()?;
        let throughput = ProvisionedThroughput::builder()
            .read_capacity_units(PROVISIONED_CAPACITY_UNITS)
            .write_capacity_units(PROVISIONED_CAPACITY_UNITS)
            .build()?;

        self.client
            .create_table()
            .table_name(&self.table_name)
            .attribute_definitions(year_attribute)
            .attribute_definitions(title_attribute)
            .key_schema(hash_key)
            .key_schema(range_key)
            .provisioned_throughput(throughput)
            .send()
            .await?;

        Ok(())
    }

    /// Fetch one page of table names.
    ///
    /// # Arguments
    /// * `exclusive_start` - Continuation token from the previous page, if any.
    ///
    /// # Returns
    /// * `Result<TablePage, DocumentError>` - The page and the next continuation token.
    async fn list_tables_page(&self, exclusive_start: Option<String>) -> Result<TablePage, DocumentError> {
        let output = self.client.list_tables().set_exclusive_start_table_name(exclusive_start).send().await?;

        Ok(TablePage {
            names: output.table_names().to_vec(),
            last_evaluated: output.last_evaluated_table_name().map(ToString::to_string),
        })
    }

    async fn put_movie(&self, movie: &Movie) -> Result<(), DocumentError> {
        let item = to_item(movie)?;
        self.client.put_item().table_name(&self.table_name).set_item(Some(item)).send().await?;
        Ok(())
    }

    async fn get_movie(&self, year: i32, title: &str) -> Result<Option<Movie>, DocumentError> {
        let mut request = self.client.get_item().table_name(&self.table_name);
        for (name, value) in Self::movie_key(year, title) {
            request = request.key(name, value);
        }
        let output = request.send().await?;

        match output.item {
            Some(item) => Ok(Some(from_item(item)?)),
            None => Ok(None),
        }
    }

    /// Update the nested `info.rating` attribute in place.
    async fn update_rating(&self, year: i32, title: &str, rating: f64) -> Result<Option<f64>, DocumentError> {
        let mut request = self.client.update_item().table_name(&self.table_name);
        for (name, value) in Self::movie_key(year, title) {
            request = request.key(name, value);
        }
        let output = request
            .update_expression("set info.rating = :r")
            .expression_attribute_values(":r", AttributeValue::N(rating.to_string()))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await?;

        // UPDATED_NEW echoes the document path that changed: {"info": {"rating": N}}
        let updated = output
            .attributes
            .as_ref()
            .and_then(|attributes| attributes.get("info"))
            .and_then(|info| info.as_m().ok())
            .and_then(|info| info.get("rating"))
            .and_then(|value| value.as_n().ok())
            .and_then(|value| value.parse::<f64>().ok());

        Ok(updated)
    }

    async fn delete_movie(&self, year: i32, title: &str) -> Result<(), DocumentError> {
        let mut request = self.client.delete_item().table_name(&self.table_name);
        for (name, value) in Self::movie_key(year, title) {
            request = request.key(name, value);
        }
        request.send().await?;
        Ok(())
    }

    async fn delete_table(&self) -> Result<(), DocumentError> {
        self.client.delete_table().table_name(&self.table_name).send().await?;
        Ok(())
    }
}
