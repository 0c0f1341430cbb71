use crate::core::client::stream::{PutRecordAck, RecordBatch, StreamClient, StreamError, StreamRecord, StreamSummary};
use crate::types::params::StreamArgs;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_kinesis::primitives::Blob;
use aws_sdk_kinesis::types::{PutRecordsRequestEntry, ShardIteratorType};
use aws_sdk_kinesis::Client;
use bytes::Bytes;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AWSKinesis {
    client: Arc<Client>,
    stream_name: String,
    shard_count: i32,
}

impl AWSKinesis {
    /// Creates a new instance of AWSKinesis with the provided AWS configuration.
    ///
    /// # Arguments
    /// * `aws_config` - The AWS configuration.
    /// * `args` - The stream arguments naming the stream and its shard count.
    ///
    /// # Returns
    /// * `Self` - The new instance of AWSKinesis.
    pub fn new(aws_config: &SdkConfig, args: &StreamArgs) -> Self {
        Self {
            client: Arc::new(Client::new(aws_config)),
            stream_name: args.stream_name.clone(),
            shard_count: args.shard_count,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn stream_name(&self) -> &str {
        &self.stream_name
    }
}

#[async_trait]
impl StreamClient for AWSKinesis {
    async fn create_stream(&self) -> Result<(), StreamError> {
        self.client.create_stream().stream_name(&self.stream_name).shard_count(self.shard_count).send().await?;
        Ok(())
    }

    async fn describe_stream(&self) -> Result<StreamSummary, StreamError> {
        let output = self.client.describe_stream().stream_name(&self.stream_name).send().await?;
        let description = output.stream_description().expect("DescribeStream always returns a stream description on success");

        Ok(StreamSummary {
            name: description.stream_name().to_string(),
            status: description.stream_status().as_str().to_string(),
            shard_ids: description.shards().iter().map(|shard| shard.shard_id().to_string()).collect(),
        })
    }

    async fn put_record(&self, data: Bytes, partition_key: &str) -> Result<PutRecordAck, StreamError> {
        let output = self
            .client
            .put_record()
            .stream_name(&self.stream_name)
            .partition_key(partition_key)
            .data(Blob::new(data))
            .send()
            .await?;

        Ok(PutRecordAck {
            shard_id: output.shard_id().to_string(),
            sequence_number: output.sequence_number().to_string(),
        })
    }

    /// Batch write. Entries that the service rejects are counted, not retried.
    async fn put_records(&self, entries: Vec<(Bytes, String)>) -> Result<usize, StreamError> {
        let records = entries
            .into_iter()
            .map(|(data, partition_key)| {
                PutRecordsRequestEntry::builder().data(Blob::new(data)).partition_key(partition_key).build()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let output = self.client.put_records().stream_name(&self.stream_name).set_records(Some(records)).send().await?;

        Ok(output.failed_record_count().unwrap_or(0) as usize)
    }

    async fn shard_iterator(&self, shard_id: &str) -> Result<String, StreamError> {
        let output = self
            .client
            .get_shard_iterator()
            .stream_name(&self.stream_name)
            .shard_id(shard_id)
            .shard_iterator_type(ShardIteratorType::TrimHorizon)
            .send()
            .await?;

        output
            .shard_iterator()
            .map(ToString::to_string)
            .ok_or_else(|| StreamError::MissingShardIteratorError(shard_id.to_string()))
    }

    async fn read_records(&self, iterator: &str) -> Result<RecordBatch, StreamError> {
        let output = self.client.get_records().shard_iterator(iterator).send().await?;

        let records = output
            .records()
            .iter()
            .map(|record| StreamRecord {
                partition_key: record.partition_key().to_string(),
                sequence_number: record.sequence_number().to_string(),
                data: Bytes::copy_from_slice(record.data().as_ref()),
            })
            .collect();

        Ok(RecordBatch {
            records,
            next_iterator: output.next_shard_iterator().map(ToString::to_string),
            millis_behind_latest: output.millis_behind_latest(),
        })
    }

    async fn delete_stream(&self) -> Result<(), StreamError> {
        self.client.delete_stream().stream_name(&self.stream_name).send().await?;
        Ok(())
    }
}
