use crate::core::client::stream::StreamClient;
use crate::{CloudcheckError, CloudcheckResult};
use bytes::Bytes;
use tracing::info;

/// Partition key for the single-record write
const SINGLE_PARTITION_KEY: &str = "key1";
/// Partition key for the batch write
const BATCH_PARTITION_KEY: &str = "key2";
/// Number of records in the batch write
const BATCH_SIZE: usize = 10;

/// The stream walkthrough: describe the stream, write a single record and a
/// batch, then read everything back through a TRIM_HORIZON shard iterator.
pub async fn run(client: &dyn StreamClient) -> CloudcheckResult<()> {
    let summary = client.describe_stream().await?;
    info!(name = %summary.name, status = %summary.status, shards = summary.shard_ids.len(), "Stream description");

    let ack = client.put_record(Bytes::from_static(b"hello stream"), SINGLE_PARTITION_KEY).await?;
    info!(shard_id = %ack.shard_id, sequence_number = %ack.sequence_number, "Put single record");

    let entries = (0..BATCH_SIZE)
        .map(|i| (Bytes::from(format!("record-{}", i)), BATCH_PARTITION_KEY.to_string()))
        .collect::<Vec<_>>();
    let failed = client.put_records(entries).await?;
    if failed > 0 {
        return Err(CloudcheckError::CheckFailedError(format!("{} of {} batch records failed", failed, BATCH_SIZE)));
    }
    info!(count = BATCH_SIZE, "Put record batch");

    let shard_id = summary
        .shard_ids
        .first()
        .ok_or_else(|| CloudcheckError::CheckFailedError(format!("stream '{}' reports no shards", summary.name)))?;
    let iterator = client.shard_iterator(shard_id).await?;
    let batch = client.read_records(&iterator).await?;

    info!(count = batch.records.len(), behind_ms = ?batch.millis_behind_latest, "Read records");
    for record in &batch.records {
        info!(
            partition_key = %record.partition_key,
            sequence_number = %record.sequence_number,
            "* {}",
            String::from_utf8_lossy(&record.data)
        );
    }

    if batch.records.is_empty() {
        return Err(CloudcheckError::CheckFailedError("no records came back from the shard".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::stream::{
        MockStreamClient, PutRecordAck, RecordBatch, StreamError, StreamRecord, StreamSummary,
    };
    use rstest::rstest;

    fn active_summary() -> StreamSummary {
        StreamSummary {
            name: "test-stream".to_string(),
            status: "ACTIVE".to_string(),
            shard_ids: vec!["shardId-000000000000".to_string()],
        }
    }

    fn record(key: &str, sequence: &str, data: &str) -> StreamRecord {
        StreamRecord {
            partition_key: key.to_string(),
            sequence_number: sequence.to_string(),
            data: Bytes::from(data.to_string()),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn walkthrough_writes_then_reads_back() {
        let mut client = MockStreamClient::new();

        client.expect_describe_stream().times(1).returning(|| Ok(active_summary()));
        client.expect_put_record().withf(|_, key| key == SINGLE_PARTITION_KEY).times(1).returning(|_, _| {
            Ok(PutRecordAck { shard_id: "shardId-000000000000".to_string(), sequence_number: "1".to_string() })
        });
        client
            .expect_put_records()
            .withf(|entries| entries.len() == BATCH_SIZE && entries.iter().all(|(_, k)| k == BATCH_PARTITION_KEY))
            .times(1)
            .returning(|_| Ok(0));
        client
            .expect_shard_iterator()
            .withf(|shard| shard == "shardId-000000000000")
            .times(1)
            .returning(|_| Ok("iterator-1".to_string()));
        client.expect_read_records().withf(|iterator| iterator == "iterator-1").times(1).returning(|_| {
            Ok(RecordBatch {
                records: vec![record("key1", "1", "hello stream"), record("key2", "2", "record-0")],
                next_iterator: Some("iterator-2".to_string()),
                millis_behind_latest: Some(0),
            })
        });

        run(&client).await.unwrap();
    }

    #[rstest]
    #[tokio::test]
    async fn walkthrough_fails_when_batch_records_are_rejected() {
        let mut client = MockStreamClient::new();

        client.expect_describe_stream().returning(|| Ok(active_summary()));
        client.expect_put_record().returning(|_, _| {
            Ok(PutRecordAck { shard_id: "shardId-000000000000".to_string(), sequence_number: "1".to_string() })
        });
        client.expect_put_records().returning(|_| Ok(3));

        let result = run(&client).await;
        assert!(matches!(result, Err(CloudcheckError::CheckFailedError(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn walkthrough_surfaces_missing_iterator() {
        let mut client = MockStreamClient::new();

        client.expect_describe_stream().returning(|| Ok(active_summary()));
        client.expect_put_record().returning(|_, _| {
            Ok(PutRecordAck { shard_id: "shardId-000000000000".to_string(), sequence_number: "1".to_string() })
        });
        client.expect_put_records().returning(|_| Ok(0));
        client
            .expect_shard_iterator()
            .returning(|shard| Err(StreamError::MissingShardIteratorError(shard.to_string())));

        let result = run(&client).await;
        assert!(matches!(result, Err(CloudcheckError::StreamError(_))));
    }
}
