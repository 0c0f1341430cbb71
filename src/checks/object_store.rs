use crate::core::client::object_store::{ObjectMetadata, ObjectStoreClient};
use crate::types::params::{MiscellaneousArgs, ObjectStoreArgs};
use crate::{CloudcheckError, CloudcheckResult};
use bytes::Bytes;
use std::time::Duration;
use tracing::{debug, info};

/// Content written to the upload file when it does not exist yet
const SAMPLE_CONTENT: &str = "Hello World!\n";

/// Suffix appended to the object key for the server-side copy
const COPY_SUFFIX: &str = ".copy";

/// Collect every object in the bucket, following the continuation token
/// until the service stops returning one.
pub async fn list_objects(client: &dyn ObjectStoreClient) -> CloudcheckResult<Vec<ObjectMetadata>> {
    let mut objects = Vec::new();
    let mut continuation: Option<String> = None;

    loop {
        let page = client.list_objects_page(continuation.take()).await?;
        objects.extend(page.objects);

        match page.next_continuation {
            Some(token) => continuation = Some(token),
            None => break,
        }
    }

    Ok(objects)
}

/// Wait until an object stops answering HEAD.
async fn wait_object_absent(
    client: &dyn ObjectStoreClient,
    key: &str,
    misc: &MiscellaneousArgs,
) -> CloudcheckResult<()> {
    let start = std::time::Instant::now();
    let timeout = Duration::from_secs(misc.timeout);

    while start.elapsed() < timeout {
        if !client.object_exists(key).await? {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_secs(misc.poll_interval)).await;
    }

    Err(CloudcheckError::CheckFailedError(format!("object '{}' still present after delete", key)))
}

/// The object store walkthrough: list buckets, upload an object from bytes
/// and from a local file, list objects, download, server-side copy, then
/// delete every object the check created.
pub async fn run(
    client: &dyn ObjectStoreClient,
    args: &ObjectStoreArgs,
    misc: &MiscellaneousArgs,
) -> CloudcheckResult<()> {
    let buckets = client.list_buckets().await?;
    info!(count = buckets.len(), "Buckets visible to this account");
    for bucket in &buckets {
        info!("* {} created on {:?}", bucket.name, bucket.created_at);
    }

    // Seed the local upload file when it is not there.
    if !args.upload_path.exists() {
        debug!(path = %args.upload_path.display(), "Seeding upload file with sample content");
        tokio::fs::write(&args.upload_path, SAMPLE_CONTENT).await?;
    }
    let upload_content = tokio::fs::read(&args.upload_path).await?;
    client.put_object(&args.key, Bytes::from(upload_content.clone())).await?;
    info!(key = %args.key, bytes = upload_content.len(), "Uploaded object");

    let objects = list_objects(client).await?;
    info!(count = objects.len(), "Objects in bucket");
    for object in &objects {
        info!(size = object.size, storage_class = ?object.storage_class, "* {}", object.key);
    }
    if !objects.iter().any(|object| object.key == args.key) {
        return Err(CloudcheckError::CheckFailedError(format!("object '{}' missing from listing", args.key)));
    }

    let downloaded = client.get_object(&args.key).await?;
    tokio::fs::write(&args.download_path, &downloaded).await?;
    info!(path = %args.download_path.display(), bytes = downloaded.len(), "Downloaded object");
    if downloaded.as_ref() != upload_content.as_slice() {
        return Err(CloudcheckError::CheckFailedError(format!(
            "object '{}' came back different from what was uploaded",
            args.key
        )));
    }

    let copy_key = format!("{}{}", args.key, COPY_SUFFIX);
    client.copy_object(&args.key, &copy_key).await?;
    info!(from = %args.key, to = %copy_key, "Copied object");

    for key in [args.key.as_str(), copy_key.as_str()] {
        client.delete_object(key).await?;
        wait_object_absent(client, key, misc).await?;
        info!(key = %key, "Deleted object");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::object_store::{MockObjectStoreClient, ObjectPage};
    use rstest::rstest;

    fn args(dir: &std::path::Path) -> ObjectStoreArgs {
        ObjectStoreArgs {
            bucket_name: "cloudcheck-bucket".to_string(),
            key: "test.txt".to_string(),
            upload_path: dir.join("test.txt"),
            download_path: dir.join("download.txt"),
        }
    }

    fn misc() -> MiscellaneousArgs {
        MiscellaneousArgs { poll_interval: 0, timeout: 5 }
    }

    fn object(key: &str) -> ObjectMetadata {
        ObjectMetadata { key: key.to_string(), size: 13, last_modified: None, storage_class: None }
    }

    #[rstest]
    #[tokio::test]
    async fn list_objects_follows_continuation_until_absent() {
        let mut client = MockObjectStoreClient::new();
        let mut seq = mockall::Sequence::new();

        client
            .expect_list_objects_page()
            .withf(|continuation| continuation.is_none())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(ObjectPage { objects: vec![object("a.txt")], next_continuation: Some("token".to_string()) })
            });
        client
            .expect_list_objects_page()
            .withf(|continuation| continuation.as_deref() == Some("token"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(ObjectPage { objects: vec![object("b.txt")], next_continuation: None }));

        let objects = list_objects(&client).await.unwrap();
        let keys = objects.iter().map(|object| object.key.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["a.txt", "b.txt"]);
    }

    #[rstest]
    #[tokio::test]
    async fn walkthrough_round_trips_the_object() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(dir.path());
        let mut client = MockObjectStoreClient::new();

        client.expect_list_buckets().times(1).returning(|| Ok(vec![]));

        // The mock store remembers what was put and serves it back.
        let stored = std::sync::Arc::new(std::sync::Mutex::new(Vec::<u8>::new()));
        let sink = stored.clone();
        client.expect_put_object().withf(|key, _| key == "test.txt").times(1).returning(move |_, data| {
            *sink.lock().unwrap() = data.to_vec();
            Ok(())
        });

        client.expect_list_objects_page().returning(|_| {
            Ok(ObjectPage { objects: vec![object("test.txt")], next_continuation: None })
        });

        let source = stored.clone();
        client
            .expect_get_object()
            .withf(|key| key == "test.txt")
            .times(1)
            .returning(move |_| Ok(Bytes::from(source.lock().unwrap().clone())));

        client
            .expect_copy_object()
            .withf(|source, dest| source == "test.txt" && dest == "test.txt.copy")
            .times(1)
            .returning(|_, _| Ok(()));

        client.expect_delete_object().times(2).returning(|_| Ok(()));
        client.expect_object_exists().times(2).returning(|_| Ok(false));

        run(&client, &args, &misc()).await.unwrap();

        let downloaded = std::fs::read(&args.download_path).unwrap();
        assert_eq!(downloaded, SAMPLE_CONTENT.as_bytes());
    }

    #[rstest]
    #[tokio::test]
    async fn walkthrough_fails_when_object_missing_from_listing() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(dir.path());
        let mut client = MockObjectStoreClient::new();

        client.expect_list_buckets().returning(|| Ok(vec![]));
        client.expect_put_object().returning(|_, _| Ok(()));
        client
            .expect_list_objects_page()
            .returning(|_| Ok(ObjectPage { objects: vec![object("unrelated.txt")], next_continuation: None }));

        let result = run(&client, &args, &misc()).await;
        assert!(matches!(result, Err(CloudcheckError::CheckFailedError(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn walkthrough_times_out_when_deleted_object_lingers() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(dir.path());
        let mut client = MockObjectStoreClient::new();

        client.expect_list_buckets().returning(|| Ok(vec![]));
        client.expect_put_object().returning(|_, _| Ok(()));
        client
            .expect_list_objects_page()
            .returning(|_| Ok(ObjectPage { objects: vec![object("test.txt")], next_continuation: None }));
        client.expect_get_object().returning(|_| Ok(Bytes::from_static(SAMPLE_CONTENT.as_bytes())));
        client.expect_copy_object().returning(|_, _| Ok(()));
        client.expect_delete_object().returning(|_| Ok(()));
        client.expect_object_exists().returning(|_| Ok(true));

        let lingering = MiscellaneousArgs { poll_interval: 0, timeout: 0 };
        let result = run(&client, &args, &lingering).await;
        assert!(matches!(result, Err(CloudcheckError::CheckFailedError(_))));
    }
}
