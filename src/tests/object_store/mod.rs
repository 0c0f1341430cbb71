use crate::checks;
use crate::core::client::object_store::s3::AWSS3;
use crate::core::client::object_store::ObjectStoreClient;
use crate::core::traits::resource::Resource;
use crate::tests::common::{sandbox_misc, sandbox_provider};
use crate::types::params::ObjectStoreArgs;
use bytes::Bytes;
use rstest::rstest;
use serde_json::json;

/// Runs the full object store walkthrough against a sandboxed endpoint.
#[rstest]
#[tokio::test]
#[ignore = "requires a sandboxed AWS endpoint (set AWS_ENDPOINT_URL)"]
async fn object_round_trip_against_sandbox() {
    let provider = sandbox_provider().await;
    let misc = sandbox_misc();

    let dir = tempfile::tempdir().unwrap();
    let args = ObjectStoreArgs {
        bucket_name: "cloudcheck-test-bucket".to_string(),
        key: "test.txt".to_string(),
        upload_path: dir.path().join("test.txt"),
        download_path: dir.path().join("download.txt"),
    };

    let client = AWSS3::create_setup(provider, &args).await.unwrap();
    client.setup().await.unwrap();
    assert!(client.poll_ready(misc.poll_interval, misc.timeout).await);

    checks::object_store::run(&client, &args, &misc).await.unwrap();

    // JSON payloads survive a put / get round trip byte for byte.
    let payload = json!({ "body": "hello world. hello world." });
    let json_bytes = serde_json::to_vec(&payload).unwrap();
    let key = "payload.json";

    client.put_object(key, Bytes::from(json_bytes)).await.unwrap();
    let received = client.get_object(key).await.unwrap();
    let received_json: serde_json::Value = serde_json::from_slice(&received).unwrap();
    assert_eq!(received_json, payload);
    client.delete_object(key).await.unwrap();

    client.teardown().await.unwrap();
    assert!(client.poll_absent(misc.poll_interval, misc.timeout).await);
}
