use crate::checks;
use crate::core::client::stream::kinesis::AWSKinesis;
use crate::core::traits::resource::Resource;
use crate::tests::common::{sandbox_misc, sandbox_provider};
use crate::types::params::StreamArgs;
use rstest::rstest;

/// Runs the full stream walkthrough against a sandboxed endpoint.
#[rstest]
#[tokio::test]
#[ignore = "requires a sandboxed AWS endpoint (set AWS_ENDPOINT_URL)"]
async fn stream_round_trip_against_sandbox() {
    let provider = sandbox_provider().await;
    let misc = sandbox_misc();
    let args = StreamArgs { stream_name: "cloudcheck-test-stream".to_string(), shard_count: 1 };

    let client = AWSKinesis::create_setup(provider, &args).await.unwrap();
    client.setup().await.unwrap();
    assert!(client.poll_ready(misc.poll_interval, misc.timeout).await);

    checks::stream::run(&client).await.unwrap();

    client.teardown().await.unwrap();
}
