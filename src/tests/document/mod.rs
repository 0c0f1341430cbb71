use crate::checks;
use crate::core::client::document::dynamodb::AWSDynamo;
use crate::core::client::document::DocumentClient;
use crate::core::traits::resource::Resource;
use crate::tests::common::{sandbox_misc, sandbox_provider};
use crate::types::movie::{Movie, MovieInfo};
use crate::types::params::DocumentArgs;
use rstest::rstest;

/// Runs the full document walkthrough against a sandboxed endpoint, then
/// checks a put / get round trip by hand.
#[rstest]
#[tokio::test]
#[ignore = "requires a sandboxed AWS endpoint (set AWS_ENDPOINT_URL)"]
async fn document_round_trip_against_sandbox() {
    let provider = sandbox_provider().await;
    let misc = sandbox_misc();
    let args = DocumentArgs { table_name: "cloudcheck-test-movies".to_string() };

    let client = AWSDynamo::create_setup(provider, &args).await.unwrap();
    client.setup().await.unwrap();
    assert!(client.poll_ready(misc.poll_interval, misc.timeout).await);

    checks::document::run(&client).await.unwrap();

    let movie = Movie {
        year: 1999,
        title: "Sandbox Feature".to_string(),
        info: MovieInfo { plot: "A test record.".to_string(), rating: 4.5 },
    };
    client.put_movie(&movie).await.unwrap();
    let fetched = client.get_movie(movie.year, &movie.title).await.unwrap();
    assert_eq!(fetched, Some(movie.clone()));

    client.delete_movie(movie.year, &movie.title).await.unwrap();
    assert_eq!(client.get_movie(movie.year, &movie.title).await.unwrap(), None);

    client.teardown().await.unwrap();
}
