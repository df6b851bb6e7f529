//! Integration tests for the archive client, backed by a local mock server.

use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use datapad_archive::{ArchiveClient, ArchiveError};

fn client_for(server: &MockServer) -> ArchiveClient {
    let base = Url::parse(&server.uri()).expect("mock server URI is a valid URL");
    ArchiveClient::new(base).expect("client builds")
}

fn record_body(name: &str, height: &str, mass: &str) -> serde_json::Value {
    // The live archive sends many more fields than the client keeps.
    serde_json::json!({
        "name": name,
        "height": height,
        "mass": mass,
        "hair_color": "n/a",
        "birth_year": "unknown",
        "films": ["https://archive.test/films/1/"],
    })
}

#[tokio::test]
async fn fetch_decodes_the_three_record_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_body(
            "Luke Skywalker",
            "172",
            "77",
        )))
        .mount(&server)
        .await;

    let record = client_for(&server)
        .fetch_person(1)
        .await
        .expect("fetch succeeds");

    assert_eq!(record.name, "Luke Skywalker");
    assert_eq!(record.height, "172");
    assert_eq!(record.mass, "77");
}

#[tokio::test]
async fn each_id_maps_to_its_own_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people/11/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_body(
            "Anakin Skywalker",
            "188",
            "84",
        )))
        .mount(&server)
        .await;

    let record = client_for(&server)
        .fetch_person(11)
        .await
        .expect("fetch succeeds");
    assert_eq!(record.name, "Anakin Skywalker");
}

#[tokio::test]
async fn missing_record_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people/9000/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_person(9000)
        .await
        .expect_err("fetch fails");

    match err {
        ArchiveError::Status { id, status } => {
            assert_eq!(id, 9000);
            assert_eq!(status.as_u16(), 404);
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_failure_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people/2/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_person(2)
        .await
        .expect_err("fetch fails");
    assert!(matches!(err, ArchiveError::Status { status, .. } if status.as_u16() == 503));
}

#[tokio::test]
async fn malformed_payload_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people/3/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string("not json at all"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_person(3)
        .await
        .expect_err("fetch fails");
    assert!(matches!(err, ArchiveError::Decode { id: 3, .. }));
}

#[tokio::test]
async fn payload_missing_a_field_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people/5/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "name": "Leia Organa", "height": "150" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_person(5)
        .await
        .expect_err("fetch fails");
    assert!(matches!(err, ArchiveError::Decode { id: 5, .. }));
}

#[tokio::test]
async fn calls_are_independent_and_safe_to_reissue() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people/4/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record_body(
            "Darth Vader",
            "202",
            "136",
        )))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.fetch_person(4).await.expect("first fetch");
    let second = client.fetch_person(4).await.expect("second fetch");
    assert_eq!(first, second);
}
