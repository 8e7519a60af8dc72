use appcat::{ArtifactFetcher, FetchError, MetadataError, TrackedFile};
use appcat_github::GitHubArtifactClient;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tracked() -> TrackedFile {
    TrackedFile::new("acme", "data", "sql.db")
}

fn client_for(server: &MockServer) -> GitHubArtifactClient {
    GitHubArtifactClient::new(None, Some(server.uri()))
}

#[tokio::test]
async fn latest_revision_reads_first_commit_sha() {
    let server = MockServer::start().await;

    let body = r#"[
        {"sha":"abc123","commit":{"message":"update catalog"}},
        {"sha":"000aaa","commit":{"message":"older change"}}
    ]"#;

    Mock::given(method("GET"))
        .and(path("/repos/acme/data/commits"))
        .and(query_param("path", "sql.db"))
        .and(header("User-Agent", "appcat"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let revision = client.latest_revision(&tracked()).await.unwrap();

    assert_eq!(revision, "abc123");
}

#[tokio::test]
async fn payload_requests_raw_media_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/data/contents/sql.db"))
        .and(header("Accept", "application/vnd.github.v3.raw"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"DEADBEEF".to_vec()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let bytes = client.payload(&tracked()).await.unwrap();

    assert_eq!(bytes, b"DEADBEEF");
}

#[tokio::test]
async fn bearer_token_is_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/data/contents/sql.db"))
        .and(header("Authorization", "Bearer sekrit"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ok".to_vec()))
        .mount(&server)
        .await;

    let client = GitHubArtifactClient::new(Some("sekrit".to_owned()), Some(server.uri()));
    let bytes = client.payload(&tracked()).await.unwrap();

    assert_eq!(bytes, b"ok");
}

#[tokio::test]
async fn non_200_surfaces_numeric_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/data/contents/sql.db"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.payload(&tracked()).await;

    assert_eq!(result, Err(FetchError::Status { status: 500 }));
}

#[tokio::test]
async fn rate_limit_is_a_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/data/commits"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_string(r#"{"message":"API rate limit exceeded"}"#),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.latest_revision(&tracked()).await;

    assert_eq!(result, Err(FetchError::Status { status: 403 }));
}

#[tokio::test]
async fn malformed_metadata_shapes_fail_distinctly() {
    let cases = [
        ("[]", MetadataError::Empty),
        ("{}", MetadataError::NotAnArray),
        (r#"[{"notsha":"x"}]"#, MetadataError::MissingSha),
    ];

    for (body, expected) in cases {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/acme/data/commits"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.latest_revision(&tracked()).await;

        assert_eq!(result, Err(FetchError::Metadata(expected)));
    }
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    // Nothing listens on port 1.
    let client = GitHubArtifactClient::new(None, Some("http://127.0.0.1:1".to_owned()));
    let result = client.latest_revision(&tracked()).await;

    assert!(matches!(result, Err(FetchError::Network(_))));
}
