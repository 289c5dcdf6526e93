use std::time::Duration;

use catalog_core::FetchResult;
use catalog_engine::{DataSource, GenreRecord, MovieRecord, ReqwestDataSource, SourceSettings};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MOVIES_JSON: &str = r#"[
  {
    "id": 11,
    "genres": ["Action", "Adventure"],
    "release_date": "1977-05-25",
    "title": "Star Wars",
    "tagline": "A long time ago...",
    "overview": "Princess Leia is captured.",
    "url": "https://example.com/movies/11"
  }
]"#;

fn source_for(server: &MockServer) -> ReqwestDataSource {
    ReqwestDataSource::new(SourceSettings::new(server.uri())).expect("client builds")
}

fn failure_message<T: std::fmt::Debug>(result: FetchResult<T>) -> String {
    match result {
        FetchResult::Failure {
            message: Some(message),
        } => message,
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn movies_are_decoded_with_paging_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .and(query_param("limit", "10"))
        .and(query_param("from", "20"))
        .and(query_param("genre", "Action"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(MOVIES_JSON, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = source_for(&server)
        .fetch_movies(10, 20, Some("Action"))
        .await;

    assert_eq!(
        result,
        FetchResult::Success {
            items: vec![MovieRecord {
                id: 11,
                title: "Star Wars".to_string(),
                genres: vec!["Action".to_string(), "Adventure".to_string()],
                overview: "Princess Leia is captured.".to_string(),
                release_date: "1977-05-25".to_string(),
                tagline: "A long time ago...".to_string(),
                url: "https://example.com/movies/11".to_string(),
            }]
        }
    );
}

#[tokio::test]
async fn genre_param_is_omitted_without_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .and(query_param_is_missing("genre"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let result = source_for(&server).fetch_movies(10, 0, None).await;
    assert_eq!(result, FetchResult::Success { items: Vec::new() });
}

#[tokio::test]
async fn genres_are_decoded_from_pairs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/genres"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"[["Drama", 12], ["Comedy", 3]]"#, "application/json"),
        )
        .mount(&server)
        .await;

    let result = source_for(&server).fetch_genres().await;
    assert_eq!(
        result,
        FetchResult::Success {
            items: vec![
                GenreRecord("Drama".to_string(), 12),
                GenreRecord("Comedy".to_string(), 3)
            ]
        }
    );
}

#[tokio::test]
async fn quoted_genre_counts_are_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/genres"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"[["Drama", "12"], ["Comedy", 3]]"#, "application/json"),
        )
        .mount(&server)
        .await;

    let result = source_for(&server).fetch_genres().await;
    assert_eq!(
        result,
        FetchResult::Success {
            items: vec![
                GenreRecord("Drama".to_string(), 12),
                GenreRecord("Comedy".to_string(), 3)
            ]
        }
    );
}

#[tokio::test]
async fn one_source_serves_repeated_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/genres"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"[["Drama", 1]]"#, "application/json"),
        )
        .expect(2)
        .mount(&server)
        .await;

    let source = source_for(&server);
    for _ in 0..2 {
        assert_eq!(
            source.fetch_genres().await,
            FetchResult::Success {
                items: vec![GenreRecord("Drama".to_string(), 1)]
            }
        );
    }
}

#[tokio::test]
async fn http_error_becomes_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/genres"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let message = failure_message(source_for(&server).fetch_genres().await);
    assert!(message.contains("503"), "message was {message}");
}

#[tokio::test]
async fn empty_and_null_bodies_become_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/genres"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("null", "application/json"))
        .mount(&server)
        .await;

    let source = source_for(&server);
    let genres = failure_message(source.fetch_genres().await);
    assert!(genres.contains("empty body"), "message was {genres}");
    let movies = failure_message(source.fetch_movies(10, 0, None).await);
    assert!(movies.contains("empty body"), "message was {movies}");
}

#[tokio::test]
async fn malformed_json_becomes_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{", "application/json"))
        .mount(&server)
        .await;

    let message = failure_message(source_for(&server).fetch_movies(10, 0, None).await);
    assert!(message.contains("invalid json"), "message was {message}");
}

#[tokio::test]
async fn invalid_base_url_becomes_failure() {
    let source = ReqwestDataSource::new(SourceSettings::new("not a url")).unwrap();
    let message = failure_message(source.fetch_genres().await);
    assert!(message.contains("invalid url"), "message was {message}");
}

#[tokio::test]
async fn request_timeout_is_honoured_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/genres"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw("[]", "application/json"),
        )
        .mount(&server)
        .await;

    let settings = SourceSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..SourceSettings::new(server.uri())
    };
    let source = ReqwestDataSource::new(settings).unwrap();
    let message = failure_message(source.fetch_genres().await);
    assert!(message.contains("timeout"), "message was {message}");
}
