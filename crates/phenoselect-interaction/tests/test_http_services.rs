use phenoselect_core::ServiceError;
use phenoselect_core::config::EndpointConfig;
use phenoselect_core::service::{LoggingService, ScoringService};
use phenoselect_core::session::{BodySystem, SessionState, Term};
use phenoselect_interaction::{HttpLoggingService, HttpScoringService};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn hypertelorism() -> Term {
    Term::new("HP:0000316", "Hypertelorism", "Widely spaced eyes")
}

fn seizure() -> Term {
    Term::new("HP:0001250", "Seizure", "Seizures")
}

fn scoring_client(server: &MockServer) -> HttpScoringService {
    HttpScoringService::new(format!("{}/score", server.uri()), Duration::from_secs(5))
}

#[tokio::test]
async fn test_score_posts_terms_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/score"))
        .and(body_json(json!([
            {"id": "HP:0001250", "label": "Seizure", "symptom": "Seizures"},
            {"id": "HP:0000316", "label": "Hypertelorism", "symptom": "Widely spaced eyes"}
        ])))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"scaled_score": 1.42, "raw_score": 7})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = scoring_client(&server)
        .score(&[seizure(), hypertelorism()])
        .await
        .expect("score should succeed");

    assert_eq!(response.scaled_score, 1.42);
}

#[tokio::test]
async fn test_score_error_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/score"))
        .respond_with(ResponseTemplate::new(503).set_body_string("model warming up"))
        .expect(1)
        .mount(&server)
        .await;

    let err = scoring_client(&server)
        .score(&[seizure()])
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ServiceError::Status {
            status: 503,
            body: "model warming up".to_string()
        }
    );
}

#[tokio::test]
async fn test_score_malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/score"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"score": "high"})))
        .mount(&server)
        .await;

    let err = scoring_client(&server)
        .score(&[seizure()])
        .await
        .unwrap_err();

    match err {
        ServiceError::Decode(message) => assert!(message.contains("scaled_score"), "{message}"),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_score_timeout_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/score"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"scaled_score": 1.0}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = HttpScoringService::new(format!("{}/score", server.uri()), Duration::from_millis(50));
    let err = client.score(&[seizure()]).await.unwrap_err();

    assert_eq!(err, ServiceError::Timeout { timeout_ms: 50 });
}

#[tokio::test]
async fn test_score_unreachable_is_transport_error() {
    let client = HttpScoringService::from_config(&EndpointConfig::new("http://127.0.0.1:1/score"));

    let err = client.score(&[seizure()]).await.unwrap_err();

    // The socket-level cause survives, not only reqwest's top-level message
    match err {
        ServiceError::Transport(message) => {
            assert!(message.contains("127.0.0.1:1"), "{message}");
            assert!(message.to_lowercase().contains("refused"), "{message}");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_save_session_posts_record() {
    let server = MockServer::start().await;

    let mut state = SessionState::with_session_id("00000000-0000-0000-0000-000000000000");
    state.toggle_system(BodySystem::new("HP:0000478", "Eye"));
    state.add_term(hypertelorism(), false);
    state.set_quality_score(0.42);

    Mock::given(method("POST"))
        .and(path("/log"))
        .and(body_json(json!({
            "session_id": "00000000-0000-0000-0000-000000000000",
            "selected_systems": ["HP:0000478"],
            "selected_terms": [{"id": "HP:0000316", "label": "Hypertelorism", "symptom": "Widely spaced eyes"}],
            "constrained_terms": [],
            "unconstrained_terms": [{"id": "HP:0000316", "label": "Hypertelorism", "symptom": "Widely spaced eyes"}],
            "found_all": null,
            "quality_score": 0.42
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpLoggingService::new(format!("{}/log", server.uri()), Duration::from_secs(5));
    client
        .save_session(&state.to_record())
        .await
        .expect("save should succeed");
}

#[tokio::test]
async fn test_save_session_failure_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/log"))
        .respond_with(ResponseTemplate::new(500).set_body_string("disk full"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpLoggingService::new(format!("{}/log", server.uri()), Duration::from_secs(5));
    let err = client
        .save_session(&SessionState::new().to_record())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ServiceError::Status {
            status: 500,
            body: "disk full".to_string()
        }
    );
}
