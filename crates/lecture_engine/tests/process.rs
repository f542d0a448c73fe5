use std::time::Duration;

use lecture_engine::{
    FailureKind, ProcessRequest, ProcessorSettings, ReqwestProcessor, TextProcessor,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn processor(server: &MockServer) -> ReqwestProcessor {
    ReqwestProcessor::new(ProcessorSettings {
        base_url: server.uri(),
        ..ProcessorSettings::default()
    })
    .expect("valid base url")
}

fn request(text: &str, mode: &str) -> ProcessRequest {
    ProcessRequest {
        text: text.to_string(),
        mode: mode.to_string(),
    }
}

#[tokio::test]
async fn posts_json_and_returns_output_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process-text"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "text": "The mitochondria produces energy.",
            "mode": "simplify",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "output": "  Mitochondria make energy for cells.\n",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = processor(&server)
        .process(&request("The mitochondria produces energy.", "simplify"))
        .await
        .expect("process ok");

    assert_eq!(output, "  Mitochondria make energy for cells.\n");
}

#[tokio::test]
async fn non_success_status_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process-text"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "output": "should not be used",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = processor(&server)
        .process(&request("text", "bullet"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn unexpected_shape_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process-text"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "detail": "oops" })),
        )
        .mount(&server)
        .await;

    let err = processor(&server)
        .process(&request("text", "define"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process-text"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!({ "output": "late" })),
        )
        .mount(&server)
        .await;

    let processor = ReqwestProcessor::new(ProcessorSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ProcessorSettings::default()
    })
    .unwrap();

    let err = processor
        .process(&request("text", "summarize"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process-text"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string(r#"{"output": "0123456789"}"#),
        )
        .mount(&server)
        .await;

    let processor = ReqwestProcessor::new(ProcessorSettings {
        base_url: server.uri(),
        max_response_bytes: 10,
        ..ProcessorSettings::default()
    })
    .unwrap();

    let err = processor
        .process(&request("text", "complexify"))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, FailureKind::TooLarge { max_bytes: 10, .. }));
}

#[tokio::test]
async fn unreachable_service_is_a_network_failure() {
    let server = MockServer::start().await;
    let base_url = server.uri();
    drop(server);

    let processor = ReqwestProcessor::new(ProcessorSettings {
        base_url,
        connect_timeout: Duration::from_millis(200),
        request_timeout: Duration::from_millis(500),
        ..ProcessorSettings::default()
    })
    .unwrap();

    let err = processor
        .process(&request("text", "question"))
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::Network | FailureKind::Timeout
    ));
}

#[tokio::test]
async fn health_reads_root_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Backend is running!",
        })))
        .mount(&server)
        .await;

    let message = processor(&server).health().await.expect("health ok");
    assert_eq!(message, "Backend is running!");
}
