use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use lecture_engine::{
    EngineEvent, EngineHandle, FailureKind, ProcessError, ProcessRequest, TextProcessor,
};

/// Echoes the request back, failing for the text "fail".
#[derive(Default)]
struct EchoProcessor {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl TextProcessor for EchoProcessor {
    async fn process(&self, request: &ProcessRequest) -> Result<String, ProcessError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if request.text == "fail" {
            return Err(ProcessError {
                kind: FailureKind::HttpStatus(503),
                message: "503 Service Unavailable".to_string(),
            });
        }
        Ok(format!("{}:{}", request.mode, request.text))
    }

    async fn health(&self) -> Result<String, ProcessError> {
        Ok("Backend is running!".to_string())
    }
}

fn request(text: &str) -> ProcessRequest {
    ProcessRequest {
        text: text.to_string(),
        mode: "bullet".to_string(),
    }
}

#[test]
fn submit_delivers_completion_event() {
    lecture_logging::initialize_for_tests();
    let processor = Arc::new(EchoProcessor::default());
    let engine = EngineHandle::with_processor(processor.clone()).expect("engine");

    engine.submit(4, request("hello"));
    let event = engine.recv_timeout(Duration::from_secs(5)).expect("event");

    assert_eq!(
        event,
        EngineEvent::Completed {
            request_id: 4,
            result: Ok("bullet:hello".to_string()),
        }
    );
    assert_eq!(processor.calls.load(Ordering::SeqCst), 1);
    assert!(engine.try_recv().is_none());
}

#[test]
fn failures_are_reported_not_panicked() {
    lecture_logging::initialize_for_tests();
    let engine = EngineHandle::with_processor(Arc::new(EchoProcessor::default())).unwrap();

    engine.submit(1, request("fail"));
    match engine.recv_timeout(Duration::from_secs(5)) {
        Some(EngineEvent::Completed {
            request_id: 1,
            result: Err(err),
        }) => assert_eq!(err.kind, FailureKind::HttpStatus(503)),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn health_check_round_trips() {
    lecture_logging::initialize_for_tests();
    let engine = EngineHandle::with_processor(Arc::new(EchoProcessor::default())).unwrap();

    engine.health();
    assert_eq!(
        engine.recv_timeout(Duration::from_secs(5)),
        Some(EngineEvent::Health(Ok("Backend is running!".to_string())))
    );
}
