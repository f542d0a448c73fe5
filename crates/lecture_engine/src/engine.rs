use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use lecture_logging::{lecture_debug, lecture_warn};

use crate::processor::{ProcessorSettings, ReqwestProcessor, TextProcessor};
use crate::{EngineEvent, ProcessError, ProcessRequest, RequestId};

enum EngineCommand {
    Submit {
        request_id: RequestId,
        request: ProcessRequest,
    },
    Health,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Processor(#[from] ProcessError),
}

/// Owns the network thread. Commands go in over one channel, events come back
/// over another; the caller never blocks on IO unless it asks to.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ProcessorSettings) -> Result<Self, EngineError> {
        let processor = ReqwestProcessor::new(settings)?;
        Self::with_processor(Arc::new(processor))
    }

    pub fn with_processor(processor: Arc<dyn TextProcessor>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let processor = processor.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(processor.as_ref(), command, event_tx).await;
                });
            }
            lecture_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, request_id: RequestId, request: ProcessRequest) {
        if self
            .cmd_tx
            .send(EngineCommand::Submit {
                request_id,
                request,
            })
            .is_err()
        {
            lecture_warn!("Engine thread is gone; dropping request {}", request_id);
        }
    }

    pub fn health(&self) {
        if self.cmd_tx.send(EngineCommand::Health).is_err() {
            lecture_warn!("Engine thread is gone; dropping health check");
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Waits up to `timeout` for the next event.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    processor: &dyn TextProcessor,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Submit {
            request_id,
            request,
        } => {
            let result = processor.process(&request).await;
            EngineEvent::Completed { request_id, result }
        }
        EngineCommand::Health => EngineEvent::Health(processor.health().await),
    };
    let _ = event_tx.send(event);
}
