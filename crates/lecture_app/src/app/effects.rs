use std::path::PathBuf;
use std::time::{Duration, Instant};

use lecture_core::{Effect, ExportTarget, Msg, RequestId, Submission};
use lecture_engine::{
    default_export_name, display_name, load_text_file, ClipboardSink, EngineError, EngineEvent,
    EngineHandle, ProcessRequest, TextExporter,
};
use lecture_logging::{lecture_debug, lecture_info, lecture_warn};

use super::config::AppConfig;

const NOTES_FILENAME: &str = "notes.txt";

/// Executes effects emitted by `update` and turns their outcomes back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    exporter: TextExporter,
    clipboard: Box<dyn ClipboardSink>,
    max_input_bytes: u64,
    response_wait: Duration,
}

impl EffectRunner {
    pub fn new(config: &AppConfig, clipboard: Box<dyn ClipboardSink>) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(config.processor_settings())?;
        Ok(Self::with_engine(engine, config, clipboard))
    }

    pub fn with_engine(
        engine: EngineHandle,
        config: &AppConfig,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        Self {
            engine,
            exporter: TextExporter::new(config.export_dir.clone()),
            clipboard,
            max_input_bytes: config.max_input_bytes,
            response_wait: config.response_wait(),
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        effects
            .into_iter()
            .map(|effect| self.run_one(effect))
            .collect()
    }

    fn run_one(&mut self, effect: Effect) -> Msg {
        match effect {
            Effect::Submit(submission) => self.submit(submission),
            Effect::ReadFile { path } => self.read_file(path),
            Effect::CopyToClipboard { content } => {
                let result = self
                    .clipboard
                    .set_text(&content)
                    .map_err(|err| err.to_string());
                if let Err(err) = &result {
                    lecture_warn!("Clipboard write failed: {}", err);
                }
                Msg::CopyFinished(result)
            }
            Effect::ExportText {
                target,
                content,
                filename,
            } => {
                let name = filename.unwrap_or_else(|| default_filename(target, &content));
                let result = self
                    .exporter
                    .export(&name, &content)
                    .map_err(|err| err.to_string());
                if let Err(err) = &result {
                    lecture_warn!("Export of {} failed: {}", target.label(), err);
                }
                Msg::ExportFinished { target, result }
            }
        }
    }

    fn submit(&mut self, submission: Submission) -> Msg {
        lecture_info!(
            "Submit request_id={} mode={} text_len={}",
            submission.request_id,
            submission.mode,
            submission.text.len()
        );
        let request_id = submission.request_id;
        self.engine.submit(
            request_id,
            ProcessRequest {
                text: submission.text,
                mode: submission.mode.as_str().to_string(),
            },
        );
        self.await_completion(request_id)
    }

    /// Blocks until the engine answers `request_id` or the deadline passes.
    fn await_completion(&self, request_id: RequestId) -> Msg {
        // A wait too long to represent as an Instant means "no deadline".
        let deadline = Instant::now().checked_add(self.response_wait);
        loop {
            let remaining = match deadline {
                Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                None => self.response_wait,
            };
            if remaining.is_zero() {
                return Msg::ResponseReceived {
                    request_id,
                    result: Err("no response before deadline".to_string()),
                };
            }
            match self.engine.recv_timeout(remaining) {
                Some(EngineEvent::Completed {
                    request_id: id,
                    result,
                }) if id == request_id => {
                    return Msg::ResponseReceived {
                        request_id,
                        result: result.map_err(|err| err.to_string()),
                    };
                }
                Some(other) => lecture_debug!("Ignoring engine event {:?}", other),
                None => {}
            }
        }
    }

    fn read_file(&self, path: PathBuf) -> Msg {
        match load_text_file(&path, self.max_input_bytes) {
            Ok(loaded) => Msg::FileLoaded {
                name: loaded.name,
                contents: loaded.contents,
            },
            Err(err) => {
                lecture_warn!("Rejected {:?}: {}", path, err);
                Msg::FileRejected {
                    name: display_name(&path),
                    reason: err.to_string(),
                }
            }
        }
    }
}

fn default_filename(target: ExportTarget, content: &str) -> String {
    match target {
        ExportTarget::Output { mode } => default_export_name(mode.as_str(), content),
        ExportTarget::Notes => NOTES_FILENAME.to_string(),
    }
}
