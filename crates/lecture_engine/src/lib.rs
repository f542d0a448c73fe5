//! Lecture simplifier engine: IO pipeline and effect execution.
mod clipboard;
mod decode;
mod engine;
mod export;
mod filename;
mod load;
mod processor;
mod types;

pub use clipboard::{ClipboardError, ClipboardSink, MemoryClipboard, SystemClipboard};
pub use decode::{decode_text, DecodeError, DecodedText};
pub use engine::{EngineError, EngineHandle};
pub use export::{ExportError, TextExporter};
pub use filename::{default_export_name, sanitize_filename};
pub use load::{display_name, load_text_file, LoadError, LoadedText, DEFAULT_MAX_INPUT_BYTES};
pub use processor::{ProcessorSettings, ReqwestProcessor, TextProcessor, DEFAULT_BASE_URL};
pub use types::{
    EngineEvent, FailureKind, HealthResponse, ProcessError, ProcessRequest, ProcessResponse,
    RequestId,
};
