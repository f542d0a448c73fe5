use std::time::Duration;

use futures_util::StreamExt;
use lecture_logging::{lecture_debug, lecture_info};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

use crate::{FailureKind, HealthResponse, ProcessError, ProcessRequest, ProcessResponse};

pub const DEFAULT_BASE_URL: &str = "https://lecturesummarizer.onrender.com";
const PROCESS_PATH: &str = "process-text";

#[derive(Debug, Clone)]
pub struct ProcessorSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_response_bytes: u64,
}

impl Default for ProcessorSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
            max_response_bytes: 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait TextProcessor: Send + Sync {
    /// Sends one request and returns the `output` field of the answer.
    async fn process(&self, request: &ProcessRequest) -> Result<String, ProcessError>;

    /// Asks the service root for its status message.
    async fn health(&self) -> Result<String, ProcessError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestProcessor {
    settings: ProcessorSettings,
    client: reqwest::Client,
    root_url: Url,
    process_url: Url,
}

impl ReqwestProcessor {
    pub fn new(settings: ProcessorSettings) -> Result<Self, ProcessError> {
        let root_url = parse_base_url(&settings.base_url)?;
        let process_url = root_url
            .join(PROCESS_PATH)
            .map_err(|err| ProcessError::new(FailureKind::InvalidEndpoint, err.to_string()))?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ProcessError::new(FailureKind::Network, err.to_string()))?;

        lecture_info!("Processing endpoint {}", process_url);
        Ok(Self {
            settings,
            client,
            root_url,
            process_url,
        })
    }

    pub fn process_url(&self) -> &Url {
        &self.process_url
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, ProcessError> {
        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(ProcessError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(ProcessError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl TextProcessor for ReqwestProcessor {
    async fn process(&self, request: &ProcessRequest) -> Result<String, ProcessError> {
        let body = serde_json::to_vec(request)
            .map_err(|err| ProcessError::new(FailureKind::InvalidRequest, err.to_string()))?;

        let response = self
            .client
            .post(self.process_url.as_str())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProcessError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = self.read_body(response).await?;
        lecture_debug!("Received {} bytes for mode {}", bytes.len(), request.mode);
        let parsed: ProcessResponse = serde_json::from_slice(&bytes)
            .map_err(|err| ProcessError::new(FailureKind::MalformedResponse, err.to_string()))?;
        Ok(parsed.output)
    }

    async fn health(&self) -> Result<String, ProcessError> {
        let response = self
            .client
            .get(self.root_url.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProcessError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = self.read_body(response).await?;
        let parsed: HealthResponse = serde_json::from_slice(&bytes)
            .map_err(|err| ProcessError::new(FailureKind::MalformedResponse, err.to_string()))?;
        Ok(parsed.message)
    }
}

/// Parses the service base URL, making sure its path ends in `/` so relative
/// endpoint paths append rather than replace the last segment.
fn parse_base_url(raw: &str) -> Result<Url, ProcessError> {
    let mut url = Url::parse(raw.trim())
        .map_err(|err| ProcessError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ProcessError::new(
            FailureKind::InvalidEndpoint,
            format!("unsupported scheme {}", url.scheme()),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn map_reqwest_error(err: reqwest::Error) -> ProcessError {
    if err.is_timeout() {
        return ProcessError::new(FailureKind::Timeout, err.to_string());
    }
    ProcessError::new(FailureKind::Network, err.to_string())
}
