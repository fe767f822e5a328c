use crate::models::SummaryResponse;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub const SUMMARY_PATH: &str = "/api/summary";

/// Why a summary could not be obtained. All variants surface to the user as
/// the same notification; the variant only shapes the diagnostic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SummaryFetchError {
    #[error("summary request failed: {0}")]
    Transport(String),

    #[error("summary endpoint returned status {0}")]
    Status(u16),

    #[error("invalid summary body: {0}")]
    Decode(String),
}

#[async_trait]
pub trait SummarySource: Send + Sync {
    async fn fetch_summary(&self) -> Result<SummaryResponse, SummaryFetchError>;
}

pub fn decode_summary(body: &[u8]) -> Result<SummaryResponse, SummaryFetchError> {
    let summary: SummaryResponse =
        serde_json::from_slice(body).map_err(|err| SummaryFetchError::Decode(err.to_string()))?;
    if !summary.is_finite() {
        return Err(SummaryFetchError::Decode("totals must be finite".to_string()));
    }
    Ok(summary)
}

/// Fetches `GET {base_url}/api/summary`. No timeout unless one is set.
#[derive(Debug, Clone)]
pub struct HttpSummarySource {
    client: reqwest::Client,
    url: String,
    timeout: Option<Duration>,
}

impl HttpSummarySource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}{SUMMARY_PATH}", base_url.trim_end_matches('/')),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SummarySource for HttpSummarySource {
    async fn fetch_summary(&self) -> Result<SummaryResponse, SummaryFetchError> {
        let mut request = self.client.get(&self.url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|err| SummaryFetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SummaryFetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| SummaryFetchError::Transport(err.to_string()))?;
        decode_summary(&body)
    }
}
