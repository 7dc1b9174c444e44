use crate::error::BackendError;
use reqwest::Client;
use std::time::Duration;

/// What a transport hands back: the status code plus raw body text.
/// Interpretation (success vs. failure, JSON parsing) stays with the caller.
#[derive(Debug, Clone)]
pub struct TransportReply {
    pub status: u16,
    pub body: String,
}

impl TransportReply {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// External collaborator that POSTs JSON and returns a status plus body.
///
/// Network faults (connection refused, timeout, DNS) surface as
/// [`BackendError::Network`]; an application-level non-200 reply is a
/// normal `TransportReply` for the caller to classify. Timeouts are the
/// transport's concern; this crate adds no retry or cancellation.
#[async_trait::async_trait]
pub trait ChatTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<TransportReply, BackendError>;
}

/// Production transport backed by a pooled reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::configuration(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        // Client::builder only fails with a broken TLS backend; fall back to
        // the stock client rather than panic.
        Self::new(Duration::from_secs(120)).unwrap_or(Self {
            client: Client::new(),
        })
    }
}

#[async_trait::async_trait]
impl ChatTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<TransportReply, BackendError> {
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportReply { status, body })
    }
}
