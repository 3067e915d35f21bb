use async_trait::async_trait;
use fenbook_domain::GenerateRequest;
use reqwest::Client;
use url::Url;

use crate::error::ClientError;

const GENERATE_PATH: &str = "api/generate-pdf/";

/// Seam between the submission controller and the rendering service, so
/// submission behavior can be tested without a network.
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    /// POST the payload and return the rendered document bytes.
    async fn render(&self, payload: &GenerateRequest) -> Result<Vec<u8>, ClientError>;
}

#[derive(Clone, Debug)]
pub struct RenderClient {
    client: Client,
    base: Url,
}

impl RenderClient {
    pub fn new(site: &str) -> Result<Self, ClientError> {
        let base = Url::parse(site)?.join("/")?;
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .build()
            .map_err(|e| ClientError::Unexpected(e.to_string()))?;
        Ok(Self { client, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("fenbook/", env!("CARGO_PKG_VERSION"))
    }

    fn endpoint(&self) -> Result<Url, ClientError> {
        self.base.join(GENERATE_PATH).map_err(ClientError::Url)
    }
}

#[async_trait]
impl DocumentRenderer for RenderClient {
    async fn render(&self, payload: &GenerateRequest) -> Result<Vec<u8>, ClientError> {
        let url = self.endpoint()?;
        tracing::debug!(%url, diagrams = payload.fens.len(), "submitting generate request");

        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(classify_send_error)?;

        if status.is_success() {
            return Ok(bytes.to_vec());
        }

        // Failure bodies are JSON: surface the `error` field when present,
        // otherwise the whole body as-is.
        let message = match serde_json::from_slice::<serde_json::Value>(&bytes) {
            Ok(body) => body
                .get("error")
                .and_then(|e| e.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| body.to_string()),
            Err(_) => String::from_utf8_lossy(&bytes).into_owned(),
        };
        tracing::warn!(%status, %message, "rendering service returned an error");
        Err(ClientError::Server(message))
    }
}

fn classify_send_error(err: reqwest::Error) -> ClientError {
    if err.is_builder() {
        ClientError::Unexpected(err.to_string())
    } else {
        ClientError::Transport(err)
    }
}
