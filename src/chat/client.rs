use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client,
};
use std::time::Instant;
use tracing::debug;
use url::Url;

use crate::app::config::EndpointConfig;
use crate::chat::types::{AskReply, AskRequest};
use crate::error::{Error, Result};

/// Seam between the controller and whatever answers prompts.
///
/// `Err` means the call could not produce a parsable reply (transport
/// failure). A reply carrying an `error` field is still `Ok`.
#[async_trait]
pub trait AskBackend: Send + Sync {
    async fn ask(&self, request: AskRequest) -> Result<AskReply>;

    fn endpoint(&self) -> &str;
}

/// Posts prompts to the course backend's ask endpoint.
///
/// The client is built without a timeout: a call waits for the endpoint's
/// reply or a transport-level failure.
#[derive(Clone)]
pub struct HttpAskClient {
    client: Client,
    url: Url,
}

impl HttpAskClient {
    pub fn new(base_url: &str, ask_path: &str) -> Result<Self> {
        let url = Url::parse(base_url)?.join(ask_path)?;

        let client = Client::builder()
            .default_headers(Self::create_headers())
            .build()
            .map_err(|e| Error::platform(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, url })
    }

    pub fn from_config(config: &EndpointConfig) -> Result<Self> {
        Self::new(&config.base_url, &config.ask_path)
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}

#[async_trait]
impl AskBackend for HttpAskClient {
    async fn ask(&self, request: AskRequest) -> Result<AskReply> {
        debug!(url = %self.url, chars = request.prompt.len(), "Sending prompt");
        let start_time = Instant::now();

        let response = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        // The body decides the outcome, not the status line.
        let body = response.text().await?;
        debug!(%status, elapsed = ?start_time.elapsed(), "Ask endpoint replied");

        let reply: AskReply = serde_json::from_str(&body)?;
        Ok(reply)
    }

    fn endpoint(&self) -> &str {
        self.url.as_str()
    }
}
