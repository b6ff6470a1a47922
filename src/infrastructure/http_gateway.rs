// Infrastructure: HTTP transport against the solver backend
// Single Responsibility: Turn a SolveRequest into the backend's wire protocol

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::headers::{self, DEFAULT_USER_ID};
use crate::domain::models::SolveRequest;
use crate::domain::solver_gateway::{GatewayError, Result, SolveCompletion, SolverGateway};
use crate::domain::value_objects::Endpoint;

/// Configuration for the HTTP client.
///
/// The timeout is optional but on by default: the backend can legitimately
/// chew on a request for the full solve time limit, so the transport allows
/// for that plus slack rather than leaving the UI locked forever.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: Endpoint,
    pub user_id: String,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            user_id: DEFAULT_USER_ID.to_string(),
            timeout: Some(Duration::from_secs(1800)),
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// reqwest-backed implementation of the gateway contract.
pub struct HttpSolverGateway {
    client: Client,
    config: ClientConfig,
}

impl HttpSolverGateway {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Fetch one of the plot renderings as raw bytes. The browser UI loads
    /// these URLs straight into an image element; a non-browser consumer gets
    /// the payload here instead.
    pub async fn fetch_plot(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SolverGateway for HttpSolverGateway {
    async fn compute(&self, request: &SolveRequest) -> Result<SolveCompletion> {
        let url = self.config.endpoint.compute_url();

        // No body; the five headers are the whole payload.
        let mut builder = self.client.post(&url);
        for (name, value) in headers::request_headers(request) {
            builder = builder.header(name, value);
        }
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }

        tracing::debug!(%url, "sending solve request");
        let response = builder.send().await.map_err(|err| {
            if err.is_timeout() {
                GatewayError::TimedOut(self.config.timeout.unwrap_or_default())
            } else {
                map_reqwest_error(err)
            }
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Ok(SolveCompletion { status, body })
    }

    fn name(&self) -> &str {
        "http"
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}
