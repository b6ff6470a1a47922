// Domain service interface for reaching the solver backend
// Defines the contract any transport implementation must follow (Dependency Inversion Principle)

use std::time::Duration;

use async_trait::async_trait;

use super::models::SolveRequest;

/// Error types for the gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("solve request timed out after {0:?}")]
    TimedOut(Duration),

    #[error("transport failure: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, GatewayError>;

/// What the backend delivered for a solve request.
///
/// The controller treats any delivered completion the same way regardless of
/// status; the status and body are carried for callers that want to show the
/// solver's textual output.
#[derive(Debug, Clone)]
pub struct SolveCompletion {
    pub status: u16,
    pub body: String,
}

impl SolveCompletion {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport contract for solve requests.
///
/// Implementations dispatch exactly one request per call and resolve when the
/// backend answers (or the transport gives up). Swapping implementations must
/// not change controller behavior, which is what the integration tests rely on.
#[async_trait]
pub trait SolverGateway: Send + Sync {
    /// Submit one solve request and wait for its completion.
    async fn compute(&self, request: &SolveRequest) -> Result<SolveCompletion>;

    /// Name of this transport, for diagnostics.
    fn name(&self) -> &str;
}
