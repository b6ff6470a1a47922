// Domain layer: Business logic and rules
pub mod domain;

// Application layer: Use cases and service orchestration
pub mod application;

// Infrastructure layer: External concerns (HTTP transport, console surface)
#[cfg(feature = "http")]
pub mod infrastructure;

// Re-export commonly used types
pub use domain::{
    Endpoint, GatewayError, InteractionState, InvalidEndpoint, SolveCompletion, SolveInput,
    SolveMethod, SolveParameters, SolveRequest, SolverGateway, UnknownMethod, ValidationError,
};

pub use application::{SolutionDisplay, SolveOutcome, SolveRequestController};

#[cfg(feature = "http")]
pub use infrastructure::{ClientConfig, ConsoleDisplay, HttpSolverGateway};
