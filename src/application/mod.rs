// Application module: Use cases and orchestration

pub mod controller;
pub mod display;
pub mod headers;

pub use controller::{SolveOutcome, SolveRequestController};
pub use display::SolutionDisplay;
