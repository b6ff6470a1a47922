// Infrastructure module: External concerns (HTTP transport, console surface)

pub mod console_display;
pub mod http_gateway;

pub use console_display::ConsoleDisplay;
pub use http_gateway::{ClientConfig, HttpSolverGateway};
