// Domain module: Business logic and models

pub mod models;
pub mod solver_gateway;
pub mod value_objects;

pub use models::*;
pub use solver_gateway::*;
pub use value_objects::*;
