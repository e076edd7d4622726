pub mod error;
pub mod metrics;
pub mod routes;

pub use routes::{build_router, ApiState};
