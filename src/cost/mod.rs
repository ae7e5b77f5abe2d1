//! Inflation-adjusted goal cost projection

mod baseline;
mod projector;

pub use baseline::{CostBaseline, ProjectionRequest};
pub use projector::{CostProjector, NEAR_TERM_WINDOW_YEARS, project_future_cost};
