//! Baseline fee and inflation regime inputs for cost projection

use serde::{Deserialize, Serialize};

/// Historical fee for an institution/course plus its two inflation regimes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBaseline {
    /// Fee charged over the most recent year (expected >= 0)
    pub last_year_fee: f64,

    /// Annual fee increase applied beyond the first ten years (fraction)
    pub near_term_annual_increase_rate: f64,

    /// Annual fee increase applied over the full horizon (fraction)
    pub long_term_annual_increase_rate: f64,
}

impl CostBaseline {
    pub fn new(last_year_fee: f64, near_term_rate: f64, long_term_rate: f64) -> Self {
        Self {
            last_year_fee,
            near_term_annual_increase_rate: near_term_rate,
            long_term_annual_increase_rate: long_term_rate,
        }
    }

    /// Baseline with no fee inflation
    pub fn flat(last_year_fee: f64) -> Self {
        Self::new(last_year_fee, 0.0, 0.0)
    }
}

/// A baseline together with the years until the goal is due
///
/// `horizon_years` is `target_year - current_year` and may be zero or
/// negative for goals already due.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub baseline: CostBaseline,
    pub horizon_years: i32,
}
