//! Future cost projection under the blended near-term/long-term policy

use super::{CostBaseline, ProjectionRequest};

/// Horizon (years) up to which only the long-term rate compounds
pub const NEAR_TERM_WINDOW_YEARS: i32 = 10;

/// Project the future cost of a goal `horizon_years` from now.
///
/// For horizons up to ten years the fee compounds at the long-term rate.
/// Beyond that, the near-term rate compounds over `years - 10` periods and
/// the long-term rate over the full `years`, and the two factors multiply.
/// The result is rounded to the nearest whole currency unit.
///
/// Zero or negative horizons take the first branch and discount backward.
/// No clamping or validation is performed; NaN inputs yield NaN.
pub fn project_future_cost(baseline: &CostBaseline, horizon_years: i32) -> f64 {
    let years = horizon_years;
    let long_growth = (1.0 + baseline.long_term_annual_increase_rate).powi(years);

    let future = if years <= NEAR_TERM_WINDOW_YEARS {
        baseline.last_year_fee * long_growth
    } else {
        let near_growth =
            (1.0 + baseline.near_term_annual_increase_rate).powi(years - NEAR_TERM_WINDOW_YEARS);
        baseline.last_year_fee * near_growth * long_growth
    };

    future.round()
}

/// Stateless projector over `ProjectionRequest`s
#[derive(Debug, Clone, Copy, Default)]
pub struct CostProjector;

impl CostProjector {
    pub fn new() -> Self {
        Self
    }

    pub fn project(&self, request: &ProjectionRequest) -> f64 {
        project_future_cost(&request.baseline, request.horizon_years)
    }

    /// Project the same baseline over several horizons
    pub fn project_many(&self, baseline: &CostBaseline, horizons: &[i32]) -> Vec<f64> {
        horizons
            .iter()
            .map(|&years| project_future_cost(baseline, years))
            .collect()
    }
}
