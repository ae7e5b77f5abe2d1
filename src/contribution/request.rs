//! Contribution request input

use serde::{Deserialize, Serialize};

/// Inputs for solving the minimum monthly SIP of a goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionRequest {
    /// Amount the schedule must reach by the end of the horizon
    pub target_amount: f64,

    /// Whole years until the goal is due
    pub horizon_years: u32,

    /// Expected annual return (fraction, e.g. 0.12 for 12%)
    pub annual_return_rate: f64,

    /// One-time contribution at the start of the horizon
    #[serde(default)]
    pub lump_sum: f64,

    /// Amount added to the monthly contribution once per elapsed year
    #[serde(default)]
    pub annual_step_up: f64,
}

impl ContributionRequest {
    /// Level SIP request with no lump sum and no step-up
    pub fn new(target_amount: f64, horizon_years: u32, annual_return_rate: f64) -> Self {
        Self {
            target_amount,
            horizon_years,
            annual_return_rate,
            lump_sum: 0.0,
            annual_step_up: 0.0,
        }
    }

    pub fn with_lump_sum(mut self, lump_sum: f64) -> Self {
        self.lump_sum = lump_sum;
        self
    }

    pub fn with_step_up(mut self, annual_step_up: f64) -> Self {
        self.annual_step_up = annual_step_up;
        self
    }

    /// Monthly compounding rate
    pub fn monthly_rate(&self) -> f64 {
        self.annual_return_rate / 12.0
    }

    /// True if any numeric input is NaN or infinite
    pub fn has_non_finite_input(&self) -> bool {
        ![
            self.target_amount,
            self.annual_return_rate,
            self.lump_sum,
            self.annual_step_up,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
