//! Solver policy: tolerance, iteration limits, bracket growth and rounding

use crate::error::{GoalFundingError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Starting upper bound for the SIP bracket (currency units)
pub const DEFAULT_INITIAL_UPPER_BOUND: f64 = 1_000_000.0;

/// Currency granularity the recommended SIP is rounded to
pub const DEFAULT_ROUNDING_GRANULARITY: f64 = 500.0;

/// Minimum SIP solver configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Bisection stops once the bracket is narrower than this (currency units)
    pub tolerance: f64,

    /// Hard cap on bisection iterations
    pub max_iterations: u32,

    /// Upper bound tried before any doubling
    pub initial_upper_bound: f64,

    /// Hard cap on upper bound doublings
    pub max_bound_doublings: u32,

    /// Recommended SIP is rounded to the nearest multiple of this
    pub rounding_granularity: f64,

    /// Upper end of the suggested range as a multiple of the recommendation
    pub range_multiplier: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            max_iterations: 60,
            initial_upper_bound: DEFAULT_INITIAL_UPPER_BOUND,
            max_bound_doublings: 64,
            rounding_granularity: DEFAULT_ROUNDING_GRANULARITY,
            range_multiplier: 10.0,
        }
    }
}

impl SolverConfig {
    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| GoalFundingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
