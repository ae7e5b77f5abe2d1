//! Goal definitions as supplied by the goal-creation caller

use crate::cost::CostBaseline;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Whole years between `as_of` and the goal's target year
///
/// May be zero or negative for goals already due.
pub fn horizon_years(target_year: i32, as_of: NaiveDate) -> i32 {
    target_year - as_of.year()
}

/// Horizon to a target date, counted by calendar year
pub fn horizon_years_until(target_date: NaiveDate, as_of: NaiveDate) -> i32 {
    horizon_years(target_date.year(), as_of)
}

/// A single goal to plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRecord {
    pub goal_id: u32,
    pub target_year: i32,

    /// Explicit target amount; when absent the baseline cost is projected
    pub target_amount: Option<f64>,

    /// Institution/course fee baseline for cost projection
    pub baseline: Option<CostBaseline>,

    pub annual_return_rate: f64,
    pub lump_sum: f64,
    pub annual_step_up: f64,
}

impl GoalRecord {
    /// Goal with an explicit target amount and no lump sum or step-up
    pub fn with_target(
        goal_id: u32,
        target_year: i32,
        target_amount: f64,
        annual_return_rate: f64,
    ) -> Self {
        Self {
            goal_id,
            target_year,
            target_amount: Some(target_amount),
            baseline: None,
            annual_return_rate,
            lump_sum: 0.0,
            annual_step_up: 0.0,
        }
    }

    /// Goal whose target is the projected cost of a baseline fee
    pub fn with_baseline(
        goal_id: u32,
        target_year: i32,
        baseline: CostBaseline,
        annual_return_rate: f64,
    ) -> Self {
        Self {
            goal_id,
            target_year,
            target_amount: None,
            baseline: Some(baseline),
            annual_return_rate,
            lump_sum: 0.0,
            annual_step_up: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_horizon_counts_calendar_years() {
        assert_eq!(horizon_years(2036, date(2026, 10, 14)), 10);
        assert_eq!(horizon_years_until(date(2027, 1, 1), date(2026, 12, 31)), 1);
    }

    #[test]
    fn test_overdue_goal_has_negative_horizon() {
        assert_eq!(horizon_years(2024, date(2026, 3, 1)), -2);
    }
}
