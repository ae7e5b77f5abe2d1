//! Recommended contribution plan presented to the goal-creation caller

use super::{ContributionRequest, ContributionSolver, SipOutcome, SipSolution, SolverConfig};
use serde::{Deserialize, Serialize};

/// Funding status of a goal under its recommended plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanStatus {
    /// Lump sum alone reaches the target
    Funded,
    /// Monthly contributions are required; the base SIP is zero when the
    /// annual step-up alone reaches the target
    Required,
    /// Target cannot be reached by SIP within the horizon
    Unreachable,
    /// Inputs did not produce a defined estimate
    Indeterminate,
}

impl From<SipOutcome> for PlanStatus {
    fn from(outcome: SipOutcome) -> Self {
        match outcome {
            SipOutcome::AlreadyFunded => PlanStatus::Funded,
            SipOutcome::Solved | SipOutcome::StepUpFunded => PlanStatus::Required,
            SipOutcome::Unreachable => PlanStatus::Unreachable,
            SipOutcome::BoundExhausted | SipOutcome::Indeterminate => PlanStatus::Indeterminate,
        }
    }
}

/// Rounded SIP recommendation with a UI range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionPlan {
    pub recommended_monthly_sip: f64,
    /// `[min, max]` where `max = min * range multiplier`
    pub suggested_range: [f64; 2],
    pub status: PlanStatus,
}

impl ContributionPlan {
    pub fn from_solution(solution: &SipSolution, config: &SolverConfig) -> Self {
        let min_sip = round_to_granularity(solution.raw_sip, config.rounding_granularity);
        Self {
            recommended_monthly_sip: min_sip,
            suggested_range: [min_sip, min_sip * config.range_multiplier],
            status: solution.outcome.into(),
        }
    }

    pub fn min_sip(&self) -> f64 {
        self.suggested_range[0]
    }

    pub fn max_sip(&self) -> f64 {
        self.suggested_range[1]
    }
}

/// Round to the nearest multiple of `granularity`
///
/// Non-positive granularity leaves the value unchanged.
pub fn round_to_granularity(value: f64, granularity: f64) -> f64 {
    if granularity <= 0.0 {
        return value;
    }
    (value / granularity).round() * granularity
}

impl ContributionSolver {
    /// Solve and wrap the result as a plan
    pub fn plan(&self, request: &ContributionRequest) -> ContributionPlan {
        let solution = self.solve(request);
        ContributionPlan::from_solution(&solution, self.config())
    }
}

/// Recommended plan under the default policy
pub fn recommend_plan(request: &ContributionRequest) -> ContributionPlan {
    ContributionSolver::default().plan(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_to_nearest_multiple() {
        assert_relative_eq!(round_to_granularity(4_347.1, 500.0), 4_500.0);
        assert_relative_eq!(round_to_granularity(4_249.9, 500.0), 4_000.0);
        assert_relative_eq!(round_to_granularity(240.0, 500.0), 0.0);
        assert_relative_eq!(round_to_granularity(123.4, 0.0), 123.4);
    }

    #[test]
    fn test_plan_range_is_ten_times_minimum() {
        let plan = recommend_plan(&ContributionRequest::new(1_000_000.0, 10, 0.12));
        assert_eq!(plan.status, PlanStatus::Required);
        assert_relative_eq!(plan.recommended_monthly_sip, 4_500.0);
        assert_relative_eq!(plan.min_sip(), 4_500.0);
        assert_relative_eq!(plan.max_sip(), 45_000.0);
    }

    #[test]
    fn test_funded_plan_is_zero() {
        let request = ContributionRequest::new(10_000.0, 3, 0.1).with_lump_sum(20_000.0);
        let plan = recommend_plan(&request);
        assert_eq!(plan.status, PlanStatus::Funded);
        assert_eq!(plan.suggested_range, [0.0, 0.0]);
    }

    #[test]
    fn test_step_up_funded_plan_is_required_with_zero_base() {
        let request = ContributionRequest::new(10_000.0, 3, 0.0).with_step_up(1_000.0);
        let plan = recommend_plan(&request);
        assert_eq!(plan.status, PlanStatus::Required);
        assert_eq!(plan.recommended_monthly_sip, 0.0);
    }

    #[test]
    fn test_unreachable_plan_status() {
        let plan = recommend_plan(&ContributionRequest::new(10_000.0, 0, 0.1));
        assert_eq!(plan.status, PlanStatus::Unreachable);
        assert_eq!(plan.recommended_monthly_sip, 0.0);
    }

    #[test]
    fn test_indeterminate_plan_is_nan() {
        let plan = recommend_plan(&ContributionRequest::new(10_000.0, 5, f64::INFINITY));
        assert_eq!(plan.status, PlanStatus::Indeterminate);
        assert!(plan.recommended_monthly_sip.is_nan());
    }

    #[test]
    fn test_plan_serializes_camel_case() {
        let plan = recommend_plan(&ContributionRequest::new(600_000.0, 5, 0.0));
        let json = serde_json::to_value(plan).expect("serializable");
        assert_eq!(json["recommendedMonthlySip"], 10_000.0);
        assert_eq!(json["suggestedRange"][1], 100_000.0);
        assert_eq!(json["status"], "Required");
    }
}
