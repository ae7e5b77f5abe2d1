//! Goal planner composing cost projection and SIP solving

use super::{GoalRecord, horizon_years};
use crate::contribution::{
    ContributionPlan, ContributionRequest, ContributionSolver, SipSolution, SolverConfig,
};
use crate::cost::project_future_cost;
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Where a goal's target amount came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetSource {
    Explicit,
    ProjectedCost,
    /// Neither amount nor baseline supplied; target treated as zero
    Missing,
}

/// Plan for one goal with the intermediate values that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalPlanResult {
    pub goal_id: u32,
    /// Raw `target_year - as_of.year()`
    pub horizon_years: i32,
    pub target_amount: f64,
    pub target_source: TargetSource,
    pub solution: SipSolution,
    pub plan: ContributionPlan,
}

/// Plans goals as of a fixed valuation date
#[derive(Debug, Clone)]
pub struct GoalPlanner {
    as_of: NaiveDate,
    solver: ContributionSolver,
}

impl GoalPlanner {
    pub fn new(as_of: NaiveDate) -> Self {
        Self::with_config(as_of, SolverConfig::default())
    }

    pub fn with_config(as_of: NaiveDate, config: SolverConfig) -> Self {
        Self {
            as_of,
            solver: ContributionSolver::new(config),
        }
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Contribution request a goal resolves to
    ///
    /// The cost projection sees the raw horizon; the solver sees it clamped
    /// to zero so overdue goals short-circuit instead of discounting.
    pub fn request_for(&self, goal: &GoalRecord) -> (ContributionRequest, TargetSource) {
        let horizon = horizon_years(goal.target_year, self.as_of);

        let (target_amount, source) = match (goal.target_amount, goal.baseline) {
            (Some(amount), _) => (amount, TargetSource::Explicit),
            (None, Some(baseline)) => (
                project_future_cost(&baseline, horizon),
                TargetSource::ProjectedCost,
            ),
            (None, None) => (0.0, TargetSource::Missing),
        };

        let request = ContributionRequest {
            target_amount,
            horizon_years: horizon.max(0) as u32,
            annual_return_rate: goal.annual_return_rate,
            lump_sum: goal.lump_sum,
            annual_step_up: goal.annual_step_up,
        };
        (request, source)
    }

    pub fn plan(&self, goal: &GoalRecord) -> GoalPlanResult {
        let (request, target_source) = self.request_for(goal);
        if target_source == TargetSource::Missing {
            log::warn!("Goal {} has neither a target amount nor a cost baseline", goal.goal_id);
        }

        let solution = self.solver.solve(&request);
        let plan = ContributionPlan::from_solution(&solution, self.solver.config());

        GoalPlanResult {
            goal_id: goal.goal_id,
            horizon_years: horizon_years(goal.target_year, self.as_of),
            target_amount: request.target_amount,
            target_source,
            solution,
            plan,
        }
    }

    /// Plan many goals in parallel, preserving input order
    pub fn plan_batch(&self, goals: &[GoalRecord]) -> Vec<GoalPlanResult> {
        log::info!("Planning {} goals as of {}", goals.len(), self.as_of);
        goals.par_iter().map(|goal| self.plan(goal)).collect()
    }
}
