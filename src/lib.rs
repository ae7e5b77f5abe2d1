//! Goal Funding - projection engine for education and other savings goals
//!
//! This library provides:
//! - Inflation-adjusted future cost projection from a baseline annual fee
//! - Future value of lump sum + monthly SIP schedules with annual step-up
//! - Minimum SIP solving via bracketed bisection with an adaptive upper bound
//! - Goal planning (horizon derivation, cost projection, SIP recommendation)
//! - CSV loading of goal batches

pub mod error;
pub mod cost;
pub mod contribution;
pub mod goal;

// Re-export commonly used types
pub use error::{GoalFundingError, Result};
pub use cost::{CostBaseline, CostProjector, ProjectionRequest, project_future_cost};
pub use contribution::{
    ContributionPlan, ContributionRequest, ContributionSchedule, ContributionSolver, PlanStatus,
    SolverConfig, recommend_plan, solve_minimum_sip,
};
pub use goal::{GoalPlanner, GoalPlanResult, GoalRecord};
