//! Minimum SIP solving for lump sum + stepped-up monthly contribution schedules

mod request;
mod schedule;
mod config;
mod solver;
mod plan;

pub use request::ContributionRequest;
pub use schedule::{ContributionSchedule, monthly_annuity_factor, MONTHS_PER_YEAR};
pub use config::{SolverConfig, DEFAULT_INITIAL_UPPER_BOUND, DEFAULT_ROUNDING_GRANULARITY};
pub use solver::{ContributionSolver, SipOutcome, SipSolution, solve_minimum_sip};
pub use plan::{ContributionPlan, PlanStatus, recommend_plan, round_to_granularity};
