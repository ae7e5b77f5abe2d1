//! Goal planning: horizon derivation, cost projection and SIP recommendation

mod record;
mod planner;
pub mod loader;

pub use record::{GoalRecord, horizon_years, horizon_years_until};
pub use planner::{GoalPlanner, GoalPlanResult, TargetSource};
pub use loader::{load_goals, load_goals_from_reader, write_plans_csv};
