//! Load goals from CSV and write plan results back out
//!
//! Input columns: GoalID, TargetYear, TargetAmount, LastYearFee,
//! NearTermRate, LongTermRate, AnnualReturnRate, LumpSum, AnnualStepUp.
//! TargetAmount and the baseline columns may be left empty.

use super::{GoalPlanResult, GoalRecord};
use crate::cost::CostBaseline;
use crate::error::{GoalFundingError, Result};
use csv::{Reader, Writer};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;

/// Raw CSV row matching the goal file columns
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "GoalID")]
    goal_id: u32,
    #[serde(rename = "TargetYear")]
    target_year: i32,
    #[serde(rename = "TargetAmount")]
    target_amount: Option<f64>,
    #[serde(rename = "LastYearFee")]
    last_year_fee: Option<f64>,
    #[serde(rename = "NearTermRate")]
    near_term_rate: Option<f64>,
    #[serde(rename = "LongTermRate")]
    long_term_rate: Option<f64>,
    #[serde(rename = "AnnualReturnRate")]
    annual_return_rate: f64,
    #[serde(rename = "LumpSum", default)]
    lump_sum: Option<f64>,
    #[serde(rename = "AnnualStepUp", default)]
    annual_step_up: Option<f64>,
}

impl CsvRow {
    fn into_goal(self) -> Result<GoalRecord> {
        let baseline = match self.last_year_fee {
            Some(fee) => Some(CostBaseline::new(
                fee,
                self.near_term_rate.unwrap_or(0.0),
                self.long_term_rate.unwrap_or(0.0),
            )),
            None => None,
        };

        if self.target_amount.is_none() && baseline.is_none() {
            return Err(GoalFundingError::InvalidRecord {
                goal_id: self.goal_id,
                message: "either TargetAmount or LastYearFee is required".to_string(),
            });
        }

        Ok(GoalRecord {
            goal_id: self.goal_id,
            target_year: self.target_year,
            target_amount: self.target_amount,
            baseline,
            annual_return_rate: self.annual_return_rate,
            lump_sum: self.lump_sum.unwrap_or(0.0),
            annual_step_up: self.annual_step_up.unwrap_or(0.0),
        })
    }
}

/// Load all goals from a CSV file
pub fn load_goals<P: AsRef<Path>>(path: P) -> Result<Vec<GoalRecord>> {
    let reader = Reader::from_path(path)?;
    collect_goals(reader)
}

/// Load goals from any reader (e.g., string buffer, stdin)
pub fn load_goals_from_reader<R: Read>(reader: R) -> Result<Vec<GoalRecord>> {
    collect_goals(Reader::from_reader(reader))
}

fn collect_goals<R: Read>(mut reader: Reader<R>) -> Result<Vec<GoalRecord>> {
    let mut goals = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        goals.push(row.into_goal()?);
    }
    Ok(goals)
}

/// Flat output row for one planned goal
#[derive(Debug, Serialize)]
struct PlanRow {
    #[serde(rename = "GoalID")]
    goal_id: u32,
    #[serde(rename = "HorizonYears")]
    horizon_years: i32,
    #[serde(rename = "TargetAmount")]
    target_amount: f64,
    #[serde(rename = "RawSip")]
    raw_sip: f64,
    #[serde(rename = "RecommendedSip")]
    recommended_sip: f64,
    #[serde(rename = "MaxSip")]
    max_sip: f64,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Iterations")]
    iterations: u32,
}

impl From<&GoalPlanResult> for PlanRow {
    fn from(result: &GoalPlanResult) -> Self {
        Self {
            goal_id: result.goal_id,
            horizon_years: result.horizon_years,
            target_amount: result.target_amount,
            raw_sip: result.solution.raw_sip,
            recommended_sip: result.plan.recommended_monthly_sip,
            max_sip: result.plan.max_sip(),
            status: format!("{:?}", result.plan.status),
            iterations: result.solution.iterations,
        }
    }
}

/// Write plan results as CSV
pub fn write_plans_csv<W: Write>(writer: W, results: &[GoalPlanResult]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    for result in results {
        csv_writer.serialize(PlanRow::from(result))?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
