//! Goal Funding CLI
//!
//! Command-line interface for projecting goal costs and solving SIP plans

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use goal_funding::goal::{GoalPlanner, load_goals, write_plans_csv};
use goal_funding::{
    ContributionPlan, ContributionRequest, ContributionSchedule, ContributionSolver, CostBaseline,
    SolverConfig, project_future_cost,
};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "goal_funding", version, about = "Goal cost projection and SIP planning")]
struct Cli {
    /// Solver configuration JSON (missing fields take defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the SIP rounding granularity
    #[arg(long, global = true)]
    granularity: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Project the inflation-adjusted future cost of a baseline fee
    Project {
        #[arg(long)]
        fee: f64,
        #[arg(long, default_value_t = 0.0)]
        near_rate: f64,
        #[arg(long, default_value_t = 0.0)]
        long_rate: f64,
        /// Horizon in years (may be negative)
        #[arg(long, allow_hyphen_values = true)]
        years: i32,
    },
    /// Solve the minimum monthly SIP for a target amount
    Solve {
        #[arg(long)]
        target: f64,
        #[arg(long)]
        years: u32,
        /// Expected annual return as a fraction
        #[arg(long)]
        rate: f64,
        #[arg(long, default_value_t = 0.0)]
        lump_sum: f64,
        #[arg(long, default_value_t = 0.0)]
        step_up: f64,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Plan every goal in a CSV file
    Plan {
        goals: PathBuf,
        /// Valuation date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<NaiveDate>,
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

fn load_config(cli: &Cli) -> Result<SolverConfig> {
    let mut config = match &cli.config {
        Some(path) => SolverConfig::from_json_path(path)
            .with_context(|| format!("loading solver config {}", path.display()))?,
        None => SolverConfig::default(),
    };
    if let Some(granularity) = cli.granularity {
        config.rounding_granularity = granularity;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Command::Project { fee, near_rate, long_rate, years } => {
            let baseline = CostBaseline::new(fee, near_rate, long_rate);
            println!("{:.0}", project_future_cost(&baseline, years));
        }
        Command::Solve { target, years, rate, lump_sum, step_up, json } => {
            let request = ContributionRequest::new(target, years, rate)
                .with_lump_sum(lump_sum)
                .with_step_up(step_up);
            let solver = ContributionSolver::new(config);
            let solution = solver.solve(&request);
            let plan = ContributionPlan::from_solution(&solution, solver.config());

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                let schedule = ContributionSchedule::from_request(&request);
                println!("Status:          {:?}", plan.status);
                println!("Raw SIP:         {:.2}", solution.raw_sip);
                println!("Recommended SIP: {:.0}", plan.recommended_monthly_sip);
                println!("Suggested range: {:.0} - {:.0}", plan.min_sip(), plan.max_sip());
                println!(
                    "Iterations:      {} (converged: {})",
                    solution.iterations, solution.converged
                );
                if solution.raw_sip.is_finite() {
                    let sip = plan.recommended_monthly_sip;
                    println!("Invested:        {:.2}", schedule.total_invested(sip));
                    println!("Future value:    {:.2}", schedule.future_value(sip));
                }
            }
        }
        Command::Plan { goals, as_of, output, format } => {
            let records = load_goals(&goals)
                .with_context(|| format!("loading goals from {}", goals.display()))?;
            let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
            let planner = GoalPlanner::with_config(as_of, config);
            let results = planner.plan_batch(&records);

            let writer: Box<dyn Write> = match &output {
                Some(path) => Box::new(
                    File::create(path).with_context(|| format!("creating {}", path.display()))?,
                ),
                None => Box::new(io::stdout().lock()),
            };

            match format {
                OutputFormat::Csv => write_plans_csv(writer, &results)?,
                OutputFormat::Json => serde_json::to_writer_pretty(writer, &results)?,
            }

            if let Some(path) = output {
                eprintln!("Planned {} goals, written to {}", results.len(), path.display());
            }
        }
    }

    Ok(())
}
