//! Minimum base SIP solver
//!
//! The schedule's future value is affine and non-decreasing in the base SIP,
//! so the root is bracketed in `[0, upper]` (doubling `upper` until it
//! reaches the target) and narrowed by bisection. The final bracket is
//! refined by linear interpolation.

use super::{ContributionRequest, ContributionSchedule, SolverConfig};
use super::plan::round_to_granularity;
use serde::{Deserialize, Serialize};

/// How a solve terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SipOutcome {
    /// Lump sum alone reaches the target; no SIP is needed
    AlreadyFunded,
    /// A positive base SIP was found
    Solved,
    /// Step-up contributions alone reach the target with a base SIP of zero
    StepUpFunded,
    /// Zero horizon and the lump sum falls short of the target
    Unreachable,
    /// Upper bound could not be grown past the target within the doubling cap
    BoundExhausted,
    /// A non-finite input made the result undefined
    Indeterminate,
}

/// Diagnostic result of a single solve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipSolution {
    /// Unrounded base SIP (NaN when indeterminate)
    pub raw_sip: f64,
    pub outcome: SipOutcome,
    /// Bisection iterations performed
    pub iterations: u32,
    /// Upper end of the bracket after growth
    pub upper_bound: f64,
    /// True if the bracket narrowed below tolerance before the iteration cap
    pub converged: bool,
}

impl SipSolution {
    fn immediate(raw_sip: f64, outcome: SipOutcome) -> Self {
        Self {
            raw_sip,
            outcome,
            iterations: 0,
            upper_bound: 0.0,
            converged: true,
        }
    }
}

/// Solver for the minimum base monthly contribution of a goal
#[derive(Debug, Clone, Default)]
pub struct ContributionSolver {
    config: SolverConfig,
}

impl ContributionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve for the unrounded minimum base SIP
    pub fn solve(&self, request: &ContributionRequest) -> SipSolution {
        if request.has_non_finite_input() {
            log::warn!("Non-finite contribution input, SIP is indeterminate: {:?}", request);
            return SipSolution::immediate(f64::NAN, SipOutcome::Indeterminate);
        }

        let target = request.target_amount;

        if request.horizon_years == 0 {
            if request.lump_sum >= target {
                return SipSolution::immediate(0.0, SipOutcome::AlreadyFunded);
            }
            log::warn!(
                "Target {:.2} unreachable with zero horizon (lump sum {:.2})",
                target,
                request.lump_sum
            );
            return SipSolution::immediate(0.0, SipOutcome::Unreachable);
        }

        let schedule = ContributionSchedule::from_request(request);
        if schedule.lump_sum_future_value() >= target {
            return SipSolution::immediate(0.0, SipOutcome::AlreadyFunded);
        }

        let objective = |sip: f64| schedule.future_value(sip);
        if objective(0.0) >= target {
            return SipSolution::immediate(0.0, SipOutcome::StepUpFunded);
        }

        // Grow the bracket until it contains the root
        let mut hi = self.config.initial_upper_bound.max(self.config.tolerance);
        let mut f_hi = objective(hi);
        let mut doublings = 0;
        while f_hi < target && doublings < self.config.max_bound_doublings {
            hi *= 2.0;
            f_hi = objective(hi);
            doublings += 1;
            log::debug!("SIP upper bound doubled to {:.2} (FV {:.2})", hi, f_hi);
        }

        if f_hi < target {
            log::warn!(
                "SIP upper bound {:.2} still short of target {:.2} after {} doublings",
                hi,
                target,
                doublings
            );
            return SipSolution {
                raw_sip: f64::NAN,
                outcome: SipOutcome::BoundExhausted,
                iterations: 0,
                upper_bound: hi,
                converged: false,
            };
        }

        let upper_bound = hi;
        let mut lo = 0.0;
        let mut f_lo = objective(lo);
        let mut iterations = 0;

        while iterations < self.config.max_iterations && hi - lo >= self.config.tolerance {
            iterations += 1;
            let mid = 0.5 * (lo + hi);
            let f_mid = objective(mid);

            if f_mid >= target {
                hi = mid;
                f_hi = f_mid;
            } else {
                lo = mid;
                f_lo = f_mid;
            }
        }

        let converged = hi - lo < self.config.tolerance;
        if !converged {
            log::warn!(
                "SIP bisection hit {} iterations with bracket [{:.4}, {:.4}]",
                iterations,
                lo,
                hi
            );
        }

        let raw_sip = interpolate_root(lo, f_lo, hi, f_hi, target);
        log::debug!(
            "Solved SIP {:.4} in {} iterations (bound {:.2})",
            raw_sip,
            iterations,
            upper_bound
        );

        SipSolution {
            raw_sip,
            outcome: SipOutcome::Solved,
            iterations,
            upper_bound,
            converged,
        }
    }

    /// Solve and round to the configured granularity
    pub fn solve_rounded(&self, request: &ContributionRequest) -> f64 {
        let solution = self.solve(request);
        round_to_granularity(solution.raw_sip, self.config.rounding_granularity)
    }
}

/// Root of the line through the bracket ends, kept inside the bracket
fn interpolate_root(lo: f64, f_lo: f64, hi: f64, f_hi: f64, target: f64) -> f64 {
    let span = f_hi - f_lo;
    if span <= 0.0 {
        return hi;
    }
    (lo + (target - f_lo) * (hi - lo) / span).clamp(lo, hi)
}

/// Minimum monthly SIP under the default policy, rounded to the nearest 500
pub fn solve_minimum_sip(request: &ContributionRequest) -> f64 {
    ContributionSolver::default().solve_rounded(request)
}
