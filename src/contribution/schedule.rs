//! Future value of a lump sum + annually escalating monthly SIP schedule
//!
//! The horizon is split into annual blocks. Block `k` contributes
//! `base_sip + k * step_up` each month; the block's twelve contributions
//! accumulate with the monthly annuity factor and the block-end value is
//! carried forward to the end of the horizon.

use super::ContributionRequest;

pub const MONTHS_PER_YEAR: i32 = 12;

/// Future value factor of twelve unit monthly contributions
///
/// `((1 + r)^12 - 1) / r`, or 12 when the monthly rate is zero. The
/// numerator is evaluated as `exp_m1(12 * ln_1p(r))` so tiny rates keep
/// their precision.
pub fn monthly_annuity_factor(monthly_rate: f64) -> f64 {
    if monthly_rate == 0.0 {
        return MONTHS_PER_YEAR as f64;
    }
    (MONTHS_PER_YEAR as f64 * monthly_rate.ln_1p()).exp_m1() / monthly_rate
}

/// Contribution schedule shape of a request, independent of the base SIP
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContributionSchedule {
    pub horizon_years: u32,
    pub monthly_rate: f64,
    pub lump_sum: f64,
    pub annual_step_up: f64,
}

impl ContributionSchedule {
    pub fn from_request(request: &ContributionRequest) -> Self {
        Self {
            horizon_years: request.horizon_years,
            monthly_rate: request.monthly_rate(),
            lump_sum: request.lump_sum,
            annual_step_up: request.annual_step_up,
        }
    }

    /// Growth of one unit over `years` full years of monthly compounding
    fn growth_over_years(&self, years: u32) -> f64 {
        let months = years as f64 * MONTHS_PER_YEAR as f64;
        (months * self.monthly_rate.ln_1p()).exp()
    }

    /// Future value of the lump sum compounded over the full horizon
    pub fn lump_sum_future_value(&self) -> f64 {
        self.lump_sum * self.growth_over_years(self.horizon_years)
    }

    /// Future value of the SIP blocks for a base monthly contribution
    pub fn sip_future_value(&self, base_sip: f64) -> f64 {
        let factor = monthly_annuity_factor(self.monthly_rate);
        (0..self.horizon_years)
            .map(|k| {
                let contribution = base_sip + k as f64 * self.annual_step_up;
                let remaining_years = self.horizon_years - 1 - k;
                contribution * factor * self.growth_over_years(remaining_years)
            })
            .sum()
    }

    /// Total future value of lump sum plus SIP schedule
    pub fn future_value(&self, base_sip: f64) -> f64 {
        self.lump_sum_future_value() + self.sip_future_value(base_sip)
    }

    /// Monthly contribution paid during block `year` (0-indexed)
    pub fn contribution_in_year(&self, base_sip: f64, year: u32) -> f64 {
        base_sip + year as f64 * self.annual_step_up
    }

    /// Sum of all contributions paid in, before growth
    pub fn total_invested(&self, base_sip: f64) -> f64 {
        let sips: f64 = (0..self.horizon_years)
            .map(|k| self.contribution_in_year(base_sip, k) * MONTHS_PER_YEAR as f64)
            .sum();
        self.lump_sum + sips
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn schedule(years: u32, annual_rate: f64, lump: f64, step: f64) -> ContributionSchedule {
        ContributionSchedule::from_request(
            &ContributionRequest::new(0.0, years, annual_rate)
                .with_lump_sum(lump)
                .with_step_up(step),
        )
    }

    #[test]
    fn test_annuity_factor_zero_rate() {
        assert_relative_eq!(monthly_annuity_factor(0.0), 12.0);
    }

    #[test]
    fn test_annuity_factor_one_percent() {
        // ((1.01)^12 - 1) / 0.01 ≈ 12.6825
        assert_relative_eq!(monthly_annuity_factor(0.01), 12.682503013, epsilon = 1e-8);
    }

    #[test]
    fn test_annuity_factor_keeps_precision_at_tiny_rates() {
        for rate in [1e-16, 1e-15, 1e-12, 1e-9] {
            let factor = monthly_annuity_factor(rate);
            assert_relative_eq!(factor, 12.0 + 66.0 * rate, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_huge_horizon_does_not_overflow() {
        let s = schedule(200_000_000, 0.1, 1_000_000.0, 0.0);
        assert!(s.lump_sum_future_value().is_infinite());

        let flat = schedule(u32::MAX, 0.0, 1_000.0, 0.0);
        assert_relative_eq!(flat.lump_sum_future_value(), 1_000.0);
    }

    #[test]
    fn test_level_sip_matches_full_horizon_annuity() {
        // Without step-up the blocks telescope into one 120-month annuity
        let s = schedule(10, 0.12, 0.0, 0.0);
        let expected = 1_000.0 * (1.01_f64.powi(120) - 1.0) / 0.01;
        assert_relative_eq!(s.sip_future_value(1_000.0), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_step_up_zero_rate_sums_contributions() {
        // 3 years at 0%: 12 * (100 + 150 + 200)
        let s = schedule(3, 0.0, 0.0, 50.0);
        assert_relative_eq!(s.sip_future_value(100.0), 5_400.0);
        assert_relative_eq!(s.total_invested(100.0), 5_400.0);
    }

    #[test]
    fn test_lump_sum_compounds_monthly() {
        let s = schedule(2, 0.06, 10_000.0, 0.0);
        let expected = 10_000.0 * 1.005_f64.powi(24);
        assert_relative_eq!(s.lump_sum_future_value(), expected, max_relative = 1e-12);
        assert_relative_eq!(s.future_value(0.0), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_horizon_has_no_sip_value() {
        let s = schedule(0, 0.12, 5_000.0, 1_000.0);
        assert_relative_eq!(s.sip_future_value(10_000.0), 0.0);
        assert_relative_eq!(s.lump_sum_future_value(), 5_000.0);
    }

    #[test]
    fn test_contribution_escalates_once_per_year() {
        let s = schedule(5, 0.1, 0.0, 500.0);
        assert_relative_eq!(s.contribution_in_year(2_000.0, 0), 2_000.0);
        assert_relative_eq!(s.contribution_in_year(2_000.0, 4), 4_000.0);
    }
}
