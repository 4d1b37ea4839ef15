//! Compound-growth projections
//!
//! Yearly-compounded balance curves for the retirement and net-worth views.
//! The order of operations is part of the contract: each period adds the
//! year's contributions first, then applies growth to the whole balance.

use serde::{Deserialize, Serialize};

/// One sample of a growth curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    /// Period index, starting at 0.
    pub period: u32,
    /// Balance at the start of the period.
    pub balance: f64,
}

/// Project a balance over `years` periods of yearly compounding.
///
/// Returns `years + 1` points; the first carries `start_value` untouched.
/// Each subsequent balance is
/// `(previous + monthly_contribution * 12) * (1 + annual_return_percent / 100)`.
/// Deterministic: identical inputs always yield identical sequences.
pub fn growth_series(
    start_value: f64,
    monthly_contribution: f64,
    annual_return_percent: f64,
    years: u32,
) -> Vec<GrowthPoint> {
    let growth = 1.0 + annual_return_percent / 100.0;
    let annual_contribution = monthly_contribution * 12.0;

    let mut balance = start_value;
    let mut points = Vec::with_capacity(years as usize + 1);
    for period in 0..=years {
        points.push(GrowthPoint { period, balance });
        balance = (balance + annual_contribution) * growth;
    }
    points
}

/// Future value of an ordinary annuity: `payment * ((1+r)^n - 1) / r`.
///
/// The zero-rate case degenerates to linear accumulation.
pub fn annuity_future_value(payment: f64, rate_per_period: f64, periods: u32) -> f64 {
    if rate_per_period == 0.0 {
        return payment * periods as f64;
    }
    payment * ((1.0 + rate_per_period).powi(periods as i32) - 1.0) / rate_per_period
}

/// Estimate how much an extra monthly contribution adds by retirement.
///
/// Yearly-compounded annuity of `extra_monthly * 12` over the horizon; this
/// backs the "increasing your contribution could add X" coaching line.
pub fn contribution_boost(extra_monthly: f64, annual_return_percent: f64, years: u32) -> f64 {
    annuity_future_value(extra_monthly * 12.0, annual_return_percent / 100.0, years)
}
