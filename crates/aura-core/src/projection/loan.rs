//! Loan amortization
//!
//! Standard amortization formula with a linear special case at 0% (the
//! general formula divides by `(1+r)^n - 1`, which is zero there).

use serde::{Deserialize, Serialize};

/// Result of amortizing a loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSchedule {
    /// Fixed monthly payment.
    pub monthly_payment: f64,
    /// Payment times the number of payments.
    pub total_cost: f64,
    /// Total cost minus principal.
    pub total_interest: f64,
}

/// Amortize a loan into a fixed monthly payment.
///
/// Inputs: `principal >= 0`, `annual_rate_percent >= 0`, `term_years > 0`.
/// A non-finite payment (pathological exponents) clamps to 0 rather than
/// propagating NaN/Infinity into derived totals.
pub fn amortize(principal: f64, annual_rate_percent: f64, term_years: u32) -> LoanSchedule {
    let r = annual_rate_percent / 100.0 / 12.0;
    let n = (term_years * 12) as f64;

    let mut payment = if annual_rate_percent == 0.0 {
        principal / n
    } else {
        let growth = (1.0 + r).powf(n);
        principal * r * growth / (growth - 1.0)
    };

    if !payment.is_finite() {
        payment = 0.0;
    }

    let total_cost = payment * n;
    LoanSchedule {
        monthly_payment: payment,
        total_cost,
        total_interest: total_cost - principal,
    }
}
