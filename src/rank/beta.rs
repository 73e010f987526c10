//! Beta-distribution quantile solving.
//!
//! A venue's score is a low quantile of its Beta posterior. The quantile is
//! found by bisecting `f(x) = I_x(a, b) - q` over the unit interval, where
//! `I_x(a, b)` is the regularized incomplete Beta function, i.e. the
//! Beta(a, b) CDF. The CDF is strictly increasing on [0, 1] for positive
//! shape parameters, so `f` changes sign exactly once and bisection always
//! converges.
//!
//! `I_x` is evaluated through `statrs`, which uses a continued-fraction
//! expansion that stays accurate across the parameter ranges real count
//! data produces.

use statrs::function::beta::beta_reg;

use crate::error::{Result, ToqueError};

/// Absolute bracket-width tolerance for bisection.
///
/// Bisection halves the bracket each step, so the solver performs about
/// log2(1 / tolerance) CDF evaluations per call, roughly ten at this
/// setting.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// Find `x` in [0, 1] such that `I_x(a, b)` is approximately `q`.
///
/// `a` and `b` are the Beta shape parameters and must be positive; `q` must
/// lie within [0, 1]. Violations fail with `InvalidParameter`. Callers
/// deriving the parameters from non-negative counts plus one can never trip
/// these checks, but the contract is enforced regardless.
pub fn solve_quantile(q: f64, a: f64, b: f64, tolerance: f64) -> Result<f64> {
    if !q.is_finite() || !(0.0..=1.0).contains(&q) {
        return Err(ToqueError::invalid_parameter(format!(
            "quantile must be within [0, 1], got {q}"
        )));
    }
    if !a.is_finite() || a <= 0.0 || !b.is_finite() || b <= 0.0 {
        return Err(ToqueError::invalid_parameter(format!(
            "shape parameters must be positive, got a={a}, b={b}"
        )));
    }
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(ToqueError::invalid_parameter(format!(
            "tolerance must be positive, got {tolerance}"
        )));
    }

    let f = |x: f64| beta_reg(a, b, x) - q;

    let mut lo = 0.0_f64;
    let mut mid = 0.5_f64;
    let mut hi = 1.0_f64;

    // Keep the bracket around the sign change and halve it until it is
    // narrower than the tolerance.
    while (hi - lo).abs() > tolerance {
        if f(lo) * f(mid) < 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
        mid = (lo + hi) / 2.0;
    }

    Ok(mid)
}
