//! Standard normal distribution helpers.
//!
//! `erf` uses the Chebyshev fit for `erfc` from Numerical Recipes
//! (fractional error below 1.2e-7 everywhere), evaluated with Horner's
//! method. The coefficients are fixed; pricing tolerances downstream depend
//! on them.

// Coefficients are transcribed verbatim; splitting them with `_` hides the
// digit groups they are usually quoted in.
#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use std::f64::consts::SQRT_2;

/// Polynomial coefficients in `t`, constant term first.
const ERFC_COEFFICIENTS: [f64; 10] = [
    -1.26551223,
    1.00002368,
    0.37409196,
    0.09678418,
    -0.18628806,
    0.27886807,
    -1.13520398,
    1.48851587,
    -0.82215223,
    0.17087277,
];

/// Error function approximation.
pub fn erf(z: f64) -> f64 {
    let t = 1.0 / (1.0 + 0.5 * z.abs());

    // Horner: c1 + t*(c2 + t*(... + t*c9))
    let tail = ERFC_COEFFICIENTS[1..]
        .iter()
        .rev()
        .fold(0.0, |acc, &c| c + t * acc);

    let ans = 1.0 - t * (-z * z + ERFC_COEFFICIENTS[0] + t * tail).exp();

    if z >= 0.0 { ans } else { -ans }
}

/// Standard normal CDF, `N(x) = 0.5 * (1 + erf(x / sqrt(2)))`.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / SQRT_2))
}
