//! Linear dispersion relation.
//!
//! Relates angular frequency ω = 2π/T to wave number k at depth h:
//!
//! ω² = g k tanh(k h)
//!
//! In deep water tanh(kh) → 1, giving L₀ = g T² / (2π). At finite depth k is
//! found by Newton-Raphson iteration seeded with the deep-water wave number.

use std::f64::consts::PI;

use tracing::{trace, warn};

use super::G;

/// Newton-Raphson settings for the finite-depth dispersion solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DispersionConfig {
    /// Stop once |k_{n+1} - k_n| / k_n falls to this value.
    pub tolerance: f64,
    /// Hard cap on iterations.
    pub max_iterations: usize,
}

impl Default for DispersionConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            max_iterations: 100,
        }
    }
}

impl DispersionConfig {
    /// Set the relative convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Deep-water wave length L₀ = g T² / (2π).
#[inline]
pub fn deep_water_wavelength(period: f64) -> f64 {
    G * period * period / (2.0 * PI)
}

/// Inverse of [`deep_water_wavelength`]: T = √(2π L₀ / g).
#[inline]
pub fn deep_water_period(wavelength: f64) -> f64 {
    (2.0 * PI * wavelength / G).sqrt()
}

/// Solve ω² = g k tanh(k h) for the wave number k.
///
/// A NaN period gives NaN without iterating. Non-physical depths are not
/// rejected; whatever the iteration produces (usually NaN) is returned.
///
/// If the iteration cap is reached before the relative change drops below
/// the tolerance, the last iterate is returned and a warning is logged.
pub fn solve_wavenumber(period: f64, depth: f64, config: &DispersionConfig) -> f64 {
    if period.is_nan() {
        return f64::NAN;
    }

    let omega_sq = (2.0 * PI / period).powi(2);
    let residual = |k: f64| omega_sq - G * k * (k * depth).tanh();
    let derivative = |k: f64| {
        let tanh_kh = (k * depth).tanh();
        -G * tanh_kh - G * k * depth * (1.0 - tanh_kh * tanh_kh)
    };

    // Deep-water seed
    let mut k = 2.0 * PI / deep_water_wavelength(period);

    for iteration in 1..=config.max_iterations {
        let next = k - residual(k) / derivative(k);
        let change = (next - k).abs() / k;
        k = next;

        // NaN change also terminates: nothing more to gain
        if !(change > config.tolerance) {
            trace!(period, depth, iteration, k, "dispersion converged");
            return k;
        }
    }

    warn!(
        period,
        depth,
        max_iterations = config.max_iterations,
        "dispersion relation did not converge; using last iterate"
    );
    k
}

/// Wave length L = 2π / k at depth h.
#[inline]
pub fn wavelength(period: f64, depth: f64, config: &DispersionConfig) -> f64 {
    2.0 * PI / solve_wavenumber(period, depth, config)
}

/// Wave lengths for a sequence of periods, each paired with its depth.
///
/// `depths` must have the same length as `periods`.
#[cfg(not(feature = "parallel"))]
pub fn wavelengths(periods: &[f64], depths: &[f64], config: &DispersionConfig) -> Vec<f64> {
    debug_assert_eq!(periods.len(), depths.len());
    periods
        .iter()
        .zip(depths)
        .map(|(&t, &h)| wavelength(t, h, config))
        .collect()
}

/// Wave lengths for a sequence of periods, solved in parallel.
///
/// `depths` must have the same length as `periods`.
#[cfg(feature = "parallel")]
pub fn wavelengths(periods: &[f64], depths: &[f64], config: &DispersionConfig) -> Vec<f64> {
    use rayon::prelude::*;

    debug_assert_eq!(periods.len(), depths.len());
    periods
        .par_iter()
        .zip(depths.par_iter())
        .map(|(&t, &h)| wavelength(t, h, config))
        .collect()
}

/// Period from wave length at finite depth, inverting the dispersion relation
/// directly: T = √(2π L / (g tanh(2π h / L))).
#[inline]
pub fn period_from_wavelength(wavelength: f64, depth: f64) -> f64 {
    (2.0 * PI * wavelength / (G * (2.0 * PI * depth / wavelength).tanh())).sqrt()
}
