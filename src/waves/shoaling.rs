//! Reverse shoaling of nearshore wave heights to deep water.
//!
//! Empirical runup models expect deep-water wave heights H₀. Heights measured
//! or modelled at an intermediate depth are converted with linear shoaling
//! theory, H₀ = H / K_s, where the shoaling coefficient is K_s = √(Cg₀ / Cg).
//!
//! Depth regimes relative to the deep-water wave length L₀:
//!
//! | regime       | condition               |
//! |--------------|-------------------------|
//! | shallow      | h < L₀ / 50             |
//! | intermediate | L₀ / 50 ≤ h ≤ L₀ / 2    |
//! | deep         | h > L₀ / 2              |

use std::f64::consts::PI;

use tracing::{debug, warn};

use super::dispersion::deep_water_wavelength;
use super::G;
use crate::error::{Result, RunupError};

/// Wave depth classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WaterDepthRegime {
    Shallow,
    Intermediate,
    Deep,
}

impl WaterDepthRegime {
    /// Classify a depth against the deep-water wave length.
    ///
    /// Returns `None` when either value is NaN.
    pub fn classify(depth: f64, deep_water_wavelength: f64) -> Option<Self> {
        let shallow_limit = deep_water_wavelength / 50.0;
        let deep_limit = deep_water_wavelength / 2.0;

        if depth < shallow_limit {
            Some(Self::Shallow)
        } else if depth > deep_limit {
            Some(Self::Deep)
        } else if depth >= shallow_limit && depth <= deep_limit {
            Some(Self::Intermediate)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Shallow => "shallow",
            Self::Intermediate => "intermediate",
            Self::Deep => "deep",
        }
    }
}

/// One wave observation to be reverse shoaled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShoalingCase {
    /// Depth at which the height was measured (m, positive down).
    pub depth: f64,
    /// Peak period (s).
    pub tp: f64,
    /// Significant wave height at `depth` (m).
    pub hs: f64,
    /// Deep-water wave length (m).
    pub l0: f64,
}

impl ShoalingCase {
    /// Create a case, deriving L₀ from the period.
    pub fn new(depth: f64, tp: f64, hs: f64) -> Self {
        Self {
            depth,
            tp,
            hs,
            l0: deep_water_wavelength(tp),
        }
    }

    /// Override the deep-water wave length.
    pub fn with_deep_water_wavelength(mut self, l0: f64) -> Self {
        self.l0 = l0;
        self
    }

    /// Depth regime of this case.
    pub fn regime(&self) -> Option<WaterDepthRegime> {
        WaterDepthRegime::classify(self.depth, self.l0)
    }
}

/// Deep-water wave heights assuming every case is in intermediate water.
///
/// The wave number uses the explicit Padé approximation of the dispersion
/// relation rather than an iterative solve.
///
/// # Errors
/// - `InconsistentLength` if the slices differ in length
/// - `DeepWaterWaves` if any case has h > L₀/2
///
/// Shallow cases (h < L₀/50) are outside the theory's range; they are still
/// computed, and a warning is logged.
pub fn reverse_shoal_intermediate(
    depth: &[f64],
    l0: &[f64],
    tp: &[f64],
    hs: &[f64],
) -> Result<Vec<f64>> {
    let n = depth.len();
    for (field, len) in [("l0", l0.len()), ("tp", tp.len()), ("hs", hs.len())] {
        if len != n {
            return Err(RunupError::InconsistentLength {
                field,
                expected: n,
                found: len,
            });
        }
    }

    let n_deep = depth
        .iter()
        .zip(l0)
        .filter(|&(&h, &l)| h > 0.5 * l)
        .count();
    if n_deep > 0 {
        return Err(RunupError::DeepWaterWaves { count: n_deep });
    }

    let n_shallow = depth
        .iter()
        .zip(l0)
        .filter(|&(&h, &l)| h < l / 50.0)
        .count();
    if n_shallow > 0 {
        warn!(
            count = n_shallow,
            "shallow water waves detected (h < L0/50); intermediate-depth shoaling is outside its range"
        );
    }

    Ok((0..n)
        .map(|i| intermediate_deep_water_height(depth[i], tp[i], hs[i]))
        .collect())
}

fn intermediate_deep_water_height(depth: f64, tp: f64, hs: f64) -> f64 {
    let y = 4.03 * depth / (tp * tp);
    let denom = 1.0
        + 0.666 * y
        + 0.355 * y.powi(2)
        + 0.161 * y.powi(3)
        + 0.0632 * y.powi(4)
        + 0.0218 * y.powi(5)
        + 0.00564 * y.powi(6);
    let kh = (y * y + y / denom).sqrt();

    let n = 0.5 * (1.0 + 2.0 * kh / (2.0 * kh).sinh());
    let cg = G * tp / (2.0 * PI) * kh.tanh() * n;
    let cg0 = 0.25 * G * tp / PI;

    let ks = (cg0 / cg).sqrt();
    hs / ks
}

/// Deep-water wave heights for a mix of depth regimes.
///
/// - deep: the height is already a deep-water height and is returned as is
/// - intermediate: reverse shoaled
/// - shallow or unclassifiable: NaN
pub fn reverse_shoal(cases: &[ShoalingCase]) -> Vec<f64> {
    let heights: Vec<f64> = cases
        .iter()
        .map(|case| match case.regime() {
            Some(WaterDepthRegime::Deep) => case.hs,
            Some(WaterDepthRegime::Intermediate) => {
                intermediate_deep_water_height(case.depth, case.tp, case.hs)
            }
            Some(WaterDepthRegime::Shallow) | None => f64::NAN,
        })
        .collect();

    debug!(
        n_cases = cases.len(),
        n_missing = heights.iter().filter(|h| h.is_nan()).count(),
        "reverse shoaled wave heights"
    );
    heights
}
