//! Normalized, immutable wave state.

use crate::types::Estimate;

/// Per-case wave and beach parameters after normalization.
///
/// Every sequence has the same length (the number of cases, ≥ 1). The
/// Iribarren number ζ = β / √(Hs / Lp) is computed once at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveState {
    hs: Vec<f64>,
    beta: Vec<f64>,
    tp: Vec<f64>,
    lp: Vec<f64>,
    depth: Option<Vec<f64>>,
    roughness: Option<Vec<f64>>,
    zeta: Vec<f64>,
    scalar: bool,
}

impl WaveState {
    /// Assemble from already validated, equal-length parts.
    pub(super) fn from_parts(
        hs: Vec<f64>,
        beta: Vec<f64>,
        tp: Vec<f64>,
        lp: Vec<f64>,
        depth: Option<Vec<f64>>,
        roughness: Option<Vec<f64>>,
        scalar: bool,
    ) -> Self {
        let zeta = beta
            .iter()
            .zip(hs.iter().zip(&lp))
            .map(|(&b, (&h, &l))| iribarren(b, h, l))
            .collect();

        Self {
            hs,
            beta,
            tp,
            lp,
            depth,
            roughness,
            zeta,
            scalar,
        }
    }

    /// Number of cases.
    #[inline]
    pub fn len(&self) -> usize {
        self.hs.len()
    }

    /// Always false: construction rejects empty inputs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hs.is_empty()
    }

    /// True if every input was given as a scalar.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.scalar
    }

    /// Significant wave height (m).
    #[inline]
    pub fn hs(&self) -> &[f64] {
        &self.hs
    }

    /// Beach slope.
    #[inline]
    pub fn beta(&self) -> &[f64] {
        &self.beta
    }

    /// Peak wave period (s).
    #[inline]
    pub fn tp(&self) -> &[f64] {
        &self.tp
    }

    /// Peak wave length (m).
    #[inline]
    pub fn lp(&self) -> &[f64] {
        &self.lp
    }

    /// Measurement depth (m), if one was given.
    #[inline]
    pub fn depth(&self) -> Option<&[f64]> {
        self.depth.as_deref()
    }

    /// Hydraulic roughness length (m), if one was given.
    #[inline]
    pub fn roughness(&self) -> Option<&[f64]> {
        self.roughness.as_deref()
    }

    /// Iribarren number ζ.
    #[inline]
    pub fn zeta(&self) -> &[f64] {
        &self.zeta
    }

    /// Map every case through a closure of (Hs, Lp, β).
    pub fn map_cases(&self, f: impl Fn(f64, f64, f64) -> f64) -> Vec<f64> {
        self.hs
            .iter()
            .zip(&self.lp)
            .zip(&self.beta)
            .map(|((&hs, &lp), &beta)| f(hs, lp, beta))
            .collect()
    }

    /// Wrap per-case values in the caller's input shape.
    pub fn present(&self, values: Vec<f64>) -> Estimate {
        Estimate::from_values(values, self.scalar)
    }
}

/// Iribarren (surf similarity) number ζ = β / √(H / L).
#[inline]
pub fn iribarren(beta: f64, hs: f64, lp: f64) -> f64 {
    beta / (hs / lp).sqrt()
}
