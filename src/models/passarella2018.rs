//! Passarella et al. (2018) genetic-programming swash predictor.
//!
//! Passarella, M., E. B. Goldstein, S. De Muro, G. Coco, 2018. The use of
//! genetic programming to develop a predictor of swash excursion on sandy
//! beaches. Nat. Hazards Earth Syst. Sci., 18, 599-611.
//! <https://doi.org/10.5194/nhess-18-599-2018>

use super::{ModelKind, RunupModel};
use crate::error::Result;
use crate::state::{WaveInputs, WaveState};
use crate::types::RunupParameter;

/// Passarella et al. (2018) model. Swash only: no R2.
#[derive(Clone, Debug)]
pub struct Passarella2018 {
    state: WaveState,
}

impl Passarella2018 {
    pub fn new(inputs: WaveInputs) -> Result<Self> {
        Ok(Self::from_state(inputs.normalize()?))
    }

    pub fn from_state(state: WaveState) -> Self {
        Self { state }
    }

    /// Infragravity swash, Eqn (14):
    ///
    /// S_ig = β / (0.028 + β) − 1 / (2412.255 β − 5.521 β Lp)
    ///        + (Hs − 0.711) / (0.465 + 173.470 Hs / Lp)
    pub fn sig_values(&self) -> Vec<f64> {
        self.state.map_cases(|hs, lp, beta| {
            beta / (0.028 + beta) + (-1.0 / (2412.255 * beta - 5.521 * beta * lp))
                + (hs - 0.711) / (0.465 + 173.470 * (hs / lp))
        })
    }

    /// Total swash, Eqn (12):
    ///
    /// S = 146.737 β² + Tp Hs³ / (5.800 + 10.595 Hs³) − 4397.838 β⁴
    pub fn swash_values(&self) -> Vec<f64> {
        let state = &self.state;
        state
            .hs()
            .iter()
            .zip(state.tp())
            .zip(state.beta())
            .map(|((&hs, &tp), &beta)| {
                let hs3 = hs.powi(3);
                146.737 * beta.powi(2) + (tp * hs3) / (5.800 + 10.595 * hs3)
                    - 4397.838 * beta.powi(4)
            })
            .collect()
    }
}

impl RunupModel for Passarella2018 {
    fn kind(&self) -> ModelKind {
        ModelKind::Passarella2018
    }

    fn state(&self) -> &WaveState {
        &self.state
    }

    fn evaluate(&self, param: RunupParameter) -> Option<Vec<f64>> {
        match param {
            RunupParameter::Sig => Some(self.sig_values()),
            RunupParameter::Swash => Some(self.swash_values()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reflective() {
        let model = Passarella2018::new(WaveInputs::new(4.0, 0.1).with_period(11.0)).unwrap();
        assert_abs_diff_eq!(model.sig_values()[0], 1.57, epsilon = 0.01);
        assert_abs_diff_eq!(model.swash_values()[0], 2.05, epsilon = 0.01);
    }

    #[test]
    fn test_dissipative() {
        let model = Passarella2018::new(WaveInputs::new(4.0, 0.001).with_period(11.0)).unwrap();
        assert_abs_diff_eq!(model.sig_values()[0], 0.10, epsilon = 0.01);
        assert_abs_diff_eq!(model.swash_values()[0], 1.02, epsilon = 0.01);
    }

    #[test]
    fn test_r2_not_applicable() {
        let model = Passarella2018::new(WaveInputs::new(4.0, 0.1).with_period(11.0)).unwrap();
        assert!(model.r2().is_none());
    }
}
