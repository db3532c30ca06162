//! Holman (1986) extreme runup statistics.
//!
//! Holman, R.A., 1986. Extreme value statistics for wave run-up on a natural
//! beach. Coastal Engineering 9, 527–544.
//! <https://doi.org/10.1016/0378-3839(86)90002-5>

use super::{ModelKind, RunupModel};
use crate::error::Result;
use crate::state::{WaveInputs, WaveState};
use crate::types::RunupParameter;

/// Holman (1986) model: R2 and setup.
#[derive(Clone, Debug)]
pub struct Holman1986 {
    state: WaveState,
}

impl Holman1986 {
    pub fn new(inputs: WaveInputs) -> Result<Self> {
        Ok(Self::from_state(inputs.normalize()?))
    }

    pub fn from_state(state: WaveState) -> Self {
        Self { state }
    }

    /// R2 = 0.83 tan(β) √(Hs Lp) + 0.2 Hs
    pub fn r2_values(&self) -> Vec<f64> {
        self.state
            .map_cases(|hs, lp, beta| 0.83 * beta.tan() * (hs * lp).sqrt() + 0.2 * hs)
    }

    /// η̄ = 0.2 Hs
    pub fn setup_values(&self) -> Vec<f64> {
        self.state.hs().iter().map(|&hs| 0.2 * hs).collect()
    }
}

impl RunupModel for Holman1986 {
    fn kind(&self) -> ModelKind {
        ModelKind::Holman1986
    }

    fn state(&self) -> &WaveState {
        &self.state
    }

    fn evaluate(&self, param: RunupParameter) -> Option<Vec<f64>> {
        match param {
            RunupParameter::R2 => Some(self.r2_values()),
            RunupParameter::Setup => Some(self.setup_values()),
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
        let model = Holman1986::new(WaveInputs::new(4.0, 0.1).with_period(11.0)).unwrap();
        assert_abs_diff_eq!(model.r2_values()[0], 3.09, epsilon = 0.01);
        assert_abs_diff_eq!(model.setup_values()[0], 0.8, epsilon = 0.01);
    }

    #[test]
    fn test_dissipative() {
        let model = Holman1986::new(WaveInputs::new(4.0, 0.001).with_period(11.0)).unwrap();
        assert_abs_diff_eq!(model.r2_values()[0], 0.82, epsilon = 0.01);
        assert_abs_diff_eq!(model.setup_values()[0], 0.8, epsilon = 0.01);
    }

    #[test]
    fn test_list_input() {
        let model = Holman1986::new(
            WaveInputs::new([1.0, 2.0], [0.05, 0.1]).with_wavelength([100.0, 200.0]),
        )
        .unwrap();
        let r2 = model.r2().unwrap();
        let setup = model.setup().unwrap();
        assert_abs_diff_eq!(r2[0], 0.62, epsilon = 0.1);
        assert_abs_diff_eq!(r2[1], 2.06, epsilon = 0.1);
        assert_abs_diff_eq!(setup[0], 0.2, epsilon = 0.01);
        assert_abs_diff_eq!(setup[1], 0.4, epsilon = 0.01);
    }
}
