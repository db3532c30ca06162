//! Senechal et al. (2011) storm runup.
//!
//! Senechal, N., Coco, G., Bryan, K.R., Holman, R.A., 2011. Wave runup during
//! extreme storm conditions. Journal of Geophysical Research 116.
//! <https://doi.org/10.1029/2010JC006819>

use super::{ModelKind, RunupModel};
use crate::error::Result;
use crate::state::{WaveInputs, WaveState};
use crate::types::RunupParameter;

/// Senechal et al. (2011) model: R2 and infragravity swash.
///
/// R2 saturates with wave height and ignores slope entirely.
#[derive(Clone, Debug)]
pub struct Senechal2011 {
    state: WaveState,
}

impl Senechal2011 {
    pub fn new(inputs: WaveInputs) -> Result<Self> {
        Ok(Self::from_state(inputs.normalize()?))
    }

    pub fn from_state(state: WaveState) -> Self {
        Self { state }
    }

    /// R2 = 2.14 tanh(0.4 Hs)
    pub fn r2_values(&self) -> Vec<f64> {
        self.state
            .hs()
            .iter()
            .map(|&hs| 2.14 * (0.4 * hs).tanh())
            .collect()
    }

    /// S_ig = 0.05 √(Hs Lp)
    pub fn sig_values(&self) -> Vec<f64> {
        self.state.map_cases(|hs, lp, _| 0.05 * (hs * lp).sqrt())
    }
}

impl RunupModel for Senechal2011 {
    fn kind(&self) -> ModelKind {
        ModelKind::Senechal2011
    }

    fn state(&self) -> &WaveState {
        &self.state
    }

    fn evaluate(&self, param: RunupParameter) -> Option<Vec<f64>> {
        match param {
            RunupParameter::R2 => Some(self.r2_values()),
            RunupParameter::Sig => Some(self.sig_values()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_slope_independent() {
        for beta in [0.1, 0.001] {
            let model = Senechal2011::new(WaveInputs::new(4.0, beta).with_period(11.0)).unwrap();
            assert_abs_diff_eq!(model.r2_values()[0], 1.97, epsilon = 0.01);
            assert_abs_diff_eq!(model.sig_values()[0], 1.37, epsilon = 0.01);
        }
    }

    #[test]
    fn test_no_setup_sinc_or_swash() {
        let model = Senechal2011::new(WaveInputs::new(4.0, 0.1).with_period(11.0)).unwrap();
        assert!(model.setup().is_none());
        assert!(model.sinc().is_none());
        assert!(model.swash().is_none());
    }
}
