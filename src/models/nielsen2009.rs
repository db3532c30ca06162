//! Nielsen (2009) runup.
//!
//! P. Nielsen, Coastal and Estuarine Processes, Singapore, World Scientific,
//! 2009.

use super::{ModelKind, RunupModel};
use crate::error::Result;
use crate::state::{WaveInputs, WaveState};
use crate::types::RunupParameter;

/// Nielsen (2009) model.
///
/// R2 = 1.98 L_R, with the runup scale L_R depending on slope:
///
/// - L_R = 0.6 tan(β) √(Hs Lp) for tan(β) ≥ 0.1
/// - L_R = 0.06 √(Hs Lp) otherwise
///
/// The tide-varying reference level Z₁₀₀ of the original relation is left
/// for the caller to add.
#[derive(Clone, Debug)]
pub struct Nielsen2009 {
    state: WaveState,
}

impl Nielsen2009 {
    pub fn new(inputs: WaveInputs) -> Result<Self> {
        Ok(Self::from_state(inputs.normalize()?))
    }

    pub fn from_state(state: WaveState) -> Self {
        Self { state }
    }

    pub fn r2_values(&self) -> Vec<f64> {
        self.state.map_cases(|hs, lp, beta| {
            let tan_beta = beta.tan();
            let lr = if tan_beta < 0.1 {
                0.06 * (hs * lp).sqrt()
            } else {
                0.6 * tan_beta * (hs * lp).sqrt()
            };
            1.98 * lr
        })
    }
}

impl RunupModel for Nielsen2009 {
    fn kind(&self) -> ModelKind {
        ModelKind::Nielsen2009
    }

    fn state(&self) -> &WaveState {
        &self.state
    }

    fn evaluate(&self, param: RunupParameter) -> Option<Vec<f64>> {
        match param {
            RunupParameter::R2 => Some(self.r2_values()),
            _ => None,
        }
    }
}
