//! Ruggiero et al. (2001) runup.
//!
//! Ruggiero, P., Komar, P.D., McDougal, W.G., Marra, J.J., Beach, R.A., 2001.
//! Wave Runup, Extreme Water Levels and the Erosion of Properties Backing
//! Beaches. Journal of Coastal Research 17, 407–419.

use super::{ModelKind, RunupModel};
use crate::error::Result;
use crate::state::{WaveInputs, WaveState};
use crate::types::RunupParameter;

/// Ruggiero et al. (2001) model: R2 = 0.27 √(β Hs Lp).
#[derive(Clone, Debug)]
pub struct Ruggiero2001 {
    state: WaveState,
}

impl Ruggiero2001 {
    pub fn new(inputs: WaveInputs) -> Result<Self> {
        Ok(Self::from_state(inputs.normalize()?))
    }

    pub fn from_state(state: WaveState) -> Self {
        Self { state }
    }

    pub fn r2_values(&self) -> Vec<f64> {
        self.state
            .map_cases(|hs, lp, beta| 0.27 * (beta * hs * lp).sqrt())
    }
}

impl RunupModel for Ruggiero2001 {
    fn kind(&self) -> ModelKind {
        ModelKind::Ruggiero2001
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
