//! Vousdoukas et al. (2012) runup for steep mesotidal beaches.
//!
//! Vousdoukas, M.I., Wziatek, D., Almeida, L.P., 2012. Coastal vulnerability
//! assessment based on video wave run-up observations at a mesotidal,
//! steep-sloped beach. Ocean Dynamics 62, 123–137.
//! <https://doi.org/10.1007/s10236-011-0480-x>

use super::{ModelKind, RunupModel};
use crate::error::Result;
use crate::state::{WaveInputs, WaveState};
use crate::types::RunupParameter;

/// Vousdoukas et al. (2012) model:
/// R2 = 0.53 β √(Hs Lp) + 0.58 tan(β) Hs + 0.45
#[derive(Clone, Debug)]
pub struct Vousdoukas2012 {
    state: WaveState,
}

impl Vousdoukas2012 {
    pub fn new(inputs: WaveInputs) -> Result<Self> {
        Ok(Self::from_state(inputs.normalize()?))
    }

    pub fn from_state(state: WaveState) -> Self {
        Self { state }
    }

    pub fn r2_values(&self) -> Vec<f64> {
        self.state.map_cases(|hs, lp, beta| {
            0.53 * beta * (hs * lp).sqrt() + 0.58 * beta.tan() * hs + 0.45
        })
    }
}

impl RunupModel for Vousdoukas2012 {
    fn kind(&self) -> ModelKind {
        ModelKind::Vousdoukas2012
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
