//! Atkinson et al. (2017) runup for non-truncated beaches.
//!
//! Atkinson, A.L., Power, H.E., Moura, T., Hammond, T., Callaghan, D.P.,
//! Baldock, T.E., 2017. Assessment of runup predictions by empirical models
//! on non-truncated beaches on the south-east Australian coast. Coastal
//! Engineering 119, 15–31. <https://doi.org/10.1016/j.coastaleng.2016.10.001>

use super::{ModelKind, RunupModel};
use crate::error::Result;
use crate::state::{WaveInputs, WaveState};
use crate::types::RunupParameter;

/// Atkinson et al. (2017) model: R2 = 0.92 tan(β) √(Hs Lp) + 0.16 Hs
#[derive(Clone, Debug)]
pub struct Atkinson2017 {
    state: WaveState,
}

impl Atkinson2017 {
    pub fn new(inputs: WaveInputs) -> Result<Self> {
        Ok(Self::from_state(inputs.normalize()?))
    }

    pub fn from_state(state: WaveState) -> Self {
        Self { state }
    }

    pub fn r2_values(&self) -> Vec<f64> {
        self.state
            .map_cases(|hs, lp, beta| 0.92 * beta.tan() * (hs * lp).sqrt() + 0.16 * hs)
    }
}

impl RunupModel for Atkinson2017 {
    fn kind(&self) -> ModelKind {
        ModelKind::Atkinson2017
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
