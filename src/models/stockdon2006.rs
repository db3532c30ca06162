//! Stockdon et al. (2006) runup, setup and swash parameterization.
//!
//! Stockdon, H. F., Holman, R. A., Howd, P. A., & Sallenger, A. H. (2006).
//! Empirical parameterization of setup, swash, and runup. Coastal Engineering,
//! 53(7), 573–588. <https://doi.org/10.1016/j.coastaleng.2005.12.005>

use super::{ModelKind, RunupModel};
use crate::error::Result;
use crate::state::{WaveInputs, WaveState};
use crate::types::RunupParameter;

/// Iribarren number below which a beach is treated as dissipative.
pub const DISSIPATIVE_ZETA: f64 = 0.3;

/// Stockdon et al. (2006) model.
///
/// The only model here with all five parameters. R2 switches formula on the
/// Iribarren number, case by case, so the result jumps at ζ = 0.3.
#[derive(Clone, Debug)]
pub struct Stockdon2006 {
    state: WaveState,
}

impl Stockdon2006 {
    pub fn new(inputs: WaveInputs) -> Result<Self> {
        Ok(Self::from_state(inputs.normalize()?))
    }

    pub fn from_state(state: WaveState) -> Self {
        Self { state }
    }

    /// R2 from Eqn (19), or Eqn (18) on dissipative beaches (ζ < 0.3):
    ///
    /// - R2 = 1.1 (0.35 β √(Hs Lp) + √(Hs Lp (0.563 β² + 0.004)) / 2)
    /// - R2 = 0.043 √(Hs Lp)
    pub fn r2_values(&self) -> Vec<f64> {
        let state = &self.state;
        state
            .hs()
            .iter()
            .zip(state.lp())
            .zip(state.beta())
            .zip(state.zeta())
            .map(|(((&hs, &lp), &beta), &zeta)| {
                let hl = hs * lp;
                if zeta < DISSIPATIVE_ZETA {
                    0.043 * hl.sqrt()
                } else {
                    1.1 * (0.35 * beta * hl.sqrt()
                        + (hl * (0.563 * beta * beta + 0.004)).sqrt() / 2.0)
                }
            })
            .collect()
    }

    /// Setup, Eqn (10): η̄ = 0.35 β √(Hs Lp)
    pub fn setup_values(&self) -> Vec<f64> {
        self.state
            .map_cases(|hs, lp, beta| 0.35 * beta * (hs * lp).sqrt())
    }

    /// Incident swash, Eqn (11): S_inc = 0.75 β √(Hs Lp)
    pub fn sinc_values(&self) -> Vec<f64> {
        self.state
            .map_cases(|hs, lp, beta| 0.75 * beta * (hs * lp).sqrt())
    }

    /// Infragravity swash, Eqn (12): S_ig = 0.06 √(Hs Lp)
    pub fn sig_values(&self) -> Vec<f64> {
        self.state.map_cases(|hs, lp, _| 0.06 * (hs * lp).sqrt())
    }

    /// Total swash, Eqn (7): S = √(S_inc² + S_ig²)
    pub fn swash_values(&self) -> Vec<f64> {
        self.sinc_values()
            .into_iter()
            .zip(self.sig_values())
            .map(|(sinc, sig)| (sinc * sinc + sig * sig).sqrt())
            .collect()
    }
}

impl RunupModel for Stockdon2006 {
    fn kind(&self) -> ModelKind {
        ModelKind::Stockdon2006
    }

    fn state(&self) -> &WaveState {
        &self.state
    }

    fn evaluate(&self, param: RunupParameter) -> Option<Vec<f64>> {
        Some(match param {
            RunupParameter::R2 => self.r2_values(),
            RunupParameter::Setup => self.setup_values(),
            RunupParameter::Sinc => self.sinc_values(),
            RunupParameter::Sig => self.sig_values(),
            RunupParameter::Swash => self.swash_values(),
        })
    }
}
