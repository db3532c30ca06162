//! Power et al. (2018) gene-expression-programming runup model.
//!
//! Power, H.E., Gharabaghi, B., Bonakdari, H., Robertson, B., Atkinson, A.L.,
//! Baldock, T.E., 2018. Prediction of wave runup on beaches using
//! Gene-Expression Programming and empirical relationships. Coastal
//! Engineering. <https://doi.org/10.1016/j.coastaleng.2018.10.006>

use std::f64::consts::LN_2;

use super::{ModelKind, RunupModel};
use crate::error::{Result, RunupError};
use crate::state::{WaveInputs, WaveState};
use crate::types::RunupParameter;

/// Power et al. (2018) model. Needs a hydraulic roughness length.
///
/// The closed form contains fractional powers and logs of quantities that
/// can go negative; those cases come out as NaN rather than failing.
#[derive(Clone, Debug)]
pub struct Power2018 {
    state: WaveState,
}

impl Power2018 {
    /// # Errors
    /// `MissingRoughness` if no roughness was supplied, plus any
    /// normalization error.
    pub fn new(inputs: WaveInputs) -> Result<Self> {
        if !inputs.has_roughness() {
            return Err(RunupError::MissingRoughness {
                model: ModelKind::Power2018.name(),
            });
        }
        Self::from_state(inputs.normalize()?)
    }

    pub fn from_state(state: WaveState) -> Result<Self> {
        if state.roughness().is_none() {
            return Err(RunupError::MissingRoughness {
                model: ModelKind::Power2018.name(),
            });
        }
        Ok(Self { state })
    }

    /// R2 = Hs · F(x1, x2, x3) with x1 = Hs/Lp, x2 = β, x3 = r/Hs (Eqn 9).
    pub fn r2_values(&self) -> Vec<f64> {
        let state = &self.state;
        let roughness = state.roughness().unwrap_or_default();
        state
            .hs()
            .iter()
            .zip(state.lp())
            .zip(state.beta())
            .zip(roughness)
            .map(|(((&hs, &lp), &beta), &r)| hs * gep_expression(hs / lp, beta, r / hs))
            .collect()
    }
}

/// Dimensionless runup R2/Hs from the evolved expression.
fn gep_expression(x1: f64, x2: f64, x3: f64) -> f64 {
    let exp = f64::exp;
    let sqrt = f64::sqrt;
    let cbrt = |x: f64| x.powf(1.0 / 3.0);
    let logistic = |x: f64| 1.0 / (1.0 + exp(-x));

    let terms = [
        x2 + ((x3 * 3.0) / exp(-5.0)) * ((3.0 * x3) * x3),
        (((x1 + x3) - 2.0) - (x3 - x2)) + ((x2 - x1) - x3),
        (x3.powf(x1) - cbrt(x3)) - exp(x2).powf(x1 * 3.0),
        sqrt(((x3 + x1) - x2) - (x2 + x3.log10())),
        (x2.powi(2) / cbrt(x1)).powf(cbrt(x1)) - sqrt(x3),
        (x2 + cbrt(x3 / x1)) + (LN_2 - logistic(x2 + x3)),
        (sqrt(x3) - 12.0 * x2.powi(2)).powi(2),
        (x3 * -5.0).powi(2).powi(2) + ((x3 + x3) * x1) / x2.powi(2),
        (sqrt(x2.powi(2) + cbrt(x3)) + cbrt(x2 + 3.0)).ln(),
        ((x1 / x3) * -25.0) * x3.powi(2) - logistic(x2 + x3).log10(),
        x1.powf(x3),
        exp(-((x3 / x1).powf(exp(4.0)) + exp(x3).powi(3)).powi(2)),
        exp((x2 - x3).ln() - exp(-(-1.0 + x1).powi(2)).ln()),
        (2.0 * (((x3 / x2) - x2) - (0.0 - x1))).powi(2),
        2.0 * ((((-5.0 * x3) + x1) * (2.0 - x3)) - 2.0),
        (2.0 * (((x3 / x2) - x2) - (0.0 - x1))).powi(2),
        (((-5.0 + x1) - x2) * (x2 - x3)) * ((x1 - x2) + 4f64.powi(-5)),
        exp(-(x2 + (-5.0 - x1)).powi(2)) + (x2 + 5.0) * x3.powi(2),
        sqrt(logistic(
            (exp(x1) - exp(-(x3 + x3).powi(2))) + (x1.powf(x3) - x3 * 4.0),
        )),
        exp(-(exp(-((sqrt(x3) * 4.0) + logistic(x2 + 2.0)).powi(2)).powi(2) + x1).powi(2))
            .powi(3),
    ];

    terms.iter().sum()
}

impl RunupModel for Power2018 {
    fn kind(&self) -> ModelKind {
        ModelKind::Power2018
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn r2(inputs: WaveInputs) -> f64 {
        Power2018::new(inputs)
            .unwrap()
            .r2()
            .unwrap()
            .as_scalar()
            .unwrap()
    }

    #[test]
    fn test_reflective() {
        let inputs = WaveInputs::new(4.0, 0.1).with_period(11.0).with_roughness(0.00075);
        assert_abs_diff_eq!(r2(inputs), 4.79, epsilon = 0.01);
    }

    #[test]
    fn test_dissipative() {
        let inputs = WaveInputs::new(4.0, 0.001).with_period(11.0).with_roughness(0.00075);
        assert_abs_diff_eq!(r2(inputs), 33.75, epsilon = 0.01);
    }

    #[test]
    fn test_low_wave_conditions() {
        let inputs = WaveInputs::new(1.0, 0.07).with_period(8.0).with_roughness(0.00075);
        assert_abs_diff_eq!(r2(inputs), 1.12, epsilon = 0.01);
    }

    #[test]
    fn test_list_input() {
        let model = Power2018::new(
            WaveInputs::new([1.0, 2.0], [0.05, 0.1])
                .with_wavelength([100.0, 200.0])
                .with_roughness([0.00075, 0.00075]),
        )
        .unwrap();
        let r2 = model.r2().unwrap();
        assert_eq!(r2.len(), 2);
        assert_abs_diff_eq!(r2[0], 0.922, epsilon = 0.1);
        assert_abs_diff_eq!(r2[1], 2.88, epsilon = 0.1);
    }

    #[test]
    fn test_missing_roughness() {
        let err = Power2018::new(WaveInputs::new(4.0, 0.1).with_period(11.0)).unwrap_err();
        assert_eq!(err, RunupError::MissingRoughness { model: "Power2018" });
    }

    #[test]
    fn test_negative_base_propagates_nan() {
        // Slope smaller than r/Hs makes ln(x2 - x3) undefined
        let inputs = WaveInputs::new(1.0, 0.0001).with_period(8.0).with_roughness(0.01);
        assert!(r2(inputs).is_nan());
    }

    #[test]
    fn test_no_setup_or_swash() {
        let model = Power2018::new(
            WaveInputs::new(4.0, 0.1).with_period(11.0).with_roughness(0.00075),
        )
        .unwrap();
        assert!(model.setup().is_none());
        assert!(model.swash().is_none());
    }
}
