//! Beuzen et al. (2019) Gaussian-process runup model.
//!
//! Beuzen, T., Goldstein, E. B., & Splinter, K. D., 2019. Ensemble models from
//! machine learning: an example of wave runup and coastal dune erosion.
//! <https://doi.org/10.5194/nhess-19-2295-2019>
//!
//! The trained regressor is not part of this crate. Callers load it however
//! they like and hand it over as a [`RunupRegressor`].

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use super::{ModelKind, RunupModel};
use crate::error::Result;
use crate::state::{WaveInputs, WaveState};
use crate::types::RunupParameter;

/// A pre-trained predictor of R2 from `[Hs, Tp, beta]` feature rows.
pub trait RunupRegressor: Send + Sync {
    /// Predict one R2 value per feature row.
    fn predict(&self, features: &[[f64; 3]]) -> Vec<f64>;
}

/// Adapts a per-row closure into a [`RunupRegressor`].
///
/// ```
/// use wave_runup::models::{FnRegressor, RunupRegressor};
///
/// let linear = FnRegressor::new(|&[hs, _tp, _beta]: &[f64; 3]| 0.5 * hs);
/// assert_eq!(linear.predict(&[[2.0, 10.0, 0.1]]), vec![1.0]);
/// ```
pub struct FnRegressor<F> {
    f: F,
}

impl<F> FnRegressor<F>
where
    F: Fn(&[f64; 3]) -> f64 + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> RunupRegressor for FnRegressor<F>
where
    F: Fn(&[f64; 3]) -> f64 + Send + Sync,
{
    fn predict(&self, features: &[[f64; 3]]) -> Vec<f64> {
        features.iter().map(&self.f).collect()
    }
}

/// Beuzen et al. (2019) model: R2 from a pre-trained regressor.
#[derive(Clone)]
pub struct Beuzen2019 {
    state: WaveState,
    regressor: Arc<dyn RunupRegressor>,
}

impl Beuzen2019 {
    pub fn new(inputs: WaveInputs, regressor: Arc<dyn RunupRegressor>) -> Result<Self> {
        Ok(Self::from_state(inputs.normalize()?, regressor))
    }

    pub fn from_state(state: WaveState, regressor: Arc<dyn RunupRegressor>) -> Self {
        Self { state, regressor }
    }

    /// Regressor input rows, `[Hs, Tp, beta]` per case.
    pub fn features(&self) -> Vec<[f64; 3]> {
        let state = &self.state;
        state
            .hs()
            .iter()
            .zip(state.tp())
            .zip(state.beta())
            .map(|((&hs, &tp), &beta)| [hs, tp, beta])
            .collect()
    }

    /// Predicted R2 per case.
    ///
    /// A regressor that returns the wrong number of predictions yields NaN
    /// for every case.
    pub fn r2_values(&self) -> Vec<f64> {
        let predictions = self.regressor.predict(&self.features());
        if predictions.len() == self.state.len() {
            predictions
        } else {
            warn!(
                expected = self.state.len(),
                found = predictions.len(),
                "regressor returned wrong number of predictions"
            );
            vec![f64::NAN; self.state.len()]
        }
    }
}

impl fmt::Debug for Beuzen2019 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Beuzen2019")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl RunupModel for Beuzen2019 {
    fn kind(&self) -> ModelKind {
        ModelKind::Beuzen2019
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
    use crate::types::Estimate;

    struct Fixed(Vec<f64>);

    impl RunupRegressor for Fixed {
        fn predict(&self, _features: &[[f64; 3]]) -> Vec<f64> {
            self.0.clone()
        }
    }

    #[test]
    fn test_features_are_hs_tp_beta() {
        let regressor = Arc::new(FnRegressor::new(|row: &[f64; 3]| row[0] * 100.0 + row[1]));
        let model = Beuzen2019::new(
            WaveInputs::new([4.0, 2.0], [0.1, 0.05]).with_period([11.0, 8.0]),
            regressor,
        )
        .unwrap();
        assert_eq!(model.features(), vec![[4.0, 11.0, 0.1], [2.0, 8.0, 0.05]]);
        assert_eq!(model.r2().unwrap(), Estimate::Series(vec![411.0, 208.0]));
    }

    #[test]
    fn test_scalar_inputs_collapse() {
        let model = Beuzen2019::new(
            WaveInputs::new(4.0, 0.1).with_period(11.0),
            Arc::new(Fixed(vec![2.08])),
        )
        .unwrap();
        assert_eq!(model.r2(), Some(Estimate::Scalar(2.08)));
    }

    #[test]
    fn test_wrong_prediction_count_is_nan() {
        let model = Beuzen2019::new(
            WaveInputs::new([4.0, 3.0], [0.1, 0.1]).with_period([11.0, 9.0]),
            Arc::new(Fixed(vec![2.08])),
        )
        .unwrap();
        let r2 = model.r2_values();
        assert_eq!(r2.len(), 2);
        assert!(r2.iter().all(|v| v.is_nan()));
    }
}
