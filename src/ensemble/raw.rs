//! Per-model predictions without combining.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::EnsembleTable;
use crate::error::{Result, RunupError};
use crate::models::{ModelKind, RunupRegressor};
use crate::state::{WaveInputs, WaveState};
use crate::types::RunupParameter;

/// Runs every runup model against one set of inputs.
///
/// Inputs are normalized once, at construction, so input errors surface
/// here rather than on the first `estimate` call. Every query builds fresh
/// model instances and discards them afterwards.
///
/// - Power2018 without a roughness length contributes a NaN column.
/// - Beuzen2019 contributes only when a regressor is attached.
#[derive(Clone)]
pub struct EnsembleRaw {
    state: WaveState,
    models: Vec<ModelKind>,
    regressor: Option<Arc<dyn RunupRegressor>>,
}

impl EnsembleRaw {
    /// # Errors
    /// Any normalization error from `inputs`.
    pub fn new(inputs: WaveInputs) -> Result<Self> {
        Ok(Self {
            state: inputs.normalize()?,
            models: ModelKind::ALL.to_vec(),
            regressor: None,
        })
    }

    /// Attach the pre-trained regressor backing Beuzen2019.
    pub fn with_regressor(mut self, regressor: Arc<dyn RunupRegressor>) -> Self {
        self.regressor = Some(regressor);
        self
    }

    /// Leave a model out of every estimate.
    pub fn without_model(mut self, kind: ModelKind) -> Self {
        self.models.retain(|&k| k != kind);
        self
    }

    /// Models consulted, in column order.
    pub fn models(&self) -> &[ModelKind] {
        &self.models
    }

    /// Normalized wave state shared by every model.
    pub fn state(&self) -> &WaveState {
        &self.state
    }

    /// Table of `param` from every model that implements it.
    ///
    /// # Errors
    /// `InvalidParameter` unless `param` is one of R2, setup, sig, sinc,
    /// swash.
    pub fn estimate(&self, param: &str) -> Result<EnsembleTable> {
        let param: RunupParameter = param.parse()?;
        Ok(self.estimate_parameter(param))
    }

    /// Typed form of [`estimate`](Self::estimate).
    pub fn estimate_parameter(&self, param: RunupParameter) -> EnsembleTable {
        let n = self.state.len();
        let mut table = EnsembleTable::new(param, n);

        for &kind in &self.models {
            if !kind.supports(param) {
                continue;
            }

            let values = match kind.build(&self.state, self.regressor.as_ref()) {
                Ok(model) => match model.evaluate(param) {
                    Some(values) => values,
                    None => continue,
                },
                Err(RunupError::MissingRoughness { model }) => {
                    debug!(model, "no roughness length; column filled with NaN");
                    vec![f64::NAN; n]
                }
                Err(err) => {
                    debug!(model = kind.name(), %err, "model skipped");
                    continue;
                }
            };
            table.push(kind, values);
        }

        debug!(
            parameter = param.name(),
            n_rows = n,
            n_columns = table.n_columns(),
            "ensemble estimate"
        );
        table
    }
}

impl fmt::Debug for EnsembleRaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnsembleRaw")
            .field("state", &self.state)
            .field("models", &self.models)
            .field("has_regressor", &self.regressor.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FnRegressor;

    fn ensemble() -> EnsembleRaw {
        EnsembleRaw::new(WaveInputs::new(4.0, 0.1).with_period(11.0)).unwrap()
    }

    #[test]
    fn test_r2_columns() {
        let table = ensemble().estimate("R2").unwrap();
        assert_eq!(
            table.column_names(),
            vec![
                "Stockdon2006_R2",
                "Power2018_R2",
                "Holman1986_R2",
                "Nielsen2009_R2",
                "Ruggiero2001_R2",
                "Vousdoukas2012_R2",
                "Atkinson2017_R2",
                "Senechal2011_R2",
            ]
        );
        assert_eq!(table.n_rows(), 1);
    }

    #[test]
    fn test_power_without_roughness_is_nan_column() {
        let table = ensemble().estimate("R2").unwrap();
        let power = table.column("Power2018_R2").unwrap();
        assert!(power[0].is_nan());
    }

    #[test]
    fn test_power_with_roughness_has_values() {
        let ensemble = EnsembleRaw::new(
            WaveInputs::new(4.0, 0.1)
                .with_period(11.0)
                .with_roughness(0.00075),
        )
        .unwrap();
        let power = ensemble.estimate_parameter(RunupParameter::R2);
        assert!((power.column("Power2018_R2").unwrap()[0] - 4.79).abs() < 0.01);
    }

    #[test]
    fn test_regressor_adds_beuzen_column() {
        let ensemble =
            ensemble().with_regressor(Arc::new(FnRegressor::new(|_: &[f64; 3]| 2.0)));
        let table = ensemble.estimate("R2").unwrap();
        assert_eq!(table.model_column(ModelKind::Beuzen2019), Some(&[2.0][..]));
        assert_eq!(table.n_columns(), 9);
    }

    #[test]
    fn test_setup_columns() {
        let table = ensemble().estimate("setup").unwrap();
        assert_eq!(table.column_names(), vec!["Stockdon2006_setup", "Holman1986_setup"]);
    }

    #[test]
    fn test_swash_columns() {
        let table = ensemble().estimate("swash").unwrap();
        assert_eq!(
            table.column_names(),
            vec!["Stockdon2006_swash", "Passarella2018_swash"]
        );
    }

    #[test]
    fn test_without_model() {
        let table = ensemble()
            .without_model(ModelKind::Power2018)
            .estimate("R2")
            .unwrap();
        assert!(table.column("Power2018_R2").is_none());
        assert_eq!(table.n_columns(), 7);
    }

    #[test]
    fn test_invalid_parameter() {
        assert_eq!(
            ensemble().estimate("not_r2").unwrap_err(),
            RunupError::InvalidParameter("not_r2".into())
        );
    }

    #[test]
    fn test_input_errors_surface_at_construction() {
        assert_eq!(
            EnsembleRaw::new(WaveInputs::new(4.0, 0.1)).unwrap_err(),
            RunupError::MissingWaveLength
        );
    }
}
