//! Mean of all model predictions.

use std::sync::Arc;

use super::{EnsembleRaw, EnsembleSeries};
use crate::error::Result;
use crate::models::{ModelKind, RunupRegressor};
use crate::state::WaveInputs;
use crate::types::RunupParameter;

/// Row-wise mean of [`EnsembleRaw`] predictions.
///
/// The mean for a case is over the models that reported a non-NaN value, so
/// a model without the parameter (or Power2018 without roughness) does not
/// drag the mean toward zero.
#[derive(Clone, Debug)]
pub struct EnsembleMean {
    raw: EnsembleRaw,
}

impl EnsembleMean {
    pub fn new(inputs: WaveInputs) -> Result<Self> {
        Ok(Self {
            raw: EnsembleRaw::new(inputs)?,
        })
    }

    pub fn with_regressor(mut self, regressor: Arc<dyn RunupRegressor>) -> Self {
        self.raw = self.raw.with_regressor(regressor);
        self
    }

    pub fn without_model(mut self, kind: ModelKind) -> Self {
        self.raw = self.raw.without_model(kind);
        self
    }

    /// Underlying raw ensemble.
    pub fn raw(&self) -> &EnsembleRaw {
        &self.raw
    }

    /// Mean of `param` across models, named `mean_{param}`.
    ///
    /// # Errors
    /// `InvalidParameter` for an unknown parameter name.
    pub fn estimate(&self, param: &str) -> Result<EnsembleSeries> {
        let param: RunupParameter = param.parse()?;
        Ok(self.estimate_parameter(param))
    }

    pub fn estimate_parameter(&self, param: RunupParameter) -> EnsembleSeries {
        EnsembleSeries {
            name: format!("mean_{}", param.name()),
            values: self.raw.estimate_parameter(param).row_means(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunupError;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_matches_raw_table() {
        let inputs = WaveInputs::new([3.0, 4.0], [0.09, 0.1]).with_period([10.0, 11.0]);
        let mean = EnsembleMean::new(inputs.clone()).unwrap().estimate("R2").unwrap();
        let table = EnsembleRaw::new(inputs).unwrap().estimate("R2").unwrap();

        assert_eq!(mean.name, "mean_R2");
        assert_eq!(mean.len(), 2);
        for case in 0..2 {
            let row: Vec<f64> = table.row(case).into_iter().filter(|v| !v.is_nan()).collect();
            let expected = row.iter().sum::<f64>() / row.len() as f64;
            assert_relative_eq!(mean[case], expected);
        }
    }

    #[test]
    fn test_invalid_parameter() {
        let mean = EnsembleMean::new(WaveInputs::new(1.0, 0.1).with_period(8.0)).unwrap();
        assert!(matches!(
            mean.estimate("runup"),
            Err(RunupError::InvalidParameter(_))
        ));
    }
}
