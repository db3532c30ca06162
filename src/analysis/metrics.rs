//! Comparison metrics for predicted against observed runup.

use crate::error::{Result, RunupError};

const VARIANCE_FLOOR: f64 = 1e-10;

/// Statistical comparison between predictions and observations.
///
/// Pairs in which either value is NaN are left out, so a column from a
/// model that could not run on some cases is still comparable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonMetrics {
    /// Root mean square error: sqrt(mean((pred - obs)²))
    pub rmse: f64,
    /// Mean absolute error: mean(|pred - obs|)
    pub mae: f64,
    /// Mean error: mean(pred - obs)
    pub bias: f64,
    /// Pearson correlation coefficient [-1, 1]
    pub correlation: f64,
    /// Murphy skill score: 1 - MSE / Var(obs)
    pub skill_score: f64,
    /// max(|pred - obs|)
    pub max_error: f64,
    /// Pairs used
    pub n_points: usize,
}

impl ComparisonMetrics {
    /// Compare `predicted` against `observed`, case by case.
    ///
    /// With no usable pairs every metric is NaN and `n_points` is zero.
    ///
    /// # Errors
    /// `InconsistentLength` if the two series differ in length.
    pub fn compute(predicted: &[f64], observed: &[f64]) -> Result<Self> {
        if predicted.len() != observed.len() {
            return Err(RunupError::InconsistentLength {
                field: "observed",
                expected: predicted.len(),
                found: observed.len(),
            });
        }

        let (pred, obs): (Vec<f64>, Vec<f64>) = predicted
            .iter()
            .zip(observed)
            .filter(|&(p, o)| !p.is_nan() && !o.is_nan())
            .map(|(&p, &o)| (p, o))
            .unzip();

        let n = pred.len();
        if n == 0 {
            return Ok(Self::empty());
        }
        let nf = n as f64;

        let pred_mean = pred.iter().sum::<f64>() / nf;
        let obs_mean = obs.iter().sum::<f64>() / nf;

        let errors: Vec<f64> = pred.iter().zip(&obs).map(|(p, o)| p - o).collect();

        let bias = errors.iter().sum::<f64>() / nf;
        let mse = errors.iter().map(|e| e * e).sum::<f64>() / nf;
        let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / nf;
        let max_error = errors.iter().map(|e| e.abs()).fold(0.0, f64::max);

        let obs_variance = obs.iter().map(|o| (o - obs_mean).powi(2)).sum::<f64>() / nf;
        let pred_variance = pred.iter().map(|p| (p - pred_mean).powi(2)).sum::<f64>() / nf;
        let covariance = pred
            .iter()
            .zip(&obs)
            .map(|(p, o)| (p - pred_mean) * (o - obs_mean))
            .sum::<f64>()
            / nf;

        let skill_score = if obs_variance > VARIANCE_FLOOR {
            1.0 - mse / obs_variance
        } else if mse < VARIANCE_FLOOR {
            1.0
        } else {
            f64::NEG_INFINITY
        };

        let correlation = if pred_variance > VARIANCE_FLOOR && obs_variance > VARIANCE_FLOOR {
            covariance / (pred_variance.sqrt() * obs_variance.sqrt())
        } else if pred_variance <= VARIANCE_FLOOR && obs_variance <= VARIANCE_FLOOR {
            1.0
        } else {
            0.0
        };

        Ok(Self {
            rmse: mse.sqrt(),
            mae,
            bias,
            correlation,
            skill_score,
            max_error,
            n_points: n,
        })
    }

    fn empty() -> Self {
        Self {
            rmse: f64::NAN,
            mae: f64::NAN,
            bias: f64::NAN,
            correlation: f64::NAN,
            skill_score: f64::NAN,
            max_error: f64::NAN,
            n_points: 0,
        }
    }

    /// Correlation above 0.95.
    pub fn is_highly_correlated(&self) -> bool {
        self.correlation > 0.95
    }

    /// Skill score above 0.9.
    pub fn is_skillful(&self) -> bool {
        self.skill_score > 0.9
    }
}
