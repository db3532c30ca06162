//! Raw model inputs and their normalization.

use tracing::debug;

use super::WaveState;
use crate::error::{Result, RunupError};
use crate::types::Input;
use crate::waves::{
    deep_water_period, deep_water_wavelength, period_from_wavelength, wavelengths,
    DispersionConfig,
};

/// Raw inputs for a runup model or ensemble.
///
/// # Example
///
/// ```
/// use wave_runup::WaveInputs;
///
/// let state = WaveInputs::new(4.0, 0.1)
///     .with_period(11.0)
///     .normalize()
///     .unwrap();
/// assert_eq!(state.len(), 1);
/// assert!(state.is_scalar());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WaveInputs {
    /// Significant wave height (m), deep water.
    pub hs: Input,
    /// Beach slope (tan of the foreshore angle).
    pub beta: Input,
    /// Peak wave period (s).
    pub tp: Option<Input>,
    /// Peak wave length (m).
    pub lp: Option<Input>,
    /// Depth of the wave measurement (m). Deep water when absent.
    pub depth: Option<Input>,
    /// Hydraulic roughness length (m), roughly 2.5 D50.
    pub roughness: Option<Input>,
    /// Settings for the finite-depth dispersion solve.
    pub dispersion: DispersionConfig,
}

impl WaveInputs {
    /// Start from wave height and beach slope.
    pub fn new(hs: impl Into<Input>, beta: impl Into<Input>) -> Self {
        Self {
            hs: hs.into(),
            beta: beta.into(),
            tp: None,
            lp: None,
            depth: None,
            roughness: None,
            dispersion: DispersionConfig::default(),
        }
    }

    /// Set the peak wave period.
    pub fn with_period(mut self, tp: impl Into<Input>) -> Self {
        self.tp = Some(tp.into());
        self
    }

    /// Set the peak wave length. Takes precedence over a period.
    pub fn with_wavelength(mut self, lp: impl Into<Input>) -> Self {
        self.lp = Some(lp.into());
        self
    }

    /// Set the measurement depth: a scalar applies to every case.
    pub fn with_depth(mut self, depth: impl Into<Input>) -> Self {
        self.depth = Some(depth.into());
        self
    }

    /// Set the hydraulic roughness length.
    pub fn with_roughness(mut self, roughness: impl Into<Input>) -> Self {
        self.roughness = Some(roughness.into());
        self
    }

    /// Override the dispersion solver settings.
    pub fn with_dispersion(mut self, dispersion: DispersionConfig) -> Self {
        self.dispersion = dispersion;
        self
    }

    /// True if a roughness length was supplied.
    pub fn has_roughness(&self) -> bool {
        self.roughness.is_some()
    }

    /// Validate the inputs and derive the full wave state.
    ///
    /// # Errors
    /// - `MissingWaveLength` if neither period nor wave length is given
    /// - `EmptyInput` if any sequence is empty
    /// - `InconsistentLength` if sequence lengths disagree (a scalar depth is
    ///   the only input that is broadcast)
    pub fn normalize(&self) -> Result<WaveState> {
        if self.tp.is_none() && self.lp.is_none() {
            return Err(RunupError::MissingWaveLength);
        }

        let supplied = [
            ("hs", Some(&self.hs)),
            ("beta", Some(&self.beta)),
            ("tp", self.tp.as_ref()),
            ("lp", self.lp.as_ref()),
            ("depth", self.depth.as_ref()),
            ("r", self.roughness.as_ref()),
        ];
        for (field, input) in supplied {
            if input.is_some_and(Input::is_empty) {
                return Err(RunupError::EmptyInput { field });
            }
        }

        let n = self.hs.len();
        let check = |field: &'static str, input: &Input| {
            if input.len() == n {
                Ok(())
            } else {
                Err(RunupError::InconsistentLength {
                    field,
                    expected: n,
                    found: input.len(),
                })
            }
        };
        check("beta", &self.beta)?;
        // Lp wins when both are given, so only its length matters
        match (&self.lp, &self.tp) {
            (Some(lp), _) => check("lp", lp)?,
            (None, Some(tp)) => check("tp", tp)?,
            (None, None) => unreachable!("checked above"),
        }
        if let Some(r) = &self.roughness {
            check("r", r)?;
        }
        let depth = match &self.depth {
            Some(Input::Scalar(h)) => Some(vec![*h; n]),
            Some(input) if input.len() == 1 => Some(vec![input.as_slice()[0]; n]),
            Some(input) => {
                check("depth", input)?;
                Some(input.to_vec())
            }
            None => None,
        };

        let (tp, lp, source) = match (&self.lp, &self.tp, &depth) {
            (Some(lp), _, Some(h)) => {
                let lp = lp.to_vec();
                let tp = lp
                    .iter()
                    .zip(h)
                    .map(|(&l, &h)| period_from_wavelength(l, h))
                    .collect();
                (tp, lp, "period from finite-depth dispersion")
            }
            (Some(lp), _, None) => {
                let lp = lp.to_vec();
                let tp = lp.iter().map(|&l| deep_water_period(l)).collect();
                (tp, lp, "period from deep-water dispersion")
            }
            (None, Some(tp), Some(h)) => {
                let tp = tp.to_vec();
                let lp = wavelengths(&tp, h, &self.dispersion);
                (tp, lp, "wave length from finite-depth dispersion")
            }
            (None, Some(tp), None) => {
                let tp = tp.to_vec();
                let lp = tp.iter().map(|&t| deep_water_wavelength(t)).collect();
                (tp, lp, "wave length from deep-water dispersion")
            }
            (None, None, _) => unreachable!("checked above"),
        };

        let scalar = supplied
            .iter()
            .filter_map(|(_, input)| *input)
            .all(Input::is_scalar);

        debug!(n_cases = n, scalar, derived = source, "normalized wave inputs");

        Ok(WaveState::from_parts(
            self.hs.to_vec(),
            self.beta.to_vec(),
            tp,
            lp,
            depth,
            self.roughness.as_ref().map(Input::to_vec),
            scalar,
        ))
    }
}
