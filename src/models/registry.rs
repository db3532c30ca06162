//! Registry of every runup model.
//!
//! Adding a model means adding a variant here, listing it in
//! [`ModelKind::ALL`] and giving it a `build` arm; ensembles pick it up from
//! there.

use std::fmt;
use std::sync::Arc;

use super::{
    Atkinson2017, Beuzen2019, Holman1986, Nielsen2009, Passarella2018, Power2018, Ruggiero2001,
    RunupModel, RunupRegressor, Senechal2011, Stockdon2006, Vousdoukas2012,
};
use crate::error::{Result, RunupError};
use crate::state::WaveState;
use crate::types::{ParameterSet, RunupParameter};

use RunupParameter::{Setup, Sig, Sinc, Swash, R2};

/// Identifies one empirical runup model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModelKind {
    Stockdon2006,
    Power2018,
    Holman1986,
    Nielsen2009,
    Ruggiero2001,
    Vousdoukas2012,
    Atkinson2017,
    Senechal2011,
    Beuzen2019,
    Passarella2018,
}

impl ModelKind {
    /// Every model, in ensemble column order.
    pub const ALL: [ModelKind; 10] = [
        ModelKind::Stockdon2006,
        ModelKind::Power2018,
        ModelKind::Holman1986,
        ModelKind::Nielsen2009,
        ModelKind::Ruggiero2001,
        ModelKind::Vousdoukas2012,
        ModelKind::Atkinson2017,
        ModelKind::Senechal2011,
        ModelKind::Beuzen2019,
        ModelKind::Passarella2018,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ModelKind::Stockdon2006 => "Stockdon2006",
            ModelKind::Power2018 => "Power2018",
            ModelKind::Holman1986 => "Holman1986",
            ModelKind::Nielsen2009 => "Nielsen2009",
            ModelKind::Ruggiero2001 => "Ruggiero2001",
            ModelKind::Vousdoukas2012 => "Vousdoukas2012",
            ModelKind::Atkinson2017 => "Atkinson2017",
            ModelKind::Senechal2011 => "Senechal2011",
            ModelKind::Beuzen2019 => "Beuzen2019",
            ModelKind::Passarella2018 => "Passarella2018",
        }
    }

    /// Publication DOI. Descriptive only.
    pub fn doi(self) -> Option<&'static str> {
        match self {
            ModelKind::Stockdon2006 => Some("10.1016/j.coastaleng.2005.12.005"),
            ModelKind::Power2018 => Some("10.1016/j.coastaleng.2018.10.006"),
            ModelKind::Holman1986 => Some("10.1016/0378-3839(86)90002-5"),
            ModelKind::Nielsen2009 => None,
            ModelKind::Ruggiero2001 => None,
            ModelKind::Vousdoukas2012 => Some("10.1007/s10236-011-0480-x"),
            ModelKind::Atkinson2017 => Some("10.1016/j.coastaleng.2016.10.001"),
            ModelKind::Senechal2011 => Some("10.1029/2010JC006819"),
            ModelKind::Beuzen2019 => Some("10.5194/nhess-19-2295-2019"),
            ModelKind::Passarella2018 => Some("10.5194/nhess-18-599-2018"),
        }
    }

    /// Parameters the model implements.
    pub const fn capabilities(self) -> ParameterSet {
        match self {
            ModelKind::Stockdon2006 => ParameterSet::of(&[R2, Setup, Sinc, Sig, Swash]),
            ModelKind::Holman1986 => ParameterSet::of(&[R2, Setup]),
            ModelKind::Senechal2011 => ParameterSet::of(&[R2, Sig]),
            ModelKind::Passarella2018 => ParameterSet::of(&[Sig, Swash]),
            ModelKind::Power2018
            | ModelKind::Nielsen2009
            | ModelKind::Ruggiero2001
            | ModelKind::Vousdoukas2012
            | ModelKind::Atkinson2017
            | ModelKind::Beuzen2019 => ParameterSet::of(&[R2]),
        }
    }

    /// True if `param` is implemented.
    pub const fn supports(self, param: RunupParameter) -> bool {
        self.capabilities().contains(param)
    }

    /// True if construction needs a roughness length.
    pub const fn requires_roughness(self) -> bool {
        matches!(self, ModelKind::Power2018)
    }

    /// True if construction needs a pre-trained regressor.
    pub const fn requires_regressor(self) -> bool {
        matches!(self, ModelKind::Beuzen2019)
    }

    /// Instantiate the model over a wave state.
    ///
    /// # Errors
    /// - `MissingRoughness` for Power2018 without roughness
    /// - `MissingRegressor` for Beuzen2019 without a regressor
    pub fn build(
        self,
        state: &WaveState,
        regressor: Option<&Arc<dyn RunupRegressor>>,
    ) -> Result<Box<dyn RunupModel>> {
        let state = state.clone();
        let model: Box<dyn RunupModel> = match self {
            ModelKind::Stockdon2006 => Box::new(Stockdon2006::from_state(state)),
            ModelKind::Power2018 => Box::new(Power2018::from_state(state)?),
            ModelKind::Holman1986 => Box::new(Holman1986::from_state(state)),
            ModelKind::Nielsen2009 => Box::new(Nielsen2009::from_state(state)),
            ModelKind::Ruggiero2001 => Box::new(Ruggiero2001::from_state(state)),
            ModelKind::Vousdoukas2012 => Box::new(Vousdoukas2012::from_state(state)),
            ModelKind::Atkinson2017 => Box::new(Atkinson2017::from_state(state)),
            ModelKind::Senechal2011 => Box::new(Senechal2011::from_state(state)),
            ModelKind::Beuzen2019 => {
                let regressor = regressor.ok_or(RunupError::MissingRegressor {
                    model: self.name(),
                })?;
                Box::new(Beuzen2019::from_state(state, Arc::clone(regressor)))
            }
            ModelKind::Passarella2018 => Box::new(Passarella2018::from_state(state)),
        };
        Ok(model)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FnRegressor;
    use crate::state::WaveInputs;

    fn state() -> WaveState {
        WaveInputs::new([4.0, 2.0], [0.1, 0.001])
            .with_period([11.0, 8.0])
            .with_roughness([0.00075, 0.00075])
            .normalize()
            .unwrap()
    }

    #[test]
    fn test_capabilities_match_evaluation() {
        let regressor: Arc<dyn RunupRegressor> = Arc::new(FnRegressor::new(|_: &[f64; 3]| 1.0));
        let state = state();
        for kind in ModelKind::ALL {
            let model = kind.build(&state, Some(&regressor)).unwrap();
            assert_eq!(model.kind(), kind);
            for param in RunupParameter::ALL {
                let values = model.evaluate(param);
                assert_eq!(
                    values.is_some(),
                    kind.supports(param),
                    "{} / {}: capability tag disagrees with evaluate",
                    kind,
                    param
                );
                if let Some(values) = values {
                    assert_eq!(values.len(), state.len());
                }
            }
        }
    }

    #[test]
    fn test_every_model_implements_something() {
        for kind in ModelKind::ALL {
            assert!(!kind.capabilities().is_empty(), "{} has no capabilities", kind);
        }
    }

    #[test]
    fn test_passarella_has_no_r2() {
        assert!(!ModelKind::Passarella2018.supports(R2));
        assert!(ModelKind::Passarella2018.supports(Swash));
    }

    #[test]
    fn test_build_requirements() {
        let no_roughness = WaveInputs::new(4.0, 0.1).with_period(11.0).normalize().unwrap();
        assert_eq!(
            ModelKind::Power2018.build(&no_roughness, None).err(),
            Some(RunupError::MissingRoughness { model: "Power2018" })
        );
        assert_eq!(
            ModelKind::Beuzen2019.build(&no_roughness, None).err(),
            Some(RunupError::MissingRegressor { model: "Beuzen2019" })
        );
        assert!(ModelKind::Stockdon2006.build(&no_roughness, None).is_ok());
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = ModelKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ModelKind::ALL.len());
    }
}
