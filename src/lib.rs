//! # wave-runup
//!
//! Empirical wave runup models for sandy beaches.
//!
//! This crate provides:
//! - Linear dispersion (finite-depth wavelength by Newton iteration)
//! - Input normalization: scalar or per-case inputs, derived wavelength,
//!   period and Iribarren number
//! - Ten published runup models behind one [`RunupModel`] contract
//! - Ensembles that tabulate or average every model's estimate
//! - Reverse shoaling and skill metrics against observations
//!
//! # Example
//!
//! ```
//! use wave_runup::{RunupModel, Stockdon2006, WaveInputs};
//!
//! let model = Stockdon2006::new(WaveInputs::new(4.0, 0.1).with_period(11.0)).unwrap();
//! let r2 = model.r2().unwrap().as_scalar().unwrap();
//! assert!((r2 - 2.54).abs() < 0.01);
//! ```

pub mod analysis;
pub mod ensemble;
pub mod error;
pub mod models;
pub mod state;
pub mod types;
pub mod waves;

pub use analysis::ComparisonMetrics;
pub use ensemble::{EnsembleColumn, EnsembleMean, EnsembleRaw, EnsembleSeries, EnsembleTable};
pub use error::{Result, RunupError};
pub use models::{
    Atkinson2017, Beuzen2019, FnRegressor, Holman1986, ModelKind, Nielsen2009, Passarella2018,
    Power2018, Ruggiero2001, RunupModel, RunupRegressor, Senechal2011, Stockdon2006,
    Vousdoukas2012,
};
pub use state::{iribarren, WaveInputs, WaveState};
pub use types::{Estimate, Input, ParameterSet, RunupParameter};
pub use waves::{DispersionConfig, G};
