//! Empirical wave runup models.
//!
//! Each model wraps a normalized [`WaveState`](crate::state::WaveState) and
//! implements some subset of the runup parameters (R2, setup, sinc, sig,
//! swash). Which subset is declared up front by [`ModelKind::capabilities`],
//! so callers can check support without evaluating anything.
//!
//! # Key Types
//!
//! - [`RunupModel`]: the shared contract (object safe)
//! - [`ModelKind`]: registry of every model, used by the ensembles
//! - [`RunupRegressor`]: black-box predictor backing [`Beuzen2019`]
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

mod atkinson2017;
mod beuzen2019;
mod holman1986;
mod nielsen2009;
mod passarella2018;
mod power2018;
mod registry;
mod ruggiero2001;
mod senechal2011;
mod stockdon2006;
mod traits;
mod vousdoukas2012;

pub use atkinson2017::Atkinson2017;
pub use beuzen2019::{Beuzen2019, FnRegressor, RunupRegressor};
pub use holman1986::Holman1986;
pub use nielsen2009::Nielsen2009;
pub use passarella2018::Passarella2018;
pub use power2018::Power2018;
pub use registry::ModelKind;
pub use ruggiero2001::Ruggiero2001;
pub use senechal2011::Senechal2011;
pub use stockdon2006::Stockdon2006;
pub use traits::RunupModel;
pub use vousdoukas2012::Vousdoukas2012;
