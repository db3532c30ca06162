//! Ensembles over every runup model.
//!
//! - [`EnsembleRaw`]: one column per model that implements the requested
//!   parameter, no combining
//! - [`EnsembleMean`]: row-wise mean across those columns
//!
//! Models are enumerated from [`ModelKind::ALL`](crate::models::ModelKind::ALL);
//! support for a parameter is read from each model's capability tag, so a
//! model that does not define a parameter simply contributes no column.
//!
//! # Example
//!
//! ```
//! use wave_runup::{EnsembleRaw, WaveInputs};
//!
//! let ensemble = EnsembleRaw::new(WaveInputs::new(4.0, 0.1).with_period(11.0)).unwrap();
//! let table = ensemble.estimate("R2").unwrap();
//! assert!(table.column("Stockdon2006_R2").is_some());
//! assert!(table.column("Passarella2018_R2").is_none());
//! assert!(ensemble.estimate("not_r2").is_err());
//! ```

mod mean;
mod raw;
mod table;

pub use mean::EnsembleMean;
pub use raw::EnsembleRaw;
pub use table::{EnsembleColumn, EnsembleSeries, EnsembleTable};
