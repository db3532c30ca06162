//! Value types at the boundary of the crate.
//!
//! Inputs arrive as either a single number or a sequence of cases; outputs
//! go back out in the same shape. Internally everything is a sequence of
//! length ≥ 1.
//!
//! # Example
//!
//! ```
//! use wave_runup::types::{Estimate, Input, RunupParameter};
//!
//! let hs: Input = 2.0.into();
//! assert_eq!(hs.len(), 1);
//!
//! let tp: Input = vec![8.0, 10.0].into();
//! assert_eq!(tp.len(), 2);
//!
//! let r2: RunupParameter = "R2".parse().unwrap();
//! assert_eq!(r2.name(), "R2");
//!
//! let out = Estimate::Scalar(1.5);
//! assert_eq!(out.as_scalar(), Some(1.5));
//! ```

mod input;
mod parameter;

pub use input::{Estimate, Input};
pub use parameter::{ParameterSet, RunupParameter};
