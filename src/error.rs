//! Error type shared by the normalizer, models, ensembles and utilities.
//!
//! Numeric domain problems (NaN periods, divide-by-zero in a formula) are not
//! errors: they propagate as NaN/inf through the result. Only malformed input
//! is rejected.

use thiserror::Error;

/// Errors raised while constructing wave states, models or ensembles.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RunupError {
    /// Neither peak period nor peak wave length was supplied.
    #[error("expected either a peak period (Tp) or a peak wave length (Lp)")]
    MissingWaveLength,

    /// Sequence inputs disagree in length.
    #[error("input `{field}` has length {found}, expected {expected}")]
    InconsistentLength {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// A sequence input contained no values.
    #[error("input `{field}` is empty")]
    EmptyInput { field: &'static str },

    /// Model needs a hydraulic roughness length and none was given.
    #[error("{model} requires a hydraulic roughness length (r)")]
    MissingRoughness { model: &'static str },

    /// Model is backed by a pre-trained regressor and none was attached.
    #[error("{model} requires a pre-trained regressor")]
    MissingRegressor { model: &'static str },

    /// Parameter name is not one of R2, setup, sinc, sig, swash.
    #[error("unknown runup parameter `{0}`; expected one of R2, setup, sinc, sig, swash")]
    InvalidParameter(String),

    /// Reverse shoaling for intermediate water was given deep-water cases.
    #[error(
        "{count} case(s) are in deep water (h > L0/2); for deep water waves Hs = H0"
    )]
    DeepWaterWaves { count: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RunupError>;
