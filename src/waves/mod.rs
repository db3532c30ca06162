//! Linear wave theory helpers shared by every runup model.
//!
//! - [`dispersion`]: wave number / wave length from period and depth
//! - [`shoaling`]: reverse shoaling of nearshore wave heights to deep water

pub mod dispersion;
pub mod shoaling;

pub use dispersion::{
    deep_water_period, deep_water_wavelength, period_from_wavelength, solve_wavenumber,
    wavelength, wavelengths, DispersionConfig,
};
pub use shoaling::{reverse_shoal, reverse_shoal_intermediate, ShoalingCase, WaterDepthRegime};

/// Gravitational acceleration (m/s²).
pub const G: f64 = 9.81;
