//! Wave and beach state shared by every runup model.
//!
//! [`WaveInputs`] collects the raw, possibly mixed scalar/sequence inputs.
//! [`WaveInputs::normalize`] validates them, derives whichever of peak period
//! and peak wave length is missing, and computes the Iribarren number,
//! producing an immutable [`WaveState`].

mod inputs;
mod wave_state;

pub use inputs::WaveInputs;
pub use wave_state::{iribarren, WaveState};
