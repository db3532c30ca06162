//! Skill of runup estimates against observations.
//!
//! ```
//! use wave_runup::analysis::ComparisonMetrics;
//!
//! let observed = [1.0, 2.0, 3.0];
//! let predicted = [1.5, 2.5, 3.5];
//! let metrics = ComparisonMetrics::compute(&predicted, &observed).unwrap();
//! assert!((metrics.bias - 0.5).abs() < 1e-12);
//! ```

mod metrics;

pub use metrics::ComparisonMetrics;
