//! Scalar-or-sequence inputs and outputs.

use std::fmt;
use std::ops::Index;

// =============================================================================
// Input
// =============================================================================

/// A wave or beach parameter given either for one case or for many.
///
/// A scalar is lifted to a length-1 sequence during normalization. Whether
/// the caller used scalars is remembered so that results can be handed back
/// as a scalar too.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// One value for a single case.
    Scalar(f64),
    /// One value per case.
    Series(Vec<f64>),
}

impl Input {
    /// Number of cases this input covers.
    pub fn len(&self) -> usize {
        match self {
            Input::Scalar(_) => 1,
            Input::Series(values) => values.len(),
        }
    }

    /// True for an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if this was given as a bare scalar.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Input::Scalar(_))
    }

    /// Values as a slice (length 1 for a scalar).
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Input::Scalar(value) => std::slice::from_ref(value),
            Input::Series(values) => values,
        }
    }

    /// Lift into an owned sequence.
    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Input::Scalar(value)
    }
}

impl From<Vec<f64>> for Input {
    fn from(values: Vec<f64>) -> Self {
        Input::Series(values)
    }
}

impl From<&[f64]> for Input {
    fn from(values: &[f64]) -> Self {
        Input::Series(values.to_vec())
    }
}

impl From<&Vec<f64>> for Input {
    fn from(values: &Vec<f64>) -> Self {
        Input::Series(values.clone())
    }
}

impl<const N: usize> From<[f64; N]> for Input {
    fn from(values: [f64; N]) -> Self {
        Input::Series(values.to_vec())
    }
}

// =============================================================================
// Estimate
// =============================================================================

/// A derived quantity for every case.
///
/// `Scalar` when the model was built from scalar inputs only, `Series`
/// otherwise. A `Series` always has as many entries as there are cases.
#[derive(Clone, Debug, PartialEq)]
pub enum Estimate {
    Scalar(f64),
    Series(Vec<f64>),
}

impl Estimate {
    /// Wrap per-case values, collapsing to a scalar when requested.
    ///
    /// Collapsing only happens for exactly one value.
    pub fn from_values(values: Vec<f64>, collapse: bool) -> Self {
        if collapse && values.len() == 1 {
            Estimate::Scalar(values[0])
        } else {
            Estimate::Series(values)
        }
    }

    /// Per-case values as a slice.
    pub fn values(&self) -> &[f64] {
        match self {
            Estimate::Scalar(value) => std::slice::from_ref(value),
            Estimate::Series(values) => values,
        }
    }

    /// Number of cases.
    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// The value if this is a scalar estimate.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Estimate::Scalar(value) => Some(*value),
            Estimate::Series(_) => None,
        }
    }

    /// True for `Estimate::Scalar`.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Estimate::Scalar(_))
    }

    /// Consume into per-case values.
    pub fn into_vec(self) -> Vec<f64> {
        match self {
            Estimate::Scalar(value) => vec![value],
            Estimate::Series(values) => values,
        }
    }
}

impl Index<usize> for Estimate {
    type Output = f64;

    fn index(&self, case: usize) -> &f64 {
        &self.values()[case]
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Estimate::Scalar(value) => write!(f, "{:.3}", value),
            Estimate::Series(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:.3}", value)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_lifts_to_one_case() {
        let input = Input::from(4.0);
        assert_eq!(input.len(), 1);
        assert!(input.is_scalar());
        assert_eq!(input.as_slice(), &[4.0]);
    }

    #[test]
    fn test_series_keeps_length() {
        let input = Input::from([1.0, 2.0, 3.0]);
        assert_eq!(input.len(), 3);
        assert!(!input.is_scalar());
        assert_eq!(input.to_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_estimate_collapse_rules() {
        assert_eq!(Estimate::from_values(vec![2.5], true), Estimate::Scalar(2.5));
        assert_eq!(
            Estimate::from_values(vec![2.5], false),
            Estimate::Series(vec![2.5])
        );
        // Never collapse more than one case
        assert_eq!(
            Estimate::from_values(vec![1.0, 2.0], true),
            Estimate::Series(vec![1.0, 2.0])
        );
    }

    #[test]
    fn test_estimate_indexing_and_display() {
        let est = Estimate::Series(vec![1.0, 2.25]);
        assert_eq!(est[1], 2.25);
        assert_eq!(est.len(), 2);
        assert_eq!(format!("{}", est), "[1.000, 2.250]");
        assert_eq!(format!("{}", Estimate::Scalar(0.5)), "0.500");
    }
}
