//! Runup parameters and per-model capability sets.

use std::fmt;
use std::str::FromStr;

use crate::error::RunupError;

/// A quantity a runup model may estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RunupParameter {
    /// 2% exceedance runup level.
    R2,
    /// Wave setup at the shoreline.
    Setup,
    /// Incident-band swash.
    Sinc,
    /// Infragravity-band swash.
    Sig,
    /// Total swash.
    Swash,
}

impl RunupParameter {
    /// Every parameter, in the order ensembles report them.
    pub const ALL: [RunupParameter; 5] = [
        RunupParameter::R2,
        RunupParameter::Setup,
        RunupParameter::Sinc,
        RunupParameter::Sig,
        RunupParameter::Swash,
    ];

    /// Canonical name, as used in ensemble column labels.
    pub fn name(self) -> &'static str {
        match self {
            RunupParameter::R2 => "R2",
            RunupParameter::Setup => "setup",
            RunupParameter::Sinc => "sinc",
            RunupParameter::Sig => "sig",
            RunupParameter::Swash => "swash",
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            RunupParameter::R2 => 1 << 0,
            RunupParameter::Setup => 1 << 1,
            RunupParameter::Sinc => 1 << 2,
            RunupParameter::Sig => 1 << 3,
            RunupParameter::Swash => 1 << 4,
        }
    }
}

impl fmt::Display for RunupParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RunupParameter {
    type Err = RunupError;

    /// Parse a canonical parameter name. Matching is exact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RunupParameter::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| RunupError::InvalidParameter(s.to_string()))
    }
}

/// Set of parameters a model implements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParameterSet(u8);

impl ParameterSet {
    /// No parameters.
    pub const EMPTY: Self = Self(0);

    /// Build a set from a list of parameters.
    pub const fn of(params: &[RunupParameter]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < params.len() {
            bits |= params[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Check membership.
    #[inline]
    pub const fn contains(self, param: RunupParameter) -> bool {
        self.0 & param.bit() != 0
    }

    /// Add a parameter.
    pub const fn with(self, param: RunupParameter) -> Self {
        Self(self.0 | param.bit())
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of parameters in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate members in canonical order.
    pub fn iter(self) -> impl Iterator<Item = RunupParameter> {
        RunupParameter::ALL
            .into_iter()
            .filter(move |p| self.contains(*p))
    }
}
