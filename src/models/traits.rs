//! The runup model contract.

use super::ModelKind;
use crate::state::WaveState;
use crate::types::{Estimate, ParameterSet, RunupParameter};

/// Core trait for empirical runup models.
///
/// Implementors provide [`evaluate`](RunupModel::evaluate); every accessor
/// is derived from it. Results are recomputed from the wave state on each
/// call and nothing is cached.
///
/// A parameter the model does not define is `None`, never zero or NaN.
/// NaN inside a result means the formula itself produced NaN for that case.
pub trait RunupModel: Send + Sync {
    /// Registry entry for this model.
    fn kind(&self) -> ModelKind;

    /// Wave state the model was built from.
    fn state(&self) -> &WaveState;

    /// Per-case values of `param`, or `None` if the model does not define it.
    ///
    /// Must return `Some` exactly for the parameters in
    /// [`ModelKind::capabilities`].
    fn evaluate(&self, param: RunupParameter) -> Option<Vec<f64>>;

    /// Model name, e.g. "Stockdon2006".
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Publication DOI, where one exists.
    fn doi(&self) -> Option<&'static str> {
        self.kind().doi()
    }

    /// Parameters this model implements.
    fn capabilities(&self) -> ParameterSet {
        self.kind().capabilities()
    }

    /// `param` in the caller's input shape (scalar or sequence).
    fn estimate(&self, param: RunupParameter) -> Option<Estimate> {
        self.evaluate(param).map(|values| self.state().present(values))
    }

    /// 2% exceedance runup.
    fn r2(&self) -> Option<Estimate> {
        self.estimate(RunupParameter::R2)
    }

    /// Wave setup.
    fn setup(&self) -> Option<Estimate> {
        self.estimate(RunupParameter::Setup)
    }

    /// Incident swash.
    fn sinc(&self) -> Option<Estimate> {
        self.estimate(RunupParameter::Sinc)
    }

    /// Infragravity swash.
    fn sig(&self) -> Option<Estimate> {
        self.estimate(RunupParameter::Sig)
    }

    /// Total swash.
    fn swash(&self) -> Option<Estimate> {
        self.estimate(RunupParameter::Swash)
    }
}
