//! Labelled per-model result tables.

use std::ops::Index;

use crate::analysis::ComparisonMetrics;
use crate::error::Result;
use crate::models::ModelKind;
use crate::types::RunupParameter;

/// One model's estimates of one parameter, for every case.
#[derive(Clone, Debug, PartialEq)]
pub struct EnsembleColumn {
    /// Model that produced the column.
    pub model: ModelKind,
    /// Column label, `{ModelName}_{param}`.
    pub name: String,
    /// One value per case.
    pub values: Vec<f64>,
}

/// Row-per-case, column-per-model table of one parameter.
///
/// The column set depends on which models implement the parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct EnsembleTable {
    parameter: RunupParameter,
    n_rows: usize,
    columns: Vec<EnsembleColumn>,
}

impl EnsembleTable {
    pub(crate) fn new(parameter: RunupParameter, n_rows: usize) -> Self {
        Self {
            parameter,
            n_rows,
            columns: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, model: ModelKind, values: Vec<f64>) {
        debug_assert_eq!(values.len(), self.n_rows);
        self.columns.push(EnsembleColumn {
            model,
            name: format!("{}_{}", model.name(), self.parameter.name()),
            values,
        });
    }

    /// Parameter held in every column.
    pub fn parameter(&self) -> RunupParameter {
        self.parameter
    }

    /// Number of cases.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of contributing models.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// True if no model implements the parameter.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[EnsembleColumn] {
        &self.columns
    }

    /// Column labels in model order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Values of the column with the given label.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Values contributed by a particular model.
    pub fn model_column(&self, model: ModelKind) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.model == model)
            .map(|c| c.values.as_slice())
    }

    /// All model values for one case.
    ///
    /// # Panics
    ///
    /// Panics if `case >= n_rows()`.
    pub fn row(&self, case: usize) -> Vec<f64> {
        assert!(case < self.n_rows, "row {} out of range ({})", case, self.n_rows);
        self.columns.iter().map(|c| c.values[case]).collect()
    }

    /// Mean across models for each case, skipping NaN entries.
    ///
    /// A case where every model gave NaN (or no model contributed) is NaN.
    pub fn row_means(&self) -> Vec<f64> {
        (0..self.n_rows)
            .map(|case| nan_mean(self.columns.iter().map(|c| c.values[case])))
            .collect()
    }

    /// Skill of every column against observed values.
    ///
    /// # Errors
    /// `InconsistentLength` if `observed` does not have one value per case.
    pub fn compare(&self, observed: &[f64]) -> Result<Vec<(String, ComparisonMetrics)>> {
        self.columns
            .iter()
            .map(|c| Ok((c.name.clone(), ComparisonMetrics::compute(&c.values, observed)?)))
            .collect()
    }
}

fn nan_mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// A named per-case series, e.g. `mean_R2`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnsembleSeries {
    pub name: String,
    pub values: Vec<f64>,
}

impl EnsembleSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Index<usize> for EnsembleSeries {
    type Output = f64;

    fn index(&self, case: usize) -> &f64 {
        &self.values[case]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> EnsembleTable {
        let mut t = EnsembleTable::new(RunupParameter::R2, 2);
        t.push(ModelKind::Stockdon2006, vec![1.0, 2.0]);
        t.push(ModelKind::Power2018, vec![f64::NAN, f64::NAN]);
        t.push(ModelKind::Holman1986, vec![3.0, 6.0]);
        t
    }

    #[test]
    fn test_column_labels() {
        let t = table();
        assert_eq!(
            t.column_names(),
            vec!["Stockdon2006_R2", "Power2018_R2", "Holman1986_R2"]
        );
        assert_eq!(t.column("Holman1986_R2"), Some(&[3.0, 6.0][..]));
        assert_eq!(t.model_column(ModelKind::Stockdon2006), Some(&[1.0, 2.0][..]));
        assert!(t.column("Nielsen2009_R2").is_none());
    }

    #[test]
    fn test_row_means_skip_nan() {
        assert_eq!(table().row_means(), vec![2.0, 4.0]);
    }

    #[test]
    fn test_row_means_all_nan() {
        let mut t = EnsembleTable::new(RunupParameter::Sig, 1);
        t.push(ModelKind::Power2018, vec![f64::NAN]);
        assert!(t.row_means()[0].is_nan());

        let empty = EnsembleTable::new(RunupParameter::Sig, 1);
        assert!(empty.row_means()[0].is_nan());
    }

    #[test]
    fn test_row_extraction() {
        let row = table().row(1);
        assert_eq!(row[0], 2.0);
        assert!(row[1].is_nan());
        assert_eq!(row[2], 6.0);
    }
}
