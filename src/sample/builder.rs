use std::collections::HashSet;

use crate::error::DatasetError;
use super::dataset::Dataset;
use super::encoder::{Encoders, LabelEncoder};
use super::feature::Feature;

enum Column {
    Numerical(String, Vec<f64>),
    Nominal(String, Vec<String>),
}

impl Column {
    fn name(&self) -> &str {
        match self {
            Self::Numerical(name, _) => name,
            Self::Nominal(name, _) => name,
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Numerical(_, vals) => vals.len(),
            Self::Nominal(_, vals) => vals.len(),
        }
    }
}

/// A struct that builds [`Dataset`] from in-memory columns.
///
/// Nominal columns and the target are label-encoded:
/// the distinct labels are sorted and numbered from `0`.
///
/// # Example
///
/// ```
/// use id3split::Dataset;
///
/// let dataset = Dataset::builder()
///     .nominal("outlook", ["sunny", "rain", "rain"])
///     .numerical("humidity", vec![85.0, 70.0, 96.0])
///     .target(["no", "yes", "no"])
///     .build()
///     .unwrap();
/// assert_eq!(dataset.shape(), (3, 2));
/// ```
#[derive(Default)]
pub struct DatasetBuilder {
    columns: Vec<Column>,
    target: Option<Vec<String>>,
}

impl DatasetBuilder {
    /// Construct an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a numerical feature.
    pub fn numerical<T: ToString>(mut self, name: T, vals: Vec<f64>) -> Self {
        self.columns.push(Column::Numerical(name.to_string(), vals));
        self
    }

    /// Append a nominal feature given by its raw labels.
    pub fn nominal<T, I, S>(mut self, name: T, labels: I) -> Self
        where T: ToString,
              I: IntoIterator<Item = S>,
              S: AsRef<str>,
    {
        let labels = labels.into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        self.columns.push(Column::Nominal(name.to_string(), labels));
        self
    }

    /// Set the class label of each example.
    pub fn target<I, S>(mut self, labels: I) -> Self
        where I: IntoIterator<Item = S>,
              S: AsRef<str>,
    {
        let labels = labels.into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        self.target = Some(labels);
        self
    }

    /// Build a [`Dataset`].
    /// This method consumes `self`.
    pub fn build(self) -> Result<Dataset, DatasetError> {
        let target = self.target.ok_or(DatasetError::MissingTarget)?;
        let n_examples = target.len();
        if n_examples == 0 { return Err(DatasetError::Empty); }

        let mut seen = HashSet::new();
        for column in self.columns.iter() {
            let name = column.name();
            if !seen.insert(name.to_string()) {
                return Err(DatasetError::DuplicateColumn(name.to_string()));
            }
            if column.len() != n_examples {
                return Err(DatasetError::LengthMismatch {
                    name: name.to_string(),
                    expected: n_examples,
                    got: column.len(),
                });
            }
        }

        let mut features = Vec::with_capacity(self.columns.len());
        let mut encoders = Vec::with_capacity(self.columns.len());
        for column in self.columns {
            match column {
                Column::Numerical(name, vals) => {
                    if let Some(row) = vals.iter().position(|v| !v.is_finite()) {
                        return Err(DatasetError::NonFinite {
                            feature: name,
                            row,
                        });
                    }
                    features.push(Feature::numerical(name, vals));
                    encoders.push(None);
                },
                Column::Nominal(name, labels) => {
                    let (encoder, codes) = LabelEncoder::fit_transform(&labels);
                    features.push(Feature::nominal(name, codes));
                    encoders.push(Some(encoder));
                },
            }
        }

        let (classes, target) = LabelEncoder::fit_transform(&target);
        let encoders = Encoders::new(encoders);

        Ok(Dataset::from_components(features, encoders, target, classes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_target() {
        let err = DatasetBuilder::new()
            .numerical("x", vec![1.0])
            .build()
            .unwrap_err();
        assert!(matches!(err, DatasetError::MissingTarget));
    }

    #[test]
    fn build_rejects_ragged_columns() {
        let err = DatasetBuilder::new()
            .numerical("x", vec![1.0, 2.0])
            .target(["a"])
            .build()
            .unwrap_err();
        assert!(
            matches!(err, DatasetError::LengthMismatch { expected: 1, got: 2, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn build_rejects_non_finite_values() {
        let err = DatasetBuilder::new()
            .numerical("x", vec![1.0, f64::NAN])
            .target(["a", "b"])
            .build()
            .unwrap_err();
        assert!(matches!(err, DatasetError::NonFinite { row: 1, .. }));
    }

    #[test]
    fn build_rejects_duplicated_names() {
        let err = DatasetBuilder::new()
            .numerical("x", vec![1.0])
            .nominal("x", ["a"])
            .target(["a"])
            .build()
            .unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateColumn(name) if name == "x"));
    }
}
