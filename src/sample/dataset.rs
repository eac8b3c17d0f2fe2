use polars::prelude::*;

use std::collections::HashMap;

use crate::error::DatasetError;
use super::builder::DatasetBuilder;
use super::encoder::{Encoders, LabelEncoder};
use super::feature::{Feature, FeatureKind};

/// Struct `Dataset` holds a labeled tabular sample in column-major form.
///
/// The splitter only reads a `Dataset`;
/// it is never modified once built.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) encoders: Encoders,
    pub(super) target: Vec<usize>,
    pub(super) classes: LabelEncoder,
    pub(super) n_examples: usize,
    pub(super) n_feature: usize,
}

impl Dataset {
    /// Returns a [`DatasetBuilder`].
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::new()
    }

    pub(super) fn from_components(
        features: Vec<Feature>,
        encoders: Encoders,
        target: Vec<usize>,
        classes: LabelEncoder,
    ) -> Self
    {
        let n_examples = target.len();
        let n_feature = features.len();
        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        Self {
            name_to_index,
            features,
            encoders,
            target,
            classes,
            n_examples,
            n_feature,
        }
    }

    /// Convert `polars::DataFrame` and `polars::Series` into `Dataset`.
    ///
    /// Numeric columns become numerical features,
    /// every other column is read as strings and becomes a nominal feature.
    /// The target is read as strings and label-encoded.
    pub fn from_dataframe(data: &DataFrame, target: &Series)
        -> Result<Self, DatasetError>
    {
        let mut builder = DatasetBuilder::new();
        for series in data.get_columns() {
            let name = series.name();
            if series.dtype().is_numeric() {
                let vals = series.cast(&DataType::Float64)?
                    .f64()?
                    .into_iter()
                    .enumerate()
                    .map(|(row, v)| {
                        v.ok_or_else(|| DatasetError::MissingValue {
                            column: name.to_string(),
                            row,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                builder = builder.numerical(name, vals);
            } else {
                let labels = string_column(series)?;
                builder = builder.nominal(name, labels);
            }
        }

        let target = string_column(target)?;
        builder.target(target).build()
    }

    /// Returns the pair of the number of examples and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_examples, self.n_feature)
    }

    /// Returns the number of examples.
    pub fn n_examples(&self) -> usize {
        self.n_examples
    }

    /// Returns the number of features.
    pub fn n_features(&self) -> usize {
        self.n_feature
    }

    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }

    /// Returns the feature at `index`.
    pub fn feature(&self, index: usize) -> Option<&Feature> {
        self.features.get(index)
    }

    /// Returns the index of the feature named `name`.
    pub fn feature_index<S: AsRef<str>>(&self, name: S) -> Option<usize> {
        self.name_to_index.get(name.as_ref()).copied()
    }

    /// Returns the kind of the feature at `index`.
    pub fn feature_kind(&self, index: usize) -> Option<FeatureKind> {
        self.feature(index).map(Feature::kind)
    }

    /// Returns the class code of each example.
    pub fn target(&self) -> &[usize] {
        &self.target[..]
    }

    /// Returns the encoder of the class labels.
    pub fn classes(&self) -> &LabelEncoder {
        &self.classes
    }

    /// Returns the class label encoded as `code`.
    pub fn class_name(&self, code: usize) -> Option<&str> {
        self.classes.decode(code)
    }

    /// Returns the encoders of the nominal features.
    pub fn encoders(&self) -> &Encoders {
        &self.encoders
    }
}

fn string_column(series: &Series) -> Result<Vec<String>, DatasetError> {
    let name = series.name();
    let labels = series.cast(&DataType::Utf8)?
        .utf8()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| {
            v.map(str::to_string)
                .ok_or_else(|| DatasetError::MissingValue {
                    column: name.to_string(),
                    row,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_dataframe_splits_columns_by_dtype() {
        let s1 = Series::new("outlook", &["sunny", "rain", "sunny"]);
        let s2 = Series::new("humidity", &[85_i64, 70, 96]);
        let df = DataFrame::new(vec![s1, s2]).unwrap();
        let target = Series::new("play", &["no", "yes", "no"]);

        let dataset = Dataset::from_dataframe(&df, &target).unwrap();

        assert_eq!(dataset.shape(), (3, 2));
        assert_eq!(dataset.feature_index("humidity"), Some(1));
        assert_eq!(dataset.feature_kind(0), Some(FeatureKind::Nominal));
        assert_eq!(dataset.feature_kind(1), Some(FeatureKind::Numerical));
        assert_eq!(
            dataset.feature(1).and_then(Feature::values),
            Some(&[85.0, 70.0, 96.0][..])
        );
        assert_eq!(dataset.feature(0).and_then(Feature::codes), Some(&[1, 0, 1][..]));
        assert_eq!(dataset.target(), &[0, 1, 0]);
        assert_eq!(dataset.class_name(1), Some("yes"));
    }

    #[test]
    fn from_dataframe_rejects_missing_values() {
        let s1 = Series::new("x", &[Some(1.0), None]);
        let df = DataFrame::new(vec![s1]).unwrap();
        let target = Series::new("class", &["a", "b"]);

        let err = Dataset::from_dataframe(&df, &target).unwrap_err();
        assert!(matches!(err, DatasetError::MissingValue { row: 1, .. }));
    }
}
