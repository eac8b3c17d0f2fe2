//! Error types returned by the splitter and the dataset layer.

use std::io;

use polars::prelude::PolarsError;

/// Errors reported by [`Splitter::calc`](crate::Splitter::calc)
/// and [`Splitter::split`](crate::Splitter::split).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    /// `calc` was given no candidate feature,
    /// so no decision can be produced.
    #[error("no candidate feature to split on")]
    NoCandidateFeatures,

    /// The example index set is empty.
    #[error("no example to split")]
    NoExamples,

    /// An example index is not smaller than the number of examples.
    #[error("example index {index} is out of range (dataset has {n_examples} examples)")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of examples of the dataset.
        n_examples: usize,
    },

    /// An example index is given twice.
    #[error("example index {0} appears more than once")]
    DuplicateIndex(usize),

    /// A feature index is not smaller than the number of features.
    #[error("feature index {feature} is out of range (dataset has {n_features} features)")]
    FeatureOutOfRange {
        /// The offending index.
        feature: usize,
        /// Number of features of the dataset.
        n_features: usize,
    },

    /// A feature index is given twice.
    #[error("feature index {0} appears more than once")]
    DuplicateFeature(usize),

    /// The category codec has no entry for a nominal feature.
    #[error("no category codec for nominal feature {feature}")]
    MissingCodec {
        #[allow(missing_docs)]
        feature: usize,
    },

    /// A nominal value is not one of the codes known to the codec.
    #[error("feature {feature} holds code {code} unknown to its codec")]
    UnknownCategory {
        #[allow(missing_docs)]
        feature: usize,
        #[allow(missing_docs)]
        code: usize,
    },

    /// The kind of a decision does not match the kind of its feature.
    #[error("decision kind does not match the kind of feature {feature}")]
    KindMismatch {
        #[allow(missing_docs)]
        feature: usize,
    },
}

/// Errors reported while building a [`Dataset`](crate::Dataset).
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Failed to read the file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failed to convert a polars column.
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),

    /// A cell of a numerical column is not a number.
    #[error("cannot parse `{value}` as a number (line {line}, column `{column}`)")]
    Parse {
        /// Line number in the file, starting at `1`.
        line: usize,
        /// Column name.
        column: String,
        /// The cell as written in the file.
        value: String,
    },

    /// Missing values are not supported.
    #[error("column `{column}` has a missing value at row {row}")]
    MissingValue {
        #[allow(missing_docs)]
        column: String,
        #[allow(missing_docs)]
        row: usize,
    },

    /// Numerical features take finite values only.
    #[error("numerical feature `{feature}` has a non-finite value at row {row}")]
    NonFinite {
        #[allow(missing_docs)]
        feature: String,
        #[allow(missing_docs)]
        row: usize,
    },

    /// A column does not have as many values as the target.
    #[error("column `{name}` has {got} values, expected {expected}")]
    LengthMismatch {
        #[allow(missing_docs)]
        name: String,
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        got: usize,
    },

    /// A line of a file does not have as many fields as the header.
    #[error("line {line} has {got} fields, expected {expected}")]
    RaggedLine {
        /// Line number in the file, starting at `1`.
        line: usize,
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        got: usize,
    },

    /// [`DatasetReader::read`](crate::DatasetReader::read) was called
    /// without a file.
    #[error("the file to read is not set")]
    MissingFile,

    /// No target column was given.
    #[error("the target column is not set")]
    MissingTarget,

    /// A named column is not in the file.
    #[error("column `{0}` does not exist")]
    UnknownColumn(String),

    /// Two columns share a name.
    #[error("column `{0}` is defined twice")]
    DuplicateColumn(String),

    /// The dataset has no example.
    #[error("the dataset has no example")]
    Empty,
}
