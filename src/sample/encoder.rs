//! Maps raw category labels to dense integer codes and back.
use serde::{Serialize, Deserialize};

use std::collections::{BTreeSet, HashMap};

/// Capability the splitter uses to enumerate and decode
/// the categories of a nominal feature.
///
/// The category space of a feature is fixed by the codec,
/// not by the examples that reach a node,
/// so a nominal split emits one branch per code returned by
/// [`CategoryCodec::encoded_categories`], even if no example holds it.
pub trait CategoryCodec: Sync {
    /// Returns the ordered codes of the categories of `feature`,
    /// or `None` if the codec knows nothing about it.
    fn encoded_categories(&self, feature: usize) -> Option<Vec<usize>>;

    /// Returns the raw label encoded as `code` for `feature`.
    fn decode(&self, feature: usize, code: usize) -> Option<&str>;
}

/// Encodes string labels as `0..n`,
/// where the labels are sorted in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct LabelEncoder {
    classes: Vec<String>,
    index: HashMap<String, usize>,
}

impl From<Vec<String>> for LabelEncoder {
    fn from(classes: Vec<String>) -> Self {
        Self::from_classes(classes)
    }
}

impl From<LabelEncoder> for Vec<String> {
    fn from(encoder: LabelEncoder) -> Self {
        encoder.classes
    }
}

impl LabelEncoder {
    /// Construct a `LabelEncoder` from the distinct values of `labels`.
    pub fn fit<I, S>(labels: I) -> Self
        where I: IntoIterator<Item = S>,
              S: AsRef<str>,
    {
        let classes = labels.into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();
        Self::from_classes(classes)
    }

    fn from_classes(classes: Vec<String>) -> Self {
        let index = classes.iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        Self { classes, index }
    }

    /// Fit the encoder to `labels` and returns the encoded labels.
    pub fn fit_transform<S: AsRef<str>>(labels: &[S]) -> (Self, Vec<usize>) {
        let encoder = Self::fit(labels);
        let codes = labels.iter()
            .map(|s| encoder.index[s.as_ref()])
            .collect();
        (encoder, codes)
    }

    /// Returns the code of `label`.
    pub fn encode(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Returns the label of `code`.
    pub fn decode(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(|s| s.as_str())
    }

    /// Returns the known labels, ordered by their codes.
    pub fn classes(&self) -> &[String] {
        &self.classes[..]
    }

    /// Returns the codes `0..n` of the known labels.
    pub fn encoded_classes(&self) -> Vec<usize> {
        (0..self.classes.len()).collect()
    }

    /// Returns the number of known labels.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if the encoder knows no label.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Per-feature table of [`LabelEncoder`].
/// Numerical features have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encoders {
    encoders: Vec<Option<LabelEncoder>>,
}

impl Encoders {
    pub(crate) fn new(encoders: Vec<Option<LabelEncoder>>) -> Self {
        Self { encoders }
    }

    /// Returns the encoder of `feature`, if it is nominal.
    pub fn get(&self, feature: usize) -> Option<&LabelEncoder> {
        self.encoders.get(feature)
            .and_then(|enc| enc.as_ref())
    }
}

impl CategoryCodec for Encoders {
    fn encoded_categories(&self, feature: usize) -> Option<Vec<usize>> {
        self.get(feature).map(LabelEncoder::encoded_classes)
    }

    fn decode(&self, feature: usize, code: usize) -> Option<&str> {
        self.get(feature)?.decode(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_sorted_labels() {
        let labels = ["rain", "sunny", "overcast", "rain"];
        let (encoder, codes) = LabelEncoder::fit_transform(&labels);

        assert_eq!(encoder.classes(), &["overcast", "rain", "sunny"]);
        assert_eq!(codes, vec![1, 2, 0, 1]);
        assert_eq!(encoder.encode("sunny"), Some(2));
        assert_eq!(encoder.encode("snow"), None);
        assert_eq!(encoder.decode(0), Some("overcast"));
        assert_eq!(encoder.decode(3), None);
        assert_eq!(encoder.encoded_classes(), vec![0, 1, 2]);
    }

    #[test]
    fn numerical_features_have_no_codec_entry() {
        let encoders = Encoders::new(vec![
            None,
            Some(LabelEncoder::fit(["b", "a"])),
        ]);

        assert!(encoders.encoded_categories(0).is_none());
        assert!(encoders.encoded_categories(2).is_none());
        assert_eq!(encoders.encoded_categories(1), Some(vec![0, 1]));
        assert_eq!(encoders.decode(1, 1), Some("b"));
        assert_eq!(encoders.decode(0, 0), None);
    }
}
