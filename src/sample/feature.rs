use serde::{Serialize, Deserialize};

/// The kind of a feature, which decides how a node splits on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Continuous values, split by a single pivot.
    Numerical,
    /// Label-encoded categories, split by equality per category.
    Nominal,
}

/// A column of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    /// Continuous feature.
    Numerical {
        /// Feature name
        name: String,
        /// Feature value of each example.
        vals: Vec<f64>,
    },
    /// Categorical feature.
    Nominal {
        /// Feature name
        name: String,
        /// Category code of each example.
        codes: Vec<usize>,
    },
}

impl Feature {
    /// Construct a numerical feature.
    pub fn numerical<T: ToString>(name: T, vals: Vec<f64>) -> Self {
        Self::Numerical { name: name.to_string(), vals, }
    }

    /// Construct a nominal feature from category codes.
    pub fn nominal<T: ToString>(name: T, codes: Vec<usize>) -> Self {
        Self::Nominal { name: name.to_string(), codes, }
    }

    /// Get the feature name.
    pub fn name(&self) -> &str {
        match self {
            Self::Numerical { name, .. } => name,
            Self::Nominal   { name, .. } => name,
        }
    }

    /// Returns the kind of the feature.
    pub fn kind(&self) -> FeatureKind {
        match self {
            Self::Numerical { .. } => FeatureKind::Numerical,
            Self::Nominal   { .. } => FeatureKind::Nominal,
        }
    }

    /// Returns `true` if the feature is numerical.
    pub fn is_numerical(&self) -> bool {
        self.kind() == FeatureKind::Numerical
    }

    /// Returns the number of items in this feature.
    pub fn len(&self) -> usize {
        match self {
            Self::Numerical { vals, .. }  => vals.len(),
            Self::Nominal   { codes, .. } => codes.len(),
        }
    }

    /// Returns `true` if the feature holds no item.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the numerical values, if the feature is numerical.
    pub fn values(&self) -> Option<&[f64]> {
        match self {
            Self::Numerical { vals, .. } => Some(&vals[..]),
            Self::Nominal { .. } => None,
        }
    }

    /// Returns the category codes, if the feature is nominal.
    pub fn codes(&self) -> Option<&[usize]> {
        match self {
            Self::Numerical { .. } => None,
            Self::Nominal { codes, .. } => Some(&codes[..]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_kind() {
        let num = Feature::numerical("age", vec![1.0, 2.0]);
        let nom = Feature::nominal("color", vec![0, 1, 1]);

        assert_eq!(num.name(), "age");
        assert!(num.is_numerical());
        assert_eq!(num.values(), Some(&[1.0, 2.0][..]));
        assert!(num.codes().is_none());

        assert_eq!(nom.kind(), FeatureKind::Nominal);
        assert_eq!(nom.len(), 3);
        assert_eq!(nom.codes(), Some(&[0, 1, 1][..]));
        assert!(nom.values().is_none());
    }
}
