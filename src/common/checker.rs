//! This file defines some functions that checks some pre-conditions
//! of a `calc`/`split` call.
//! E.g., every example index exists and appears once.

use fixedbitset::FixedBitSet;

use std::collections::HashSet;

use crate::error::SplitError;


/// Check whether `examples` is a non-empty set of
/// distinct example indices smaller than `n_examples`.
#[inline(always)]
pub(crate) fn check_examples(examples: &[usize], n_examples: usize)
    -> Result<(), SplitError>
{
    if examples.is_empty() { return Err(SplitError::NoExamples); }
    check_indices(examples, n_examples)
}


/// Check whether `examples` is a set of
/// distinct example indices smaller than `n_examples`.
/// The empty set passes.
///
/// The cost depends on `examples.len()` only,
/// so that deep nodes of a large dataset stay cheap.
#[inline(always)]
pub(crate) fn check_indices(examples: &[usize], n_examples: usize)
    -> Result<(), SplitError>
{
    let mut seen = HashSet::with_capacity(examples.len());
    for &index in examples {
        if index >= n_examples {
            return Err(SplitError::IndexOutOfRange { index, n_examples });
        }
        if !seen.insert(index) {
            return Err(SplitError::DuplicateIndex(index));
        }
    }
    Ok(())
}


/// Check whether `features` is a non-empty set of
/// distinct feature indices smaller than `n_features`.
#[inline(always)]
pub(crate) fn check_features(features: &[usize], n_features: usize)
    -> Result<(), SplitError>
{
    if features.is_empty() { return Err(SplitError::NoCandidateFeatures); }

    let mut seen = FixedBitSet::with_capacity(n_features);
    for &feature in features {
        if feature >= n_features {
            return Err(SplitError::FeatureOutOfRange { feature, n_features });
        }
        if seen.put(feature) {
            return Err(SplitError::DuplicateFeature(feature));
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn examples_success() {
        assert_eq!(check_examples(&[3, 0, 2], 4), Ok(()));
    }

    #[test]
    fn examples_empty() {
        assert_eq!(check_examples(&[], 4), Err(SplitError::NoExamples));
    }

    #[test]
    fn empty_indices_pass() {
        assert_eq!(check_indices(&[], 4), Ok(()));
    }

    #[test]
    fn examples_out_of_range() {
        assert_eq!(
            check_examples(&[0, 4], 4),
            Err(SplitError::IndexOutOfRange { index: 4, n_examples: 4 })
        );
    }

    #[test]
    fn examples_duplicated() {
        assert_eq!(
            check_examples(&[1, 2, 1], 4),
            Err(SplitError::DuplicateIndex(1))
        );
    }

    #[test]
    fn indices_of_a_huge_dataset() {
        // A check sized by the dataset would not fit in memory.
        let n_examples = usize::MAX;
        assert_eq!(check_examples(&[7, 1 << 40, 3], n_examples), Ok(()));
        assert_eq!(
            check_indices(&[1 << 40, 2, 1 << 40], n_examples),
            Err(SplitError::DuplicateIndex(1 << 40))
        );
    }

    #[test]
    fn features_empty() {
        assert_eq!(check_features(&[], 2), Err(SplitError::NoCandidateFeatures));
    }

    #[test]
    fn features_invalid() {
        assert_eq!(
            check_features(&[2], 2),
            Err(SplitError::FeatureOutOfRange { feature: 2, n_features: 2 })
        );
        assert_eq!(
            check_features(&[0, 0], 2),
            Err(SplitError::DuplicateFeature(0))
        );
    }
}
