//! Entropy and information of a feature on a set of examples.
//!
//! The information of a feature is the size-weighted average entropy
//! of the partition the feature induces (ID3's conditional entropy).
//! Lower is better.

use std::collections::BTreeMap;

use super::record::{Candidate, ClassCounts, SplitRule};


/// Returns the entropy (in bits) of the given class counts.
/// `total` must be the sum of `counts`.
#[inline(always)]
fn entropic_impurity<'a, I>(counts: I, total: usize) -> f64
    where I: IntoIterator<Item = &'a usize>
{
    if total == 0 { return 0f64; }
    let total = total as f64;

    counts.into_iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
}


/// Returns the number of examples of each class.
pub fn class_counts(labels: &[usize]) -> ClassCounts {
    let mut counts = ClassCounts::new();
    for &y in labels {
        *counts.entry(y).or_insert(0) += 1;
    }
    counts
}


/// Returns the Shannon entropy (in bits) of `labels`.
/// The entropy of an empty set is `0`.
pub fn entropy(labels: &[usize]) -> f64 {
    entropy_with_counts(labels).0
}


/// Returns the entropy of `labels` together with its class counts.
pub fn entropy_with_counts(labels: &[usize]) -> (f64, ClassCounts) {
    let counts = class_counts(labels);
    let entropy = entropic_impurity(counts.values(), labels.len());
    (entropy, counts)
}


/// Returns the entropy of the branch-size distribution of a split,
/// `- Σ_i (s_i / s) log2(s_i / s)`.
/// This is `0` for a split with at most one non-empty branch.
pub fn split_information(branch_sizes: &[usize]) -> f64 {
    let total = branch_sizes.iter().sum::<usize>();
    entropic_impurity(branch_sizes, total)
}


/// Information of a nominal feature.
///
/// `values[i]` is the category code of the `i`-th example
/// and `labels[i]` its class.
/// The branch sizes of the candidate are the sizes of the partitions
/// of the categories present in `values`, ascending by code.
pub fn information_nominal(values: &[usize], labels: &[usize]) -> Candidate {
    debug_assert_eq!(values.len(), labels.len());
    let n_examples = values.len();

    let mut partitions = BTreeMap::<usize, ClassCounts>::new();
    for (&v, &y) in values.iter().zip(labels) {
        *partitions.entry(v)
            .or_default()
            .entry(y)
            .or_insert(0) += 1;
    }

    let mut info = 0f64;
    let mut branch_sizes = Vec::with_capacity(partitions.len());
    for counts in partitions.values() {
        let size = counts.values().sum::<usize>();
        info += size as f64 * entropic_impurity(counts.values(), size);
        branch_sizes.push(size);
    }

    let info = if n_examples > 0 { info / n_examples as f64 } else { 0f64 };
    Candidate::new(info, SplitRule::Nominal { branch_sizes })
}


/// Information of a numerical feature at its best pivot.
///
/// The examples are sorted by value and every boundary
/// between two distinct adjacent values is tried.
/// The boundary `i` minimizing `i H(left) + (n - i) H(right)` wins;
/// on ties the smallest boundary is kept.
/// The pivot is the largest value on the left side,
/// so the rule reads `value <= pivot`.
///
/// If `values` takes a single value, no boundary exists.
/// The candidate then has no pivot, sends every example to `LESS`,
/// and its information is the entropy of `labels`.
pub fn information_numerical(values: &[f64], labels: &[usize]) -> Candidate {
    debug_assert_eq!(values.len(), labels.len());
    let n_examples = values.len();

    let mut order = (0..n_examples).collect::<Vec<_>>();
    order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));

    // Map the class codes to `0..n_classes`
    // so that the counts on each side are dense vectors.
    let classes = class_counts(labels);
    let dense = classes.keys()
        .enumerate()
        .map(|(k, &y)| (y, k))
        .collect::<BTreeMap<_, _>>();

    let mut left = vec![0_usize; classes.len()];
    let mut right = classes.values().copied().collect::<Vec<_>>();

    let mut best_score = f64::INFINITY;
    let mut best_pivot = None;
    let mut best_sizes = [n_examples, 0];

    for (i, pair) in order.windows(2).enumerate() {
        let (prev, next) = (pair[0], pair[1]);

        // Move `prev` from right to left.
        let k = dense[&labels[prev]];
        left[k] += 1;
        right[k] -= 1;

        if values[prev] == values[next] { continue; }

        let n_left = i + 1;
        let n_right = n_examples - n_left;
        let score = n_left as f64 * entropic_impurity(&left, n_left)
            + n_right as f64 * entropic_impurity(&right, n_right);

        if score < best_score {
            best_score = score;
            best_pivot = Some(values[prev]);
            best_sizes = [n_left, n_right];
        }
    }

    match best_pivot {
        Some(pivot) => {
            let rule = SplitRule::Numerical {
                pivot: Some(pivot),
                branch_sizes: best_sizes,
            };
            Candidate::new(best_score / n_examples as f64, rule)
        },
        None => {
            let info = entropic_impurity(classes.values(), n_examples);
            let rule = SplitRule::Numerical {
                pivot: None,
                branch_sizes: [n_examples, 0],
            };
            Candidate::new(info, rule)
        },
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::record::SplitKind;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn assert_close(expected: f64, got: f64) {
        assert!(
            (expected - got).abs() < TEST_TOLERANCE,
            "expected {expected}, got {got}.",
        );
    }

    #[test]
    fn test_entropy_single_class() {
        assert_close(0f64, entropy(&[3, 3, 3, 3]));
    }

    #[test]
    fn test_entropy_balanced_classes() {
        for k in 2..=5_usize {
            let labels = (0..4 * k).map(|i| i % k).collect::<Vec<_>>();
            assert_close((k as f64).log2(), entropy(&labels));
        }
    }

    #[test]
    fn test_entropy_empty() {
        assert_eq!(entropy(&[]), 0f64);
        let (e, counts) = entropy_with_counts(&[]);
        assert_eq!(e, 0f64);
        assert!(counts.is_empty());
    }

    #[test]
    fn test_entropy_with_counts() {
        let (e, counts) = entropy_with_counts(&[1, 0, 1, 1]);
        let expected = -(0.25f64 * 0.25f64.log2() + 0.75 * 0.75f64.log2());
        assert_close(expected, e);
        assert_eq!(counts, ClassCounts::from([(0, 1), (1, 3)]));
    }

    #[test]
    fn test_split_information() {
        assert_close(1f64, split_information(&[2, 2]));
        assert_close(2f64, split_information(&[1, 1, 1, 1]));
        assert_eq!(split_information(&[5]), 0f64);
        assert_eq!(split_information(&[5, 0]), 0f64);
        assert_eq!(split_information(&[]), 0f64);
    }

    #[test]
    fn test_information_nominal_perfect() {
        let values = [0, 0, 1, 1];
        let labels = [0, 0, 1, 1];
        let candidate = information_nominal(&values, &labels);

        assert_eq!(candidate.kind(), SplitKind::Nominal);
        assert_close(0f64, candidate.information());
        assert_eq!(candidate.rule().branch_sizes(), &[2, 2]);
    }

    #[test]
    fn test_information_nominal_weighted() {
        // Category 0: {a, a, b}, category 2: {b}.
        let values = [0, 2, 0, 0];
        let labels = [0, 1, 0, 1];
        let candidate = information_nominal(&values, &labels);

        let h = -(2f64 / 3f64) * (2f64 / 3f64).log2()
            - (1f64 / 3f64) * (1f64 / 3f64).log2();
        assert_close(0.75 * h, candidate.information());
        assert_eq!(candidate.rule().branch_sizes(), &[3, 1]);
    }

    #[test]
    fn test_information_numerical_perfect() {
        let values = [0.3, 0.1, 0.4, 0.2];
        let labels = [1, 0, 1, 0];
        let candidate = information_numerical(&values, &labels);

        assert_close(0f64, candidate.information());
        assert_eq!(candidate.pivot(), Some(0.2));
        assert_eq!(candidate.rule().branch_sizes(), &[2, 2]);
    }

    #[test]
    fn test_information_numerical_alternating() {
        // Boundaries 1 and 3 tie; the first one is kept.
        let values = [1.0, 2.0, 3.0, 4.0];
        let labels = [0, 1, 0, 1];
        let candidate = information_numerical(&values, &labels);

        let h = -(2f64 / 3f64) * (2f64 / 3f64).log2()
            - (1f64 / 3f64) * (1f64 / 3f64).log2();
        assert_close(0.75 * h, candidate.information());
        assert!(candidate.information() > 0f64);
        assert!(candidate.information() <= entropy(&labels));
        assert_eq!(candidate.pivot(), Some(1.0));
        assert_eq!(candidate.rule().branch_sizes(), &[1, 3]);
    }

    #[test]
    fn test_information_numerical_skips_equal_values() {
        // The best cut would separate the two `2.0`s, which is not allowed.
        let values = [1.0, 2.0, 2.0, 3.0];
        let labels = [0, 0, 1, 1];
        let candidate = information_numerical(&values, &labels);

        let pivot = candidate.pivot().unwrap();
        assert!(pivot == 1.0 || pivot == 2.0, "got pivot {pivot}");
        assert!(candidate.information() > 0f64);
    }

    #[test]
    fn test_information_numerical_constant() {
        let values = [5.0; 4];
        let labels = [0, 1, 0, 0];
        let candidate = information_numerical(&values, &labels);

        assert_eq!(candidate.pivot(), None);
        assert!(candidate.is_degenerate());
        assert_eq!(candidate.rule().branch_sizes(), &[4, 0]);
        assert_close(entropy(&labels), candidate.information());
    }

    #[test]
    fn test_information_numerical_single_example() {
        let candidate = information_numerical(&[1.0], &[0]);
        assert_eq!(candidate.pivot(), None);
        assert_eq!(candidate.information(), 0f64);
    }
}
