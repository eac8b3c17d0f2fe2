//! Defines the rule that ranks the candidates of a node.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::cmp::Ordering;

use super::record::Candidate;


/// Splitting criteria for choosing the feature of a node.
/// * `Criterion::Information` minimizes the expected entropy
///     after the split (ID3).
/// * `Criterion::GainRatio` minimizes the expected entropy
///     divided by the split information,
///     `- Σ_i (s_i / s) log2(s_i / s)`,
///     of the candidate's branch sizes.
///
/// Under both criteria, a degenerate candidate
/// (every example in one branch) ranks after every other candidate,
/// so the split information is never zero when it is divided by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Criterion {
    /// Information (conditional entropy).
    #[default]
    Information,
    /// Information normalized by the split information.
    GainRatio,
}


impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Information => "Information",
            Self::GainRatio => "Information / Split information",
        };

        write!(f, "{name}")
    }
}


impl Criterion {
    /// Returns the value this criterion minimizes,
    /// or `None` for a degenerate candidate.
    pub fn key(&self, candidate: &Candidate) -> Option<f64> {
        if candidate.is_degenerate() { return None; }

        let key = match self {
            Self::Information => candidate.information(),
            Self::GainRatio => {
                candidate.information() / candidate.rule().split_information()
            },
        };
        Some(key)
    }

    /// Compares two candidates.
    /// `Ordering::Less` means that `a` is the better one.
    pub fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
        match (self.key(a), self.key(b)) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Returns `true` if `a` should replace the current best `b`.
    /// Every candidate is better than no candidate,
    /// and ties keep the current best.
    pub fn is_better(&self, a: &Candidate, b: Option<&Candidate>) -> bool {
        match b {
            None => true,
            Some(b) => self.compare(a, b) == Ordering::Less,
        }
    }

    /// Returns the best pair of feature index and candidate.
    /// The candidates are visited in the given order,
    /// so the earliest one wins ties.
    pub(crate) fn select<I>(&self, candidates: I) -> Option<(usize, Candidate)>
        where I: IntoIterator<Item = (usize, Candidate)>
    {
        let mut best: Option<(usize, Candidate)> = None;
        for (feature, candidate) in candidates {
            if self.is_better(&candidate, best.as_ref().map(|(_, c)| c)) {
                best = Some((feature, candidate));
            }
        }
        best
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::record::SplitRule;

    fn nominal(information: f64, branch_sizes: Vec<usize>) -> Candidate {
        Candidate::new(information, SplitRule::Nominal { branch_sizes })
    }

    #[test]
    fn information_prefers_lower_value() {
        let a = nominal(0.2, vec![2, 2]);
        let b = nominal(0.5, vec![2, 2]);

        assert_eq!(Criterion::Information.compare(&a, &b), Ordering::Less);
        assert!(Criterion::Information.is_better(&a, Some(&b)));
        assert!(!Criterion::Information.is_better(&b, Some(&a)));
        assert!(Criterion::Information.is_better(&b, None));
    }

    #[test]
    fn ties_keep_the_earlier_candidate() {
        let candidates = vec![
            (3, nominal(0.5, vec![2, 2])),
            (1, nominal(0.5, vec![1, 3])),
        ];
        let (feature, _) = Criterion::Information.select(candidates).unwrap();
        assert_eq!(feature, 3);
    }

    #[test]
    fn gain_ratio_divides_by_split_information() {
        // 0.5 / 1 vs 0.6 / 2
        let two_way = nominal(0.5, vec![2, 2]);
        let four_way = nominal(0.6, vec![1, 1, 1, 1]);
        let candidates = vec![(0, two_way.clone()), (1, four_way.clone())];

        let (feature, _) = Criterion::Information
            .select(candidates.clone())
            .unwrap();
        assert_eq!(feature, 0);

        let (feature, _) = Criterion::GainRatio.select(candidates).unwrap();
        assert_eq!(feature, 1);
        assert_eq!(Criterion::GainRatio.key(&four_way), Some(0.3));
    }

    #[test]
    fn degenerate_candidates_rank_last() {
        let constant = Candidate::new(
            0f64,
            SplitRule::Numerical { pivot: None, branch_sizes: [4, 0] },
        );
        let single = nominal(0f64, vec![4]);
        let useful = nominal(0.9, vec![2, 2]);

        for criterion in [Criterion::Information, Criterion::GainRatio] {
            assert_eq!(criterion.key(&constant), None);
            assert_eq!(criterion.compare(&useful, &constant), Ordering::Less);
            assert_eq!(criterion.compare(&constant, &single), Ordering::Equal);

            let candidates = vec![
                (0, constant.clone()),
                (1, single.clone()),
                (2, useful.clone()),
            ];
            let (feature, _) = criterion.select(candidates).unwrap();
            assert_eq!(feature, 2);

            let candidates = vec![(5, single.clone()), (0, constant.clone())];
            let (feature, best) = criterion.select(candidates).unwrap();
            assert_eq!(feature, 5);
            assert!(best.is_degenerate());
        }
    }

    #[test]
    fn select_on_nothing() {
        assert!(Criterion::GainRatio.select(Vec::new()).is_none());
    }
}
