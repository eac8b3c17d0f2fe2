//! Records produced by the splitter:
//! the per-feature [`Candidate`], the per-node [`DecisionRecord`]
//! and the per-child [`Branch`].
use serde::{Serialize, Deserialize};

use std::fmt;
use std::collections::BTreeMap;

use crate::constants::{LESS, GREATER};
use super::entropy::split_information;


/// Number of examples of each class, keyed by class code.
pub type ClassCounts = BTreeMap<usize, usize>;


/// The kind of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitKind {
    /// Threshold comparison against a pivot.
    Numerical,
    /// Equality per category.
    Nominal,
}


/// The splitting rule of a candidate.
/// Each kind carries only the fields meaningful to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SplitRule {
    /// `value <= pivot` goes to `LESS`, `value > pivot` to `GREATER`.
    Numerical {
        /// `None` if the feature takes a single value,
        /// so that no pivot separates the examples.
        pivot: Option<f64>,
        /// Sizes of the `[LESS, GREATER]` branches.
        branch_sizes: [usize; 2],
    },
    /// One branch per category.
    Nominal {
        /// Sizes of the partitions of the categories
        /// present in the examples, ascending by code.
        branch_sizes: Vec<usize>,
    },
}


impl SplitRule {
    /// Returns the kind of this rule.
    pub fn kind(&self) -> SplitKind {
        match self {
            Self::Numerical { .. } => SplitKind::Numerical,
            Self::Nominal { .. } => SplitKind::Nominal,
        }
    }

    /// Returns the pivot of a numerical rule.
    pub fn pivot(&self) -> Option<f64> {
        match self {
            Self::Numerical { pivot, .. } => *pivot,
            Self::Nominal { .. } => None,
        }
    }

    /// Returns the branch sizes this rule was scored with.
    pub fn branch_sizes(&self) -> &[usize] {
        match self {
            Self::Numerical { branch_sizes, .. } => &branch_sizes[..],
            Self::Nominal { branch_sizes } => &branch_sizes[..],
        }
    }

    /// Returns `true` if this rule sends every example
    /// to a single branch.
    pub fn is_degenerate(&self) -> bool {
        self.branch_sizes()
            .iter()
            .filter(|&&size| size > 0)
            .count() <= 1
    }

    /// Returns the entropy of the branch-size distribution.
    pub fn split_information(&self) -> f64 {
        split_information(self.branch_sizes())
    }
}


/// The score of a single feature on a node,
/// before it is compared to the other features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub(crate) information: f64,
    pub(crate) rule: SplitRule,
}


impl Candidate {
    pub(crate) fn new(information: f64, rule: SplitRule) -> Self {
        Self { information, rule }
    }

    /// Returns the expected entropy after the split.
    /// Lower is better.
    pub fn information(&self) -> f64 {
        self.information
    }

    /// Returns the splitting rule.
    pub fn rule(&self) -> &SplitRule {
        &self.rule
    }

    /// Returns the kind of the split.
    pub fn kind(&self) -> SplitKind {
        self.rule.kind()
    }

    /// Returns the pivot of a numerical candidate.
    pub fn pivot(&self) -> Option<f64> {
        self.rule.pivot()
    }

    /// See [`SplitRule::is_degenerate`].
    pub fn is_degenerate(&self) -> bool {
        self.rule.is_degenerate()
    }
}


/// Statistics of the examples reaching a node.
/// These do not depend on the chosen feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSummary {
    /// Entropy (in bits) of the class labels before splitting.
    pub entropy: f64,
    /// Number of examples of each class.
    pub class_counts: ClassCounts,
}


/// The best split of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub(crate) feature: usize,
    pub(crate) feature_name: Option<String>,
    pub(crate) candidate: Candidate,
    pub(crate) summary: NodeSummary,
}


impl DecisionRecord {
    pub(crate) fn new(
        feature: usize,
        feature_name: Option<String>,
        candidate: Candidate,
        summary: NodeSummary,
    ) -> Self
    {
        Self { feature, feature_name, candidate, summary, }
    }

    /// Returns the index of the winning feature.
    pub fn feature(&self) -> usize {
        self.feature
    }

    /// Returns the name of the winning feature.
    pub fn feature_name(&self) -> Option<&str> {
        self.feature_name.as_deref()
    }

    /// Returns the expected entropy after the split.
    pub fn information(&self) -> f64 {
        self.candidate.information
    }

    /// Returns the entropy of the node before splitting.
    pub fn entropy(&self) -> f64 {
        self.summary.entropy
    }

    /// Returns the information gain of the split,
    /// i.e., `entropy() - information()`.
    pub fn gain(&self) -> f64 {
        self.summary.entropy - self.candidate.information
    }

    /// Returns the number of examples of each class on the node.
    pub fn class_counts(&self) -> &ClassCounts {
        &self.summary.class_counts
    }

    /// Returns the statistics of the node.
    pub fn summary(&self) -> &NodeSummary {
        &self.summary
    }

    /// Returns the winning candidate.
    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    /// Returns the splitting rule.
    pub fn rule(&self) -> &SplitRule {
        &self.candidate.rule
    }

    /// Returns the kind of the split.
    pub fn kind(&self) -> SplitKind {
        self.candidate.kind()
    }

    /// Returns the pivot of a numerical decision.
    pub fn pivot(&self) -> Option<f64> {
        self.candidate.pivot()
    }

    /// Returns the branch sizes the decision was scored with.
    pub fn branch_sizes(&self) -> &[usize] {
        self.candidate.rule.branch_sizes()
    }

    /// Returns `true` if no feature separates the examples of the node.
    /// The driver should make a leaf of such a node.
    pub fn is_degenerate(&self) -> bool {
        self.candidate.is_degenerate()
    }
}


impl fmt::Display for DecisionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.feature_name()
            .map(|name| name.to_string())
            .unwrap_or_else(|| format!("#{}", self.feature));

        match self.rule() {
            SplitRule::Numerical { pivot: Some(pivot), .. } => {
                write!(f, "{name} <= {pivot}")?;
            },
            SplitRule::Numerical { pivot: None, .. } => {
                write!(f, "{name} (no pivot)")?;
            },
            SplitRule::Nominal { .. } => {
                write!(f, "{name} = *")?;
            },
        }
        write!(
            f,
            " [info: {:.5}, entropy: {:.5}]",
            self.information(),
            self.entropy(),
        )
    }
}


/// The value selecting the examples of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selector {
    /// Examples with `value <= pivot`.
    Less,
    /// Examples with `value > pivot`.
    Greater,
    /// Examples whose category has this code.
    Category(usize),
}


impl Selector {
    /// Returns the encoded value of this selector.
    /// `LESS`/`GREATER` for numerical branches, the code otherwise.
    pub fn encoded(&self) -> usize {
        match self {
            Self::Less => LESS,
            Self::Greater => GREATER,
            Self::Category(code) => *code,
        }
    }
}


/// A child partition produced by [`Splitter::split`](crate::Splitter::split).
#[derive(Debug, Clone, PartialEq)]
pub struct Branch<'a> {
    decision: &'a DecisionRecord,
    indices: Vec<usize>,
    selector: Selector,
    label: Option<String>,
    size: usize,
}


impl<'a> Branch<'a> {
    pub(crate) fn new(
        decision: &'a DecisionRecord,
        indices: Vec<usize>,
        selector: Selector,
        label: Option<String>,
    ) -> Self
    {
        let size = indices.len();
        Self { decision, indices, selector, label, size, }
    }

    /// Returns the decision this branch belongs to.
    pub fn decision(&self) -> &'a DecisionRecord {
        self.decision
    }

    /// Returns the example indices of this branch.
    pub fn indices(&self) -> &[usize] {
        &self.indices[..]
    }

    /// Takes the example indices of this branch,
    /// e.g., to pass them to the next `calc` call.
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    /// Returns the value selecting the examples of this branch.
    pub fn selector(&self) -> Selector {
        self.selector
    }

    /// Returns the decoded category label of a nominal branch.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the number of examples in this branch.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if no example reaches this branch.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}
