use log::{debug, trace};
use rayon::prelude::*;

use crate::common::checker;
use crate::error::SplitError;
use crate::sample::{CategoryCodec, Dataset, Encoders, Feature};

use super::{
    partition,
    report,
    builder::SplitterBuilder,
    criterion::Criterion,
    entropy::*,
    record::*,
};


/// Chooses the best feature of a decision tree node
/// and partitions the node's examples by it.
///
/// A `Splitter` only reads its dataset and codec,
/// so it can be shared by threads that grow different subtrees.
///
/// # Example
///
/// ```
/// use id3split::prelude::*;
///
/// let dataset = Dataset::builder()
///     .nominal("color", ["x", "x", "y", "y"])
///     .target(["A", "A", "B", "B"])
///     .build()
///     .unwrap();
/// let splitter = Splitter::new(&dataset);
///
/// let examples = [0, 1, 2, 3];
/// let decision = splitter.calc(&examples, &[0]).unwrap();
/// assert_eq!(decision.entropy(), 1.0);
///
/// let branches = splitter.split(&examples, &decision).unwrap();
/// assert_eq!(branches[0].indices(), &[0, 1]);
/// assert_eq!(branches[1].label(), Some("y"));
/// ```
pub struct Splitter<'a, C = Encoders> {
    dataset: &'a Dataset,
    codec: &'a C,
    criterion: Criterion,
    verbose: bool,
}


impl<'a> Splitter<'a, Encoders> {
    /// Construct a `Splitter` with the default parameters.
    /// See [`SplitterBuilder`].
    pub fn new(dataset: &'a Dataset) -> Self {
        SplitterBuilder::new(dataset).build()
    }
}


impl<'a, C> Splitter<'a, C>
    where C: CategoryCodec
{
    pub(super) fn from_components(
        dataset: &'a Dataset,
        codec: &'a C,
        criterion: Criterion,
        verbose: bool,
    ) -> Self
    {
        Self { dataset, codec, criterion, verbose, }
    }

    /// Returns the dataset this splitter reads.
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Returns the criterion that ranks the features.
    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    /// Returns the information of `feature` on `examples`.
    /// `labels[k]` must be the class of `examples[k]`.
    fn score(&self, feature: usize, examples: &[usize], labels: &[usize])
        -> Candidate
    {
        match &self.dataset.features()[feature] {
            Feature::Numerical { vals, .. } => {
                let xs = examples.iter()
                    .map(|&i| vals[i])
                    .collect::<Vec<_>>();
                information_numerical(&xs, labels)
            },
            Feature::Nominal { codes, .. } => {
                let xs = examples.iter()
                    .map(|&i| codes[i])
                    .collect::<Vec<_>>();
                information_nominal(&xs, labels)
            },
        }
    }

    /// Returns the best split of the node holding `examples`,
    /// among the features in `features`.
    ///
    /// The features are scored in parallel,
    /// then compared in the order of `features` by the criterion;
    /// the earliest feature wins ties.
    /// The returned record also holds the entropy and the class counts
    /// of `examples`.
    ///
    /// If no feature separates the examples,
    /// the record is still returned but
    /// [`DecisionRecord::is_degenerate`] is `true`.
    pub fn calc(&self, examples: &[usize], features: &[usize])
        -> Result<DecisionRecord, SplitError>
    {
        let (n_examples, n_features) = self.dataset.shape();
        checker::check_features(features, n_features)?;
        checker::check_examples(examples, n_examples)?;

        let target = self.dataset.target();
        let labels = examples.iter()
            .map(|&i| target[i])
            .collect::<Vec<_>>();
        let (entropy, class_counts) = entropy_with_counts(&labels);

        let scored = features.par_iter()
            .map(|&feature| (feature, self.score(feature, examples, &labels)))
            .collect::<Vec<_>>();

        for (feature, candidate) in scored.iter() {
            debug!(
                "feature {feature}: information {:.5}, key {:?}, pivot {:?}",
                candidate.information(),
                self.criterion.key(candidate),
                candidate.pivot(),
            );
        }
        if self.verbose {
            report::print_candidates(self.dataset, self.criterion, &scored);
        }

        let (feature, candidate) = self.criterion.select(scored)
            .ok_or(SplitError::NoCandidateFeatures)?;

        let feature_name = self.dataset.feature(feature)
            .map(|f| f.name().to_string());
        let summary = NodeSummary { entropy, class_counts };
        let decision = DecisionRecord::new(
            feature, feature_name, candidate, summary
        );

        debug!("{} examples: {decision}", examples.len());
        if self.verbose {
            report::print_decision(&decision);
        }

        Ok(decision)
    }

    /// Partitions `examples` by the rule of `decision`.
    ///
    /// * A numerical decision yields the `LESS` (`value <= pivot`)
    ///     and `GREATER` (`value > pivot`) branches, in this order.
    ///     A decision without pivot sends every example to `LESS`.
    /// * A nominal decision yields one branch per category
    ///     known to the codec, in the codec's order,
    ///     including categories no example holds.
    ///
    /// Each example of `examples` lands in exactly one branch.
    pub fn split<'r>(&self, examples: &[usize], decision: &'r DecisionRecord)
        -> Result<Vec<Branch<'r>>, SplitError>
    {
        let (n_examples, n_features) = self.dataset.shape();
        let feature = decision.feature();
        let column = self.dataset.feature(feature)
            .ok_or(SplitError::FeatureOutOfRange { feature, n_features })?;
        checker::check_indices(examples, n_examples)?;

        let branches = match (decision.rule(), column) {
            (
                SplitRule::Numerical { pivot, .. },
                Feature::Numerical { vals, .. },
            ) => {
                let [less, greater] = partition::by_pivot(vals, examples, *pivot);
                vec![
                    Branch::new(decision, less, Selector::Less, None),
                    Branch::new(decision, greater, Selector::Greater, None),
                ]
            },
            (
                SplitRule::Nominal { .. },
                Feature::Nominal { codes, .. },
            ) => {
                let categories = self.codec.encoded_categories(feature)
                    .ok_or(SplitError::MissingCodec { feature })?;
                let parts = partition::by_category(
                    feature, codes, examples, &categories
                )?;

                categories.into_iter()
                    .zip(parts)
                    .map(|(code, indices)| {
                        let label = self.codec.decode(feature, code)
                            .map(str::to_string);
                        Branch::new(
                            decision, indices, Selector::Category(code), label
                        )
                    })
                    .collect::<Vec<_>>()
            },
            _ => {
                return Err(SplitError::KindMismatch { feature });
            },
        };

        trace!(
            "split on feature {feature}: {:?}",
            branches.iter().map(Branch::size).collect::<Vec<_>>()
        );
        Ok(branches)
    }
}
