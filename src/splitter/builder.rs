use crate::sample::{CategoryCodec, Dataset, Encoders};
use super::criterion::Criterion;
use super::id3_splitter::Splitter;


/// A struct that builds [`Splitter`].
/// `SplitterBuilder` keeps parameters for constructing `Splitter`.
///
/// # Example
///
/// ```
/// use id3split::prelude::*;
///
/// let dataset = Dataset::builder()
///     .nominal("outlook", ["sunny", "rain", "rain", "sunny"])
///     .target(["no", "yes", "yes", "no"])
///     .build()
///     .unwrap();
/// let splitter = SplitterBuilder::new(&dataset)
///     .gain_ratio(true)
///     .build();
/// let decision = splitter.calc(&[0, 1, 2, 3], &[0]).unwrap();
/// assert_eq!(decision.information(), 0.0);
/// ```
#[derive(Clone)]
pub struct SplitterBuilder<'a, C = Encoders> {
    dataset: &'a Dataset,
    codec: &'a C,
    criterion: Criterion,
    verbose: bool,
}


impl<'a> SplitterBuilder<'a, Encoders> {
    /// Construct a new instance of [`SplitterBuilder`].
    /// By default, [`SplitterBuilder`] sets the parameters as follows;
    /// ```text
    /// codec: dataset.encoders(),
    /// criterion: Criterion::Information,
    /// verbose: false,
    /// ```
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            codec: dataset.encoders(),
            criterion: Criterion::default(),
            verbose: false,
        }
    }
}


impl<'a, C> SplitterBuilder<'a, C>
    where C: CategoryCodec
{
    /// Set the criterion that ranks the features.
    /// Default value is `Criterion::Information`.
    #[inline]
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// Turn the gain-ratio normalization on or off.
    /// `gain_ratio(true)` is `criterion(Criterion::GainRatio)`.
    #[inline]
    pub fn gain_ratio(self, flag: bool) -> Self {
        let criterion = if flag {
            Criterion::GainRatio
        } else {
            Criterion::Information
        };
        self.criterion(criterion)
    }

    /// Replace the codec that enumerates and decodes
    /// the categories of the nominal features.
    pub fn codec<D>(self, codec: &'a D) -> SplitterBuilder<'a, D>
        where D: CategoryCodec
    {
        SplitterBuilder {
            dataset: self.dataset,
            codec,
            criterion: self.criterion,
            verbose: self.verbose,
        }
    }

    /// Print the candidates of each node to stdout.
    pub fn verbose(mut self, flag: bool) -> Self {
        self.verbose = flag;
        self
    }

    /// Build a `Splitter`.
    /// This method consumes `self`.
    pub fn build(self) -> Splitter<'a, C> {
        Splitter::from_components(
            self.dataset, self.codec, self.criterion, self.verbose
        )
    }
}
