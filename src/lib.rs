#![warn(missing_docs)]

//! 
//! A crate that provides the node-splitting engine
//! of an ID3 decision tree.
//! 
//! For a node holding some examples of a labeled tabular dataset,
//! the engine chooses the single best feature to split on
//! (and, for a numerical feature, the best pivot),
//! then partitions the examples into one branch per child.
//! 
//! - Nominal features
//!     A nominal feature splits the examples by equality,
//!     one branch per category known to its [`CategoryCodec`].
//! 
//! - Numerical features
//!     A numerical feature splits the examples by a single pivot,
//!     `value <= pivot` and `value > pivot`.
//!     The pivot minimizing the expected entropy is found by
//!     sorting the values once and scanning them once.
//! 
//! The features are ranked by the information
//! (the expected entropy after the split, ID3's criterion)
//! or, optionally, by the information divided by the split information.
//! See [`Criterion`].
//! 
//! Growing the tree is left to the caller:
//! 
//! ```
//! use id3split::prelude::*;
//! 
//! let dataset = Dataset::builder()
//!     .numerical("humidity", vec![85.0, 90.0, 70.0, 65.0])
//!     .nominal("windy", ["no", "yes", "no", "yes"])
//!     .target(["stay", "stay", "play", "play"])
//!     .build()
//!     .unwrap();
//! let splitter = Splitter::new(&dataset);
//! 
//! let decision = splitter.calc(&[0, 1, 2, 3], &[0, 1]).unwrap();
//! assert_eq!(decision.feature_name(), Some("humidity"));
//! assert_eq!(decision.pivot(), Some(70.0));
//! 
//! for branch in splitter.split(&[0, 1, 2, 3], &decision).unwrap() {
//!     // Recurse on `branch.indices()`, or make a leaf.
//!     assert_eq!(branch.size(), 2);
//! }
//! ```

pub mod constants;
pub mod error;
pub mod sample;
pub mod splitter;
pub mod prelude;

mod common;


pub use error::{SplitError, DatasetError};

pub use sample::{
    Dataset,
    DatasetBuilder,
    DatasetReader,
    Feature,
    FeatureKind,
    CategoryCodec,
    Encoders,
    LabelEncoder,
};

pub use splitter::{
    Splitter,
    SplitterBuilder,
    Criterion,
    DecisionRecord,
    Branch,
};
