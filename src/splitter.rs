//! The node-splitting engine of an ID3 decision tree.
//!
//! [`Splitter::calc`] scores each candidate feature of a node
//! and keeps the best one according to a [`Criterion`].
//! [`Splitter::split`] then partitions the node's examples
//! into one [`Branch`] per child.

pub mod entropy;
pub mod record;
pub mod criterion;
pub mod builder;
pub mod id3_splitter;

mod partition;
mod report;


pub use entropy::{
    entropy,
    entropy_with_counts,
    information_nominal,
    information_numerical,
    split_information,
};
pub use record::{
    Branch,
    Candidate,
    ClassCounts,
    DecisionRecord,
    NodeSummary,
    Selector,
    SplitKind,
    SplitRule,
};
pub use criterion::Criterion;
pub use builder::SplitterBuilder;
pub use id3_splitter::Splitter;
