//! Struct `Dataset` represents the labeled examples a tree is grown on.

pub mod feature;
pub mod encoder;
pub mod dataset;
pub mod builder;
pub mod reader;


pub use feature::{Feature, FeatureKind};
pub use encoder::{CategoryCodec, Encoders, LabelEncoder};
pub use dataset::Dataset;
pub use builder::DatasetBuilder;
pub use reader::DatasetReader;
