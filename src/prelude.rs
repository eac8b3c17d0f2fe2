//! Exports the splitter, the dataset and the records.
//! 
pub use crate::splitter::{
    // Engine
    Splitter,
    SplitterBuilder,
    Criterion,


    // Records
    DecisionRecord,
    Branch,
    Selector,
    SplitKind,
    SplitRule,
};


pub use crate::sample::{
    Dataset,
    DatasetBuilder,
    DatasetReader,
    Feature,
    FeatureKind,
    CategoryCodec,
    Encoders,
    LabelEncoder,
};


pub use crate::error::{
    SplitError,
    DatasetError,
};
