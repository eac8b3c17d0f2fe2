//! Helpers shared by the splitter.

pub(crate) mod checker;
