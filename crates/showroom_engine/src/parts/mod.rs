//! Part classification subsystem
//!
//! Partitions a loaded scene graph into the 8 semantic part categories
//! that the styling appliers target.

pub mod classifier;
pub mod index;

pub use classifier::{classify, classify_names, ClassifierRule, CLASSIFIER_RULES};
pub use index::{PartCategory, PartIndex};
