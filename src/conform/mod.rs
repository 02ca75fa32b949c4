//! Checking JSON input against the document schema.

mod conformer;
mod options;

pub use conformer::{Conformed, Conformer};
pub use options::{ConformOptions, ThirdsMode};
