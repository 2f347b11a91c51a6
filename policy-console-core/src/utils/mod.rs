//! Utility functions module

mod split;

pub use split::{split_and_trim, split_principals};
