//! Browser utilities.

pub mod dark_mode;
