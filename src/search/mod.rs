//! Fuzzy food search with a deterministic re-ranking on top.

pub mod fuzzy;
pub mod index;
pub mod ranking;
pub mod suggest;

pub use index::{build_index, SearchIndex};
pub use ranking::{search, MAX_RESULTS};
pub use suggest::suggest;
