//! The match analysis engine: a deterministic function from one match record
//! (plus roster and optional population benchmarks) to a structured analysis.
//!
//! The engine never fails — missing or partial input degrades to estimated
//! or placeholder fields in the result instead of an error. It performs no
//! IO and holds no mutable state, so one [`MatchAnalyzer`] can be shared
//! across threads for a whole batch of matches.

pub mod analyzer;
pub mod benchmark;
pub mod inventory;
mod lane;
mod laning;
mod mistakes;
pub mod position;
mod rating;
pub mod result;
mod sampler;
pub mod selection;

pub use analyzer::MatchAnalyzer;
pub use result::{AnalysisResult, InventoryItem, InventorySnapshot};
pub use selection::select_desired;
