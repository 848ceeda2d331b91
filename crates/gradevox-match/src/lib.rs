//! Fuzzy student matching for GradeVox
//!
//! This crate ranks roster students against spoken name fragments. It is
//! pure and synchronous: a similarity scorer plus a matcher that filters,
//! sorts, and truncates candidates against a roster snapshot.

pub mod matcher;
pub mod similarity;
pub mod types;

pub use matcher::StudentMatcher;
pub use similarity::similarity;
pub use types::{MatcherConfig, StudentData, StudentMatch};
