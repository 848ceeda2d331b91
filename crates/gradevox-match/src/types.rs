//! Roster and match types

use serde::{Deserialize, Serialize};

/// Immutable snapshot of one roster row from the open gradebook sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentData {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    /// All cells of the original row, kept verbatim for the caller.
    pub row_data: Vec<String>,
}

impl StudentData {
    /// Build a snapshot from name parts; `full_name` is derived.
    pub fn new(first_name: &str, last_name: &str, row_data: Vec<String>) -> Self {
        let full_name = format!("{} {}", first_name.trim(), last_name.trim())
            .trim()
            .to_string();
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            full_name,
            row_data,
        }
    }
}

/// One ranked candidate for a spoken name, recomputed per utterance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentMatch {
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    /// Best similarity across first, last, and full name, in [0, 1].
    pub similarity: f32,
    pub row_data: Vec<String>,
}

/// Matcher configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Minimum similarity a candidate must exceed (strictly) to be kept.
    pub match_threshold: f32,
    /// Maximum number of candidates returned per query.
    pub max_matches: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            match_threshold: 0.6,
            max_matches: 5,
        }
    }
}
