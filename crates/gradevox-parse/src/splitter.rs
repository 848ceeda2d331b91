//! Splitting multi-student utterances and detecting session termination.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Splitter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Sentinel words that end a recording session (matched by
    /// case-insensitive substring search).
    pub termination_words: Vec<String>,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            termination_words: vec!["done".to_string(), "finish".to_string()],
        }
    }
}

impl SplitterConfig {
    /// True when the utterance contains any termination sentinel.
    pub fn is_termination(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.termination_words
            .iter()
            .any(|word| lower.contains(&word.to_lowercase()))
    }
}

/// Split a multi-student utterance into per-student segments.
///
/// Segments break at commas, and at an "and" token once the segment being
/// accumulated already contains a digit. The digit guard keeps spoken
/// names that themselves contain "and" intact ("Sam and Ella 40" is one
/// student), while "B 45 and C 38" splits after the 45. Token-level
/// comparison means "Anderson" never splits.
pub fn split_segments(text: &str) -> Vec<String> {
    let mut segments = Vec::new();

    for piece in text.split(',') {
        let mut current: Vec<&str> = Vec::new();
        for token in piece.split_whitespace() {
            let score_seen = current
                .iter()
                .any(|t| t.chars().any(|c| c.is_ascii_digit()));
            if token.eq_ignore_ascii_case("and") && score_seen {
                segments.push(current.join(" "));
                current.clear();
            } else {
                current.push(token);
            }
        }
        if !current.is_empty() {
            segments.push(current.join(" "));
        }
    }

    debug!(target: "parse", count = segments.len(), "split utterance into segments");
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_and_and_delimiters() {
        let segments = split_segments("A 50, B 45 and C 38");
        assert_eq!(segments, vec!["A 50", "B 45", "C 38"]);
    }

    #[test]
    fn single_student_stays_whole() {
        assert_eq!(split_segments("Mary Anderson 72"), vec!["Mary Anderson 72"]);
    }

    #[test]
    fn and_without_a_preceding_score_does_not_split() {
        assert_eq!(split_segments("Sam and Ella 40"), vec!["Sam and Ella 40"]);
    }

    #[test]
    fn empty_utterance_yields_no_segments() {
        assert!(split_segments("").is_empty());
        assert!(split_segments("  ,  ").is_empty());
    }

    #[test]
    fn trailing_and_leaves_no_empty_segment() {
        assert_eq!(split_segments("A 50 and"), vec!["A 50"]);
    }

    #[test]
    fn termination_is_substring_and_case_insensitive() {
        let config = SplitterConfig::default();
        assert!(config.is_termination("done"));
        assert!(config.is_termination("okay we are DONE"));
        assert!(config.is_termination("finish the session"));
        assert!(!config.is_termination("Don 95"));
    }

    #[test]
    fn custom_termination_words() {
        let config = SplitterConfig {
            termination_words: vec!["stop".to_string()],
        };
        assert!(config.is_termination("please stop"));
        assert!(!config.is_termination("done"));
    }
}
