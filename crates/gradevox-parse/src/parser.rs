//! Single-utterance parsing: extract a score and a candidate name.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::trace;

static SCORE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("score pattern compiles"));

/// Output of parsing one recognized utterance segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Cleaned name fragment, None when nothing is left after stripping.
    pub recognized_name: Option<String>,
    /// First decimal number in the text, kept verbatim as spoken.
    pub score: Option<String>,
}

/// Parse one segment of recognized speech into a name and a score.
///
/// The first decimal-number match is taken as the score and removed; the
/// remainder, stripped of punctuation and collapsed to single spaces, is
/// the candidate name. Text with no number yields a None score and the
/// whole cleaned text as the name. Never fails; empty input yields an
/// empty result.
pub fn parse(text: &str) -> ParseResult {
    let (score, remainder) = match SCORE_PATTERN.find(text) {
        Some(m) => {
            let mut rest = String::with_capacity(text.len());
            rest.push_str(&text[..m.start()]);
            rest.push_str(&text[m.end()..]);
            (Some(m.as_str().to_string()), rest)
        }
        None => (None, text.to_string()),
    };

    let recognized_name = clean_name(&remainder);
    trace!(
        target: "parse",
        name = ?recognized_name,
        score = ?score,
        "parsed utterance segment"
    );
    ParseResult {
        recognized_name,
        score,
    }
}

/// Strip punctuation and collapse whitespace; None when nothing remains.
fn clean_name(text: &str) -> Option<String> {
    let stripped: String = text
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    let cleaned = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_then_score() {
        let result = parse("John Doe 85");
        assert_eq!(result.recognized_name.as_deref(), Some("John Doe"));
        assert_eq!(result.score.as_deref(), Some("85"));
    }

    #[test]
    fn decimal_score_is_kept_verbatim() {
        let result = parse("Maria Santos 92.5");
        assert_eq!(result.recognized_name.as_deref(), Some("Maria Santos"));
        assert_eq!(result.score.as_deref(), Some("92.5"));
    }

    #[test]
    fn no_number_yields_name_only() {
        let result = parse("absent");
        assert_eq!(result.recognized_name.as_deref(), Some("absent"));
        assert_eq!(result.score, None);
    }

    #[test]
    fn number_only_yields_score_only() {
        let result = parse("85");
        assert_eq!(result.recognized_name, None);
        assert_eq!(result.score.as_deref(), Some("85"));
    }

    #[test]
    fn empty_text_yields_empty_result() {
        assert_eq!(parse(""), ParseResult::default());
        assert_eq!(parse("   "), ParseResult::default());
    }

    #[test]
    fn punctuation_is_stripped_from_the_name() {
        let result = parse("John Doe: 85.");
        assert_eq!(result.recognized_name.as_deref(), Some("John Doe"));
        assert_eq!(result.score.as_deref(), Some("85"));
    }

    #[test]
    fn only_the_first_number_is_the_score() {
        let result = parse("John 85 not 90");
        assert_eq!(result.score.as_deref(), Some("85"));
        assert_eq!(result.recognized_name.as_deref(), Some("John not 90"));
    }
}
