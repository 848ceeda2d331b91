//! String similarity scoring for spoken names.

/// Similarity between two strings in [0.0, 1.0].
///
/// Case-insensitive. Exact matches score 1.0, a substring relation scores
/// 0.8, everything else falls back to Levenshtein distance normalized by
/// the longer length. Pure and deterministic.
pub fn similarity(a: &str, b: &str) -> f32 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        return 1.0;
    }
    // The empty string is a substring of everything; don't let it score 0.8.
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a.contains(&b) || b.contains(&a) {
        return 0.8;
    }

    let max_len = a.chars().count().max(b.chars().count());
    1.0 - levenshtein(&a, &b) as f32 / max_len as f32
}

/// Levenshtein edit distance with unit insert/delete/substitute costs.
///
/// Standard O(n*m) dynamic programming over two rows.
fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_scores_one() {
        assert_eq!(similarity("Capuras", "Capuras"), 1.0);
    }

    #[test]
    fn comparison_is_case_insensitive() {
        assert_eq!(similarity("CAPURAS", "capuras"), 1.0);
    }

    #[test]
    fn substring_scores_point_eight() {
        assert_eq!(similarity("Ann", "Annabelle"), 0.8);
        assert_eq!(similarity("Annabelle", "Ann"), 0.8);
    }

    #[test]
    fn distinct_strings_use_normalized_edit_distance() {
        // levenshtein("kitten", "sitting") = 3, longer length 7
        let s = similarity("kitten", "sitting");
        assert!((s - (1.0 - 3.0 / 7.0)).abs() < 1e-6);
    }

    #[test]
    fn empty_versus_nonempty_scores_zero() {
        assert_eq!(similarity("", "Capuras"), 0.0);
        assert_eq!(similarity("Capuras", ""), 0.0);
    }

    #[test]
    fn both_empty_is_exact() {
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn levenshtein_known_distances() {
        assert_eq!(levenshtein("hello", "hello"), 0);
        assert_eq!(levenshtein("hello", "hallo"), 1);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
    }
}
