//! Ranking roster students against recognized name fragments.

use crate::similarity::similarity;
use crate::types::{MatcherConfig, StudentData, StudentMatch};
use tracing::debug;

/// Ranks candidate students by fuzzy similarity against a roster.
#[derive(Debug, Clone, Default)]
pub struct StudentMatcher {
    config: MatcherConfig,
}

impl StudentMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Rank roster students against a spoken name fragment.
    ///
    /// A candidate's similarity is the best of first, last, and full name.
    /// Only candidates strictly above the threshold are kept, sorted
    /// descending; the stable sort keeps roster order on ties. At most
    /// `max_matches` results are returned.
    pub fn find_matches(&self, name: &str, roster: &[StudentData]) -> Vec<StudentMatch> {
        let mut matches: Vec<StudentMatch> = roster
            .iter()
            .filter_map(|student| {
                let score = similarity(name, &student.first_name)
                    .max(similarity(name, &student.last_name))
                    .max(similarity(name, &student.full_name));
                if score > self.config.match_threshold {
                    Some(StudentMatch {
                        full_name: student.full_name.clone(),
                        first_name: student.first_name.clone(),
                        last_name: student.last_name.clone(),
                        similarity: score,
                        row_data: student.row_data.clone(),
                    })
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        matches.truncate(self.config.max_matches);

        debug!(
            target: "match",
            query = name,
            candidates = matches.len(),
            "ranked roster matches"
        );
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<StudentData> {
        vec![
            StudentData::new("Juan", "Capuras", vec!["Juan".into(), "Capuras".into()]),
            StudentData::new("John", "Smith", vec!["John".into(), "Smith".into()]),
            StudentData::new("Maria", "Santos", vec!["Maria".into(), "Santos".into()]),
        ]
    }

    #[test]
    fn exact_surname_ranks_first_with_full_similarity() {
        let matcher = StudentMatcher::default();
        let matches = matcher.find_matches("Capuras", &roster());
        assert!(!matches.is_empty());
        assert_eq!(matches[0].full_name, "Juan Capuras");
        assert_eq!(matches[0].similarity, 1.0);
    }

    #[test]
    fn unrelated_query_returns_nothing() {
        let matcher = StudentMatcher::default();
        let matches = matcher.find_matches("Xylophone", &roster());
        assert!(matches.is_empty());
    }

    #[test]
    fn results_are_sorted_descending() {
        let matcher = StudentMatcher::default();
        let matches = matcher.find_matches("Juan Capuras", &roster());
        for pair in matches.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    #[test]
    fn never_more_than_max_matches() {
        let many: Vec<StudentData> = (0..10)
            .map(|i| StudentData::new("Ana", &format!("Reyes{i}"), vec![]))
            .collect();
        let matcher = StudentMatcher::default();
        let matches = matcher.find_matches("Ana", &many);
        assert_eq!(matches.len(), 5);
    }

    #[test]
    fn ties_keep_roster_order() {
        let twins = vec![
            StudentData::new("Alex", "Cruz", vec!["row1".into()]),
            StudentData::new("Alex", "Diaz", vec!["row2".into()]),
        ];
        let matcher = StudentMatcher::default();
        let matches = matcher.find_matches("Alex", &twins);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].last_name, "Cruz");
        assert_eq!(matches[1].last_name, "Diaz");
    }

    #[test]
    fn threshold_is_strict() {
        let matcher = StudentMatcher::new(MatcherConfig {
            match_threshold: 1.0,
            max_matches: 5,
        });
        // Exact match scores 1.0, which is not strictly above 1.0.
        assert!(matcher.find_matches("Capuras", &roster()).is_empty());
    }
}
