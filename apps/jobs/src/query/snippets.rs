use std::collections::HashMap;

use crate::models::Job;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lowercased word frequencies across every snippet.
///
/// Words are maximal runs of ASCII letters, digits and `_`; everything else
/// separates them.
pub fn snippet_word_counts(jobs: &[Job]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for word in jobs
        .iter()
        .flat_map(|job| job.snippet.split(|c: char| !is_word_char(c)))
        .filter(|word| !word.is_empty())
    {
        *counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_snippet(snippet: &str) -> Job {
        Job::new("Developer", "Acme", "Portland", "OR", snippet, "")
    }

    #[test]
    fn test_counts_fold_case_and_strip_punctuation() {
        let jobs = vec![
            with_snippet("Great Junior Developer role!"),
            with_snippet("junior dev wanted, JUNIOR!"),
        ];
        let counts = snippet_word_counts(&jobs);
        assert_eq!(counts.len(), 6);
        assert_eq!(counts["junior"], 3);
        assert_eq!(counts["great"], 1);
        assert_eq!(counts["developer"], 1);
        assert_eq!(counts["role"], 1);
        assert_eq!(counts["dev"], 1);
        assert_eq!(counts["wanted"], 1);
    }

    #[test]
    fn test_markup_and_digits() {
        let jobs = vec![with_snippet("<b>C_plus</b> 5+ years... of_C")];
        let counts = snippet_word_counts(&jobs);
        assert_eq!(counts["b"], 2);
        assert_eq!(counts["c_plus"], 1);
        assert_eq!(counts["5"], 1);
        assert_eq!(counts["years"], 1);
        assert_eq!(counts["of_c"], 1);
        assert!(counts.values().all(|&n| n >= 1));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(snippet_word_counts(&[]).is_empty());
        assert!(snippet_word_counts(&[with_snippet("  ...!? ")]).is_empty());
    }
}
