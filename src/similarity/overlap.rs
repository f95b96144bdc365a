// Keyword overlap between resume and JD token sets.
//
// A deliberately blunt signal: how many of the JD's content words does the
// resume also use? Tokens are whitespace-split from the normalized text, so
// trailing punctuation stays attached — both documents pass through the
// same normalizer, which keeps the comparison fair.

use std::collections::HashSet;

/// Function words excluded from the overlap computation. Short and fixed;
/// the TF-IDF side uses the full English stop-word list instead.
const OVERLAP_STOP_WORDS: &[&str] = &[
    "and", "the", "is", "in", "at", "of", "for", "to", "a", "an", "with", "by", "on", "or", "but",
];

/// Fraction of JD content tokens also present in the resume, scaled 0-100.
///
/// Tokens of length <= 2 and stop-list words are dropped from both sides.
/// An empty JD token set yields 0.
pub fn keyword_overlap(resume_norm: &str, jd_norm: &str) -> f64 {
    let jd_tokens = content_tokens(jd_norm);
    if jd_tokens.is_empty() {
        return 0.0;
    }

    let resume_tokens = content_tokens(resume_norm);
    let shared = resume_tokens.intersection(&jd_tokens).count();

    shared as f64 / jd_tokens.len() as f64 * 100.0
}

fn content_tokens(text: &str) -> HashSet<&str> {
    text.split_whitespace()
        .filter(|token| token.len() > 2)
        .filter(|token| !OVERLAP_STOP_WORDS.contains(token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_overlap_scores_100() {
        let score = keyword_overlap("python docker kubernetes", "python docker kubernetes");
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn half_overlap_scores_50() {
        let score = keyword_overlap("python docker", "python docker terraform ansible");
        assert!((score - 50.0).abs() < 1e-9);
    }

    #[test]
    fn no_overlap_scores_zero() {
        assert_eq!(keyword_overlap("python pandas", "carpentry joinery"), 0.0);
    }

    #[test]
    fn empty_jd_scores_zero() {
        assert_eq!(keyword_overlap("python pandas", ""), 0.0);
        // JD with only stop words and short tokens has an empty token set
        assert_eq!(keyword_overlap("python pandas", "and the of a ml"), 0.0);
    }

    #[test]
    fn stop_words_and_short_tokens_excluded() {
        // "for", "the" are stop words; "ml" is too short — only "python" counts
        let score = keyword_overlap("python for the ml", "python for the ml");
        assert!((score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn extra_resume_tokens_do_not_dilute() {
        // Overlap is measured against the JD set only
        let score = keyword_overlap(
            "python docker kubernetes terraform ansible grafana",
            "python docker",
        );
        assert!((score - 100.0).abs() < 1e-9);
    }
}
