// TF-IDF cosine similarity over the two-document corpus {resume, JD}.
//
// Each document becomes a term-frequency vector over the shared vocabulary,
// scaled by smoothed inverse document frequency. English stop words are
// removed before vectorization. With only two documents the
// IDF signal is coarse — terms appearing in both are downweighted relative
// to terms distinctive to one side — but that is exactly the global
// "same language" signal the aggregate formula wants alongside the
// catalog-driven category scores.

use std::collections::{BTreeMap, HashSet};

use anyhow::Result;
use stop_words::{get, LANGUAGE};
use tracing::warn;

/// Cosine similarity of the TF-IDF vectors of two normalized documents.
///
/// Never fails: a degenerate corpus (all stop words, no tokens of usable
/// length) degrades to 0.0 rather than aborting the scoring pipeline.
pub fn cosine_tfidf(resume_norm: &str, jd_norm: &str) -> f64 {
    match try_cosine(resume_norm, jd_norm) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "TF-IDF vectorization failed; cosine degrades to 0.0");
            0.0
        }
    }
}

fn try_cosine(resume_norm: &str, jd_norm: &str) -> Result<f64> {
    let stop_words: HashSet<String> = get(LANGUAGE::English).into_iter().collect();

    let resume_tokens = tokenize(resume_norm, &stop_words);
    let jd_tokens = tokenize(jd_norm, &stop_words);

    // Shared vocabulary, sorted for deterministic vector layout.
    let mut vocabulary: BTreeMap<&str, usize> = BTreeMap::new();
    for token in resume_tokens.iter().chain(jd_tokens.iter()) {
        let next_index = vocabulary.len();
        vocabulary.entry(token).or_insert(next_index);
    }

    if vocabulary.is_empty() {
        anyhow::bail!("no vocabulary after stop-word removal");
    }

    let resume_vec = tfidf_vector(&resume_tokens, &jd_tokens, &vocabulary);
    let jd_vec = tfidf_vector(&jd_tokens, &resume_tokens, &vocabulary);

    Ok(cosine(&resume_vec, &jd_vec))
}

/// Tokens of length >= 2 with stop words removed. Splits on any
/// non-alphanumeric character, so punctuation never leaks into terms.
fn tokenize<'a>(text: &'a str, stop_words: &HashSet<String>) -> Vec<&'a str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.len() >= 2)
        .filter(|token| !stop_words.contains(*token))
        .collect()
}

/// TF-IDF vector for `tokens`, with document frequency taken over both
/// documents. Smoothed IDF (ln((1+n)/(1+df)) + 1, n = 2) keeps terms that
/// appear in both documents contributing instead of zeroing out. The
/// cosine below is scale-invariant, so no separate normalization pass.
fn tfidf_vector(
    tokens: &[&str],
    other_tokens: &[&str],
    vocabulary: &BTreeMap<&str, usize>,
) -> Vec<f64> {
    let mut vector = vec![0.0; vocabulary.len()];
    for token in tokens {
        if let Some(&index) = vocabulary.get(token) {
            vector[index] += 1.0;
        }
    }

    let own: HashSet<&str> = tokens.iter().copied().collect();
    let other: HashSet<&str> = other_tokens.iter().copied().collect();
    for (term, &index) in vocabulary {
        let df = own.contains(term) as u32 + other.contains(term) as u32;
        let idf = ((1.0 + 2.0) / (1.0 + df as f64)).ln() + 1.0;
        vector[index] *= idf;
    }

    vector
}

/// Cosine of two equal-length vectors, 0.0 when either has zero norm.
fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}
