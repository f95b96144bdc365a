// Text normalization for keyword matching.
//
// Resumes and job descriptions arrive as raw extracted text with wildly
// inconsistent casing, spacing, and skill spellings ("Node.JS", "node js",
// "py torch"). Everything downstream matches on the normalized form, so
// this is the first stage of the pipeline for both documents.

use once_cell::sync::Lazy;
use regex_lite::Regex;

/// Canonicalization rules for known skill-name variants.
///
/// Each rule is idempotent (the canonical form also matches its own pattern
/// and maps to itself) and independent of the others, so application order
/// doesn't matter.
static VARIANT_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"\bnum\s*py\b").unwrap(), "numpy"),
        (Regex::new(r"\bpy\s*torch\b").unwrap(), "pytorch"),
        (Regex::new(r"\bnode\s*\.?\s*js\b").unwrap(), "nodejs"),
        (Regex::new(r"\bc\s*\+\s*\+").unwrap(), "c++"),
        (Regex::new(r"\bc\s*#").unwrap(), "c#"),
    ]
});

/// Normalize raw document text for matching.
///
/// - Lowercases
/// - Canonicalizes known skill-name spelling/spacing variants
/// - Strips control characters (0x00-0x1F, 0x7F) to a space
/// - Collapses consecutive whitespace to one space and trims
///
/// Never fails: empty input yields an empty string.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut text = raw.to_lowercase();

    for (pattern, canonical) in VARIANT_RULES.iter() {
        text = pattern.replace_all(&text, *canonical).into_owned();
    }

    let text: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
