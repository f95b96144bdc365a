// Scoring — category matching, aggregation, and the public entry points.
//
// The entry points here are the crate's contract: they normalize both
// inputs, run the pipeline, and absorb every failure mode into a usable
// result. A scoring problem must never block the caller's flow, so nothing
// below returns an error — degenerate input and internal faults both land
// on the baseline result. That deliberately conflates "no signal" with
// "error" in the output; callers who need the distinction watch the logs.

pub mod aggregate;
pub mod band;
pub mod category;
pub mod policy;

use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::skills::SkillCatalog;
use crate::normalize::normalize;
use crate::scoring::band::MatchBand;
use crate::scoring::category::{score_categories, CategoryOutcome};
use crate::scoring::policy::ScoringPolicy;
use crate::similarity::similarity;

/// The complete result of one analysis. Created fresh per request, never
/// mutated after return.
///
/// `matched_skills` and `missing_skills` are not guaranteed disjoint: a
/// skill can be missing in one category pairing and matched via another
/// (e.g. "pandas" appears in both Core and Data & Analytics). Known
/// overlap, by contract.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    /// Final compatibility percentage, 0.0-100.0, one decimal.
    pub ats_score: f64,
    pub band: MatchBand,
    /// Category display name -> sub-score (0-100).
    pub category_scores: BTreeMap<String, i32>,
    /// Exactly-matched JD-requested skills, in discovery order.
    pub matched_skills: Vec<String>,
    /// JD-requested skills the resume lacks exactly, in discovery order.
    pub missing_skills: Vec<String>,
}

impl ScoreResult {
    /// The result every absorbed failure mode lands on: baseline score,
    /// empty category and skill sets.
    pub fn baseline(policy: &ScoringPolicy) -> Self {
        Self {
            ats_score: policy.baseline_score,
            band: MatchBand::from_score(policy.baseline_score),
            category_scores: BTreeMap::new(),
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
        }
    }
}

/// Run the full analysis: normalize, match, score, aggregate.
///
/// Never fails outward. Degenerate input (either text empty after
/// normalization) and any unexpected internal fault return the baseline
/// result instead.
pub fn analyze(
    resume_text: &str,
    jd_text: &str,
    catalog: &SkillCatalog,
    policy: &ScoringPolicy,
) -> ScoreResult {
    match try_analyze(resume_text, jd_text, catalog, policy) {
        Ok(result) => result,
        Err(err) => {
            warn!(error = %err, "scoring failed; returning the baseline result");
            ScoreResult::baseline(policy)
        }
    }
}

/// Final ATS score only. The JD may arrive pre-lowercased by the caller;
/// normalization is idempotent, so both inputs are normalized here anyway.
pub fn compute_ats_score(
    resume_text: &str,
    jd_text: &str,
    catalog: &SkillCatalog,
    policy: &ScoringPolicy,
) -> f64 {
    analyze(resume_text, jd_text, catalog, policy).ats_score
}

/// Category sub-scores plus matched/missing skill lists.
pub fn compute_category_scores(
    resume_text: &str,
    jd_text: &str,
    catalog: &SkillCatalog,
    policy: &ScoringPolicy,
) -> (BTreeMap<String, i32>, Vec<String>, Vec<String>) {
    let result = analyze(resume_text, jd_text, catalog, policy);
    (
        result.category_scores,
        result.matched_skills,
        result.missing_skills,
    )
}

fn try_analyze(
    resume_text: &str,
    jd_text: &str,
    catalog: &SkillCatalog,
    policy: &ScoringPolicy,
) -> Result<ScoreResult> {
    let resume_norm = normalize(resume_text);
    let jd_norm = normalize(jd_text);

    if resume_norm.is_empty() || jd_norm.is_empty() {
        warn!(
            resume_chars = resume_norm.chars().count(),
            jd_chars = jd_norm.chars().count(),
            "empty resume or job description after normalization; returning baseline"
        );
        return Ok(ScoreResult::baseline(policy));
    }

    let sim = similarity(&resume_norm, &jd_norm);
    let outcomes = score_categories(&resume_norm, &jd_norm, catalog, policy);
    let ats_score = aggregate::aggregate_score(&outcomes, &sim, &resume_norm, &jd_norm, policy);

    let category_scores: BTreeMap<String, i32> = outcomes
        .iter()
        .map(|o| (o.category.as_str().to_string(), o.score))
        .collect();
    let matched_skills = collect_unique(&outcomes, |o| &o.matched);
    let missing_skills = collect_unique(&outcomes, |o| &o.missing);

    info!(
        score = ats_score,
        cosine = format!("{:.3}", sim.cosine),
        overlap = format!("{:.1}", sim.overlap),
        matched = matched_skills.len(),
        missing = missing_skills.len(),
        resume_chars = resume_norm.chars().count(),
        jd_chars = jd_norm.chars().count(),
        "scored resume against job description"
    );

    Ok(ScoreResult {
        ats_score,
        band: MatchBand::from_score(ats_score),
        category_scores,
        matched_skills,
        missing_skills,
    })
}

/// Flatten a per-category skill list into one deduplicated list that keeps
/// discovery order.
fn collect_unique<'a, F>(outcomes: &'a [CategoryOutcome], select: F) -> Vec<String>
where
    F: Fn(&'a CategoryOutcome) -> &'a Vec<String>,
{
    let mut seen = Vec::new();
    for outcome in outcomes {
        for skill in select(outcome) {
            if !seen.contains(skill) {
                seen.push(skill.clone());
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_resume_returns_exact_baseline() {
        let catalog = SkillCatalog::builtin();
        let policy = ScoringPolicy::default();
        let result = analyze("", "some job description", &catalog, &policy);
        assert_eq!(result.ats_score, 15.0);
        assert!(result.category_scores.is_empty());
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn empty_jd_returns_exact_baseline() {
        let catalog = SkillCatalog::builtin();
        let policy = ScoringPolicy::default();
        assert_eq!(compute_ats_score("a real resume", "", &catalog, &policy), 15.0);
    }

    #[test]
    fn category_scores_report_all_four_categories() {
        let catalog = SkillCatalog::builtin();
        let policy = ScoringPolicy::default();
        let (scores, _, _) = compute_category_scores(
            "python engineer with pandas experience",
            "python role using pandas",
            &catalog,
            &policy,
        );
        assert_eq!(scores.len(), 4);
        for name in ["Core Skills", "Tools & Frameworks", "Data & Analytics", "Bonus Skills"] {
            assert!(scores.contains_key(name), "missing {name}");
        }
    }

    #[test]
    fn duplicate_skills_across_categories_collapse() {
        // pandas sits in both Core and Data & Analytics; it must appear
        // once in the matched list
        let catalog = SkillCatalog::builtin();
        let policy = ScoringPolicy::default();
        let result = analyze(
            "pandas specialist",
            "pandas work required",
            &catalog,
            &policy,
        );
        let pandas_count = result
            .matched_skills
            .iter()
            .filter(|s| s.as_str() == "pandas")
            .count();
        assert_eq!(pandas_count, 1);
    }

    #[test]
    fn band_matches_score() {
        let catalog = SkillCatalog::builtin();
        let policy = ScoringPolicy::default();
        let result = analyze(
            "python machine learning engineer with pandas numpy statistics background \
             and years of model evaluation work on production systems",
            "python machine learning role with pandas numpy statistics model evaluation",
            &catalog,
            &policy,
        );
        assert_eq!(result.band, MatchBand::from_score(result.ats_score));
    }
}
