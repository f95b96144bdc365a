// Per-category skill matching and scoring.
//
// For each fixed category: which catalog skills does the JD request, which
// of those does the resume carry, and what ratio-based score falls out. A
// post-pass over all four categories applies the rescue/boost/clamp safety
// nets that keep plausible candidates out of degenerate score ranges.

use tracing::debug;

use crate::catalog::category::SkillCategory;
use crate::catalog::skills::SkillCatalog;
use crate::scoring::policy::ScoringPolicy;

/// Everything the scorer learned about one category.
#[derive(Debug, Clone)]
pub struct CategoryOutcome {
    pub category: SkillCategory,
    /// Category sub-score, 0-100.
    pub score: i32,
    /// Catalog skills the JD requests, in catalog order.
    pub jd_found: Vec<String>,
    /// Subset of `jd_found` the resume matches exactly.
    pub matched: Vec<String>,
    /// `jd_found` minus exact matches. Semantic matches stay listed here —
    /// they earn score credit but are still worth suggesting.
    pub missing: Vec<String>,
    /// JD-requested skills covered only by a semantic equivalent.
    pub semantic_matches: usize,
}

impl CategoryOutcome {
    /// Whether the JD requests any skill in this category.
    pub fn is_relevant(&self) -> bool {
        !self.jd_found.is_empty()
    }

    /// Matched fraction with fractional semantic credit. 0.0 when the JD
    /// requests nothing in this category.
    pub fn match_ratio(&self, semantic_credit: f64) -> f64 {
        if self.jd_found.is_empty() {
            return 0.0;
        }
        (self.matched.len() as f64 + semantic_credit * self.semantic_matches as f64)
            / self.jd_found.len() as f64
    }
}

/// Score a single category.
pub fn score_category(
    resume_norm: &str,
    jd_norm: &str,
    category: SkillCategory,
    catalog: &SkillCatalog,
    policy: &ScoringPolicy,
) -> CategoryOutcome {
    let mut jd_found = Vec::new();
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut semantic_matches = 0;

    for skill in catalog.skills_in(category) {
        if !skill.matches(jd_norm) {
            continue;
        }
        jd_found.push(skill.name.clone());

        if skill.matches(resume_norm) {
            matched.push(skill.name.clone());
        } else {
            missing.push(skill.name.clone());
            if !category.is_bonus() && catalog.semantic().matches_in(&skill.name, resume_norm) {
                semantic_matches += 1;
            }
        }
    }

    let score = if jd_found.is_empty() {
        // An unscored category must not drag the aggregate down
        policy.neutral_score
    } else {
        let base = (100.0 * matched.len() as f64 / jd_found.len() as f64).round() as i32;
        if !category.is_bonus() && base > 0 && semantic_matches > 0 {
            let boost = ((policy.semantic_boost_scale * semantic_matches as f64
                / jd_found.len() as f64)
                .round() as i32)
                .min(policy.semantic_boost_cap);
            (base + boost).min(policy.boosted_score_cap)
        } else {
            base
        }
    };

    debug!(
        category = category.as_str(),
        score,
        requested = jd_found.len(),
        matched = matched.len(),
        semantic = semantic_matches,
        "category scored"
    );

    CategoryOutcome {
        category,
        score,
        jd_found,
        matched,
        missing,
        semantic_matches,
    }
}

/// Score all four categories, then apply the post-pass safety nets.
pub fn score_categories(
    resume_norm: &str,
    jd_norm: &str,
    catalog: &SkillCatalog,
    policy: &ScoringPolicy,
) -> Vec<CategoryOutcome> {
    let mut outcomes: Vec<CategoryOutcome> = SkillCategory::ALL
        .into_iter()
        .map(|category| score_category(resume_norm, jd_norm, category, catalog, policy))
        .collect();

    if policy.safety_nets && !resume_norm.is_empty() && !jd_norm.is_empty() {
        apply_category_safety_nets(&mut outcomes, resume_norm, catalog, policy);
    }

    outcomes
}

/// Post-pass over all category scores: rescue zeroed-out relevant
/// categories with contextual evidence, uniformly boost strong candidates,
/// and clamp the bonus category so it enhances without dominating.
fn apply_category_safety_nets(
    outcomes: &mut [CategoryOutcome],
    resume_norm: &str,
    catalog: &SkillCatalog,
    policy: &ScoringPolicy,
) {
    let total: i32 = outcomes.iter().map(|o| o.score).sum();

    // Rescue: a relevant category at 0 with contextual skill evidence in the
    // resume gets a bounded partial score instead.
    if total < policy.rescue_total_threshold {
        for outcome in outcomes.iter_mut() {
            if !outcome.is_relevant() || outcome.score != 0 {
                continue;
            }
            let contextual = catalog
                .skills_in(outcome.category)
                .filter(|skill| {
                    skill.matches(resume_norm)
                        || catalog.semantic().matches_in(&skill.name, resume_norm)
                })
                .count();
            if contextual > 0 {
                let derived =
                    (100.0 * contextual as f64 / outcome.jd_found.len() as f64).round() as i32;
                outcome.score = derived.clamp(policy.rescue_floor, policy.rescue_ceiling);
                debug!(
                    category = outcome.category.as_str(),
                    score = outcome.score,
                    contextual,
                    "rescued zero-scored category from contextual evidence"
                );
            }
        }
    }

    // Uniform boost: strong candidates get a small lift across every
    // category already above the midline.
    let relevant: Vec<i32> = outcomes
        .iter()
        .filter(|o| o.is_relevant())
        .map(|o| o.score)
        .collect();
    if !relevant.is_empty() {
        let mean = relevant.iter().sum::<i32>() as f64 / relevant.len() as f64;
        if mean > policy.uniform_boost_mean_threshold {
            let boost = ((mean * policy.uniform_boost_rate).round() as i32)
                .min(policy.uniform_boost_cap);
            for outcome in outcomes.iter_mut() {
                if outcome.score > policy.uniform_boost_min_score {
                    outcome.score = (outcome.score + boost).min(100);
                }
            }
        }
    }

    // Bonus clamp: never above the cap; a zero with no JD bonus request
    // resets to neutral.
    for outcome in outcomes.iter_mut() {
        if !outcome.category.is_bonus() {
            continue;
        }
        if outcome.score > policy.bonus_score_cap {
            outcome.score = policy.bonus_score_cap;
        } else if outcome.score == 0 && !outcome.is_relevant() {
            outcome.score = policy.neutral_score;
        }
    }
}
