// Final score aggregation.
//
// Combines the weighted category composite with the two global similarity
// signals, adds the bonus-skill reward, then runs the safety nets: a chain
// of floors, caps, and fallbacks that keeps plausible candidates out of
// misleading near-zero territory. The nets are policy, not measurement —
// `apply_safety_nets` is one function so strict mode can skip it whole.

use crate::catalog::category::SkillCategory;
use crate::scoring::category::CategoryOutcome;
use crate::scoring::policy::ScoringPolicy;
use crate::similarity::Similarity;

/// Resume section headings recognized by the structural fallback.
const SECTION_HEADINGS: &[&str] = &[
    "experience", "education", "skills", "projects", "summary", "objective", "work", "technical",
];

/// Combine category outcomes and similarity signals into the final score.
///
/// Both texts are expected normalized and non-empty; the caller handles the
/// degenerate-input baseline before ever reaching this point.
pub fn aggregate_score(
    outcomes: &[CategoryOutcome],
    similarity: &Similarity,
    resume_norm: &str,
    jd_norm: &str,
    policy: &ScoringPolicy,
) -> f64 {
    let bonus = outcomes
        .iter()
        .find(|o| o.category == SkillCategory::Bonus);
    let bonus_relevant = bonus.map(|o| o.is_relevant()).unwrap_or(false);

    // Weighted category composite. When the JD mentions no bonus skill the
    // bonus weight is redistributed so absence can't penalize.
    let weights = if bonus_relevant {
        policy.category_weights
    } else {
        policy.category_weights.without_bonus()
    };
    let composite: f64 = outcomes
        .iter()
        .map(|o| weights.weight_for(o.category) * o.score as f64)
        .sum::<f64>()
        .min(100.0);

    let mut score = policy.composite_weight * composite
        + policy.overlap_weight * similarity.overlap
        + policy.cosine_weight * similarity.cosine * 100.0;

    // Bonus reward: only when the JD asks for bonus skills and the resume
    // has at least one. Absence never subtracts.
    if let Some(bonus) = bonus {
        if bonus.is_relevant() && !bonus.matched.is_empty() {
            let ratio = bonus.matched.len() as f64 / bonus.jd_found.len() as f64;
            score += (policy.bonus_addition_scale * ratio).min(policy.bonus_addition_cap);
        }
    }

    score = score.clamp(0.0, 100.0);

    let both_present = !resume_norm.is_empty() && !jd_norm.is_empty();
    if policy.safety_nets && both_present {
        score = apply_safety_nets(score, outcomes, similarity, resume_norm, policy);
    }

    // One decimal, and the absolute floor when there was real input
    score = ((score * 10.0).round() / 10.0).min(100.0);
    if policy.safety_nets && both_present && score < policy.baseline_score {
        score = policy.baseline_score;
    }
    score
}

/// The score-shaping policy layer, separate from the matching math so it
/// can be disabled wholesale in strict mode.
fn apply_safety_nets(
    raw: f64,
    outcomes: &[CategoryOutcome],
    similarity: &Similarity,
    resume_norm: &str,
    policy: &ScoringPolicy,
) -> f64 {
    let mut score = raw;

    let has_overlap = similarity.overlap > 0.0
        || similarity.cosine > 0.01
        || outcomes.iter().any(|o| !o.matched.is_empty());

    if has_overlap {
        // Strong candidates in core areas must not land below the floor,
        // whatever the global signals said.
        let core = outcomes.iter().find(|o| o.category == SkillCategory::Core);
        let data = outcomes
            .iter()
            .find(|o| o.category == SkillCategory::DataAnalytics);
        if let (Some(core), Some(data)) = (core, data) {
            if core.is_relevant() && data.is_relevant() {
                let core_ratio = core.match_ratio(policy.semantic_credit);
                let data_ratio = data.match_ratio(policy.semantic_credit);
                if core_ratio >= policy.core_floor_ratio && data_ratio >= policy.data_floor_ratio {
                    score = score.max(policy.strong_candidate_floor);
                }
            }
        }

        if score < policy.low_overlap_floor {
            score = policy.low_overlap_floor;
        } else if score > policy.strong_match_threshold {
            score = (score + policy.strong_match_bonus).min(100.0);
        }
    } else {
        // No signal anywhere: fall back to resume structure. A document
        // with recognizable sections is a resume, not noise.
        let sections = SECTION_HEADINGS
            .iter()
            .filter(|heading| resume_norm.contains(*heading))
            .count();
        score = if sections > 0 {
            policy.section_base + (policy.section_step * sections as f64).min(policy.section_cap)
        } else {
            policy.structureless_baseline
        };
    }

    // Length adjustment: a very short resume can't honestly score high,
    // but it had content, so it keeps the baseline.
    let resume_chars = resume_norm.chars().count();
    if resume_chars < policy.short_resume_chars {
        score = score.min(policy.short_resume_cap).max(policy.baseline_score);
    } else if resume_chars < policy.modest_resume_chars && score < policy.modest_resume_floor {
        score = policy.modest_resume_floor;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(
        category: SkillCategory,
        score: i32,
        jd: usize,
        matched: usize,
    ) -> CategoryOutcome {
        CategoryOutcome {
            category,
            score,
            jd_found: (0..jd).map(|i| format!("jd{i}")).collect(),
            matched: (0..matched).map(|i| format!("jd{i}")).collect(),
            missing: (matched..jd).map(|i| format!("jd{i}")).collect(),
            semantic_matches: 0,
        }
    }

    fn long_resume() -> String {
        "experienced python engineer shipping machine learning systems ".repeat(12)
    }

    #[test]
    fn composite_uses_redistributed_weights_without_bonus() {
        let policy = ScoringPolicy::strict();
        let outcomes = vec![
            outcome(SkillCategory::Core, 100, 2, 2),
            outcome(SkillCategory::ToolsFrameworks, 100, 2, 2),
            outcome(SkillCategory::DataAnalytics, 100, 2, 2),
            outcome(SkillCategory::Bonus, 50, 0, 0),
        ];
        let sim = Similarity {
            cosine: 0.0,
            overlap: 0.0,
        };
        // Composite = 100 regardless of the 50 bonus, because the bonus
        // weight is redistributed: 0.6 * 100 = 60.0
        let score = aggregate_score(&outcomes, &sim, &long_resume(), "jd text", &policy);
        assert!((score - 60.0).abs() < 0.1, "got {score}");
    }

    #[test]
    fn bonus_addition_is_capped() {
        let policy = ScoringPolicy::strict();
        let with_bonus = vec![
            outcome(SkillCategory::Core, 0, 1, 0),
            outcome(SkillCategory::ToolsFrameworks, 0, 1, 0),
            outcome(SkillCategory::DataAnalytics, 0, 1, 0),
            outcome(SkillCategory::Bonus, 100, 2, 2),
        ];
        let sim = Similarity {
            cosine: 0.0,
            overlap: 0.0,
        };
        // Composite = 0.10 * 100 = 10 -> 0.6 * 10 = 6.0; bonus addition
        // min(8, 15 * 2/2) = 8 -> 14.0
        let score = aggregate_score(&with_bonus, &sim, &long_resume(), "jd text", &policy);
        assert!((score - 14.0).abs() < 0.1, "got {score}");
    }

    #[test]
    fn no_bonus_match_means_no_addition() {
        let policy = ScoringPolicy::strict();
        let outcomes = vec![
            outcome(SkillCategory::Core, 0, 1, 0),
            outcome(SkillCategory::ToolsFrameworks, 0, 1, 0),
            outcome(SkillCategory::DataAnalytics, 0, 1, 0),
            outcome(SkillCategory::Bonus, 0, 2, 0),
        ];
        let sim = Similarity {
            cosine: 0.0,
            overlap: 0.0,
        };
        let score = aggregate_score(&outcomes, &sim, &long_resume(), "jd text", &policy);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn strong_candidate_floor_applies() {
        let policy = ScoringPolicy::default();
        // Core 4/4, Data 3/4 = 0.75 >= 0.7 -> floored at 70 even though the
        // raw mix lands in the 40s
        let outcomes = vec![
            outcome(SkillCategory::Core, 100, 4, 4),
            outcome(SkillCategory::ToolsFrameworks, 0, 3, 0),
            outcome(SkillCategory::DataAnalytics, 75, 4, 3),
            outcome(SkillCategory::Bonus, 50, 0, 0),
        ];
        let sim = Similarity {
            cosine: 0.05,
            overlap: 10.0,
        };
        let score = aggregate_score(&outcomes, &sim, &long_resume(), "jd text", &policy);
        assert!(score >= 70.0, "strong candidate floored below 70: {score}");
    }

    #[test]
    fn weak_overlap_floors_at_30() {
        let policy = ScoringPolicy::default();
        let outcomes = vec![
            outcome(SkillCategory::Core, 25, 4, 1),
            outcome(SkillCategory::ToolsFrameworks, 0, 2, 0),
            outcome(SkillCategory::DataAnalytics, 0, 2, 0),
            outcome(SkillCategory::Bonus, 50, 0, 0),
        ];
        let sim = Similarity {
            cosine: 0.02,
            overlap: 3.0,
        };
        let score = aggregate_score(&outcomes, &sim, &long_resume(), "jd text", &policy);
        assert!(score >= 30.0, "got {score}");
    }

    #[test]
    fn strong_match_gets_flat_bonus() {
        let policy = ScoringPolicy::default();
        let outcomes = vec![
            outcome(SkillCategory::Core, 100, 4, 4),
            outcome(SkillCategory::ToolsFrameworks, 100, 2, 2),
            outcome(SkillCategory::DataAnalytics, 100, 2, 2),
            outcome(SkillCategory::Bonus, 50, 0, 0),
        ];
        let sim = Similarity {
            cosine: 0.8,
            overlap: 80.0,
        };
        // Raw: 0.6*100 + 0.25*80 + 0.15*80 = 92; > 65 -> +5 -> 97
        let score = aggregate_score(&outcomes, &sim, &long_resume(), "jd text", &policy);
        assert!((score - 97.0).abs() < 0.1, "got {score}");
    }

    #[test]
    fn no_signal_falls_back_to_structure() {
        let policy = ScoringPolicy::default();
        let outcomes = vec![
            outcome(SkillCategory::Core, 0, 1, 0),
            outcome(SkillCategory::ToolsFrameworks, 0, 0, 0),
            outcome(SkillCategory::DataAnalytics, 0, 0, 0),
            outcome(SkillCategory::Bonus, 0, 0, 0),
        ];
        let sim = Similarity {
            cosine: 0.0,
            overlap: 0.0,
        };
        // Resume long enough to dodge the short-resume cap, with three
        // recognizable section headings: 25 + min(15, 3*3) = 34
        let filler = "lorem ipsum dolor sit amet consectetur adipiscing elit ".repeat(5);
        let resume = format!("experience education skills {filler}");
        let score = aggregate_score(&outcomes, &sim, &resume, "jd text", &policy);
        assert!((score - 34.0).abs() < 0.1, "got {score}");
    }

    #[test]
    fn structureless_no_signal_resume_gets_flat_baseline() {
        let policy = ScoringPolicy::default();
        let outcomes = vec![
            outcome(SkillCategory::Core, 0, 1, 0),
            outcome(SkillCategory::ToolsFrameworks, 0, 0, 0),
            outcome(SkillCategory::DataAnalytics, 0, 0, 0),
            outcome(SkillCategory::Bonus, 0, 0, 0),
        ];
        let sim = Similarity {
            cosine: 0.0,
            overlap: 0.0,
        };
        // Long enough that neither length adjustment fires
        let resume = "lorem ipsum dolor sit amet consectetur adipiscing elit ".repeat(12);
        let score = aggregate_score(&outcomes, &sim, &resume, "jd text", &policy);
        assert!((score - 20.0).abs() < 0.1, "got {score}");
    }

    #[test]
    fn short_resume_capped_at_50() {
        let policy = ScoringPolicy::default();
        let outcomes = vec![
            outcome(SkillCategory::Core, 100, 4, 4),
            outcome(SkillCategory::ToolsFrameworks, 100, 2, 2),
            outcome(SkillCategory::DataAnalytics, 100, 2, 2),
            outcome(SkillCategory::Bonus, 50, 0, 0),
        ];
        let sim = Similarity {
            cosine: 0.9,
            overlap: 90.0,
        };
        let resume = "python pandas numpy docker kubernetes"; // well under 200 chars
        let score = aggregate_score(&outcomes, &sim, resume, "jd text", &policy);
        assert!(score <= 50.0, "short resume above the cap: {score}");
        assert!(score >= 15.0, "short resume below the floor: {score}");
    }

    #[test]
    fn result_is_rounded_to_one_decimal() {
        let policy = ScoringPolicy::strict();
        let outcomes = vec![
            outcome(SkillCategory::Core, 33, 3, 1),
            outcome(SkillCategory::ToolsFrameworks, 0, 1, 0),
            outcome(SkillCategory::DataAnalytics, 0, 1, 0),
            outcome(SkillCategory::Bonus, 0, 1, 0),
        ];
        let sim = Similarity {
            cosine: 0.123456,
            overlap: 7.891,
        };
        let score = aggregate_score(&outcomes, &sim, &long_resume(), "jd text", &policy);
        assert_eq!(score, (score * 10.0).round() / 10.0);
    }

    #[test]
    fn strict_mode_returns_raw_mix() {
        let policy = ScoringPolicy::strict();
        let outcomes = vec![
            outcome(SkillCategory::Core, 100, 4, 4),
            outcome(SkillCategory::ToolsFrameworks, 0, 2, 0),
            outcome(SkillCategory::DataAnalytics, 100, 4, 4),
            outcome(SkillCategory::Bonus, 50, 0, 0),
        ];
        let sim = Similarity {
            cosine: 0.0,
            overlap: 0.0,
        };
        // Redistributed composite: 100*0.5 + 0*(0.25/0.9) + 100*(0.2/0.9)
        // = 72.22; 0.6 * 72.22 = 43.33 — no floor to 70, no +5, no 15 floor
        let score = aggregate_score(&outcomes, &sim, &long_resume(), "jd text", &policy);
        assert!((score - 43.3).abs() < 0.1, "got {score}");
    }
}
