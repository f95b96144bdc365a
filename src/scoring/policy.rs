// Scoring policy — every tuned constant in one place.
//
// The thresholds here are empirically chosen, not derived. Grouping them in
// a single value object keeps the algorithm flow free of magic numbers and
// lets tests (and a strict mode) tune or disable them independently.

use crate::catalog::category::SkillCategory;

/// Relative weight of each category in the aggregate composite.
#[derive(Debug, Clone, Copy)]
pub struct CategoryWeights {
    pub core: f64,
    pub tools: f64,
    pub data: f64,
    pub bonus: f64,
}

impl CategoryWeights {
    pub fn weight_for(&self, category: SkillCategory) -> f64 {
        match category {
            SkillCategory::Core => self.core,
            SkillCategory::ToolsFrameworks => self.tools,
            SkillCategory::DataAnalytics => self.data,
            SkillCategory::Bonus => self.bonus,
        }
    }

    pub fn sum(&self) -> f64 {
        self.core + self.tools + self.data + self.bonus
    }

    /// Weights to use when the JD mentions no bonus-category skill: the
    /// bonus weight is dropped and the rest are renormalized so they still
    /// sum to one (w / 0.90 for the three non-bonus categories).
    pub fn without_bonus(&self) -> CategoryWeights {
        let remaining = self.sum() - self.bonus;
        CategoryWeights {
            core: self.core / remaining,
            tools: self.tools / remaining,
            data: self.data / remaining,
            bonus: 0.0,
        }
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            core: 0.45,
            tools: 0.25,
            data: 0.20,
            bonus: 0.10,
        }
    }
}

/// The full scoring policy: category weights, signal mix, semantic credit,
/// and every floor/cap safety net.
#[derive(Debug, Clone, Copy)]
pub struct ScoringPolicy {
    pub category_weights: CategoryWeights,

    /// Signal mix in the aggregate: composite / overlap / cosine.
    pub composite_weight: f64,
    pub overlap_weight: f64,
    pub cosine_weight: f64,

    /// Fractional credit a semantic match earns relative to an exact match,
    /// wherever matches are counted fractionally (the strong-candidate
    /// floor ratios).
    pub semantic_credit: f64,

    /// Per-category semantic boost: min(cap, round(scale * n / N)),
    /// applied only when the base score is above zero, result capped.
    pub semantic_boost_cap: i32,
    pub semantic_boost_scale: f64,
    pub boosted_score_cap: i32,

    /// Score for a category the JD never mentions.
    pub neutral_score: i32,

    /// Bonus-skill addition to the final score: min(cap, scale * ratio),
    /// only when the JD mentions bonus skills and the resume matches one.
    pub bonus_addition_cap: f64,
    pub bonus_addition_scale: f64,
    /// Bonus category score is never reported above this.
    pub bonus_score_cap: i32,

    /// Category rescue: when the category total is below the threshold and
    /// a JD-relevant category scored 0, contextual evidence re-derives a
    /// score clamped to [floor, ceiling].
    pub rescue_total_threshold: i32,
    pub rescue_floor: i32,
    pub rescue_ceiling: i32,

    /// Uniform boost when the mean relevant-category score is high.
    pub uniform_boost_mean_threshold: f64,
    pub uniform_boost_cap: i32,
    pub uniform_boost_rate: f64,
    pub uniform_boost_min_score: i32,

    /// Strong-candidate floor: core ratio and data ratio at or above these
    /// (both categories JD-relevant) floor the final score.
    pub core_floor_ratio: f64,
    pub data_floor_ratio: f64,
    pub strong_candidate_floor: f64,

    /// With some overlap signal: scores below the floor are raised to it,
    /// scores above the threshold get a flat bonus.
    pub low_overlap_floor: f64,
    pub strong_match_threshold: f64,
    pub strong_match_bonus: f64,

    /// No overlap signal at all: structural heuristic from resume section
    /// headings, base + min(cap, step * sections), else the flat baseline.
    pub section_base: f64,
    pub section_step: f64,
    pub section_cap: f64,
    pub structureless_baseline: f64,

    /// Length adjustment: very short resumes are capped, modest ones floored.
    pub short_resume_chars: usize,
    pub short_resume_cap: f64,
    pub modest_resume_chars: usize,
    pub modest_resume_floor: f64,

    /// The absolute baseline: degenerate input, absorbed failures, and the
    /// final floor all land here.
    pub baseline_score: f64,

    /// When false, every score-shaping safety net above is skipped and the
    /// raw computed score is returned (strict/debug mode). The degenerate-
    /// input baseline still applies — "always return a usable result" is
    /// the error contract, not score shaping.
    pub safety_nets: bool,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            category_weights: CategoryWeights::default(),

            composite_weight: 0.6,
            overlap_weight: 0.25,
            cosine_weight: 0.15,

            semantic_credit: 0.7,

            semantic_boost_cap: 15,
            semantic_boost_scale: 75.0,
            boosted_score_cap: 90,

            neutral_score: 50,

            bonus_addition_cap: 8.0,
            bonus_addition_scale: 15.0,
            bonus_score_cap: 80,

            rescue_total_threshold: 60,
            rescue_floor: 20,
            rescue_ceiling: 70,

            uniform_boost_mean_threshold: 60.0,
            uniform_boost_cap: 15,
            uniform_boost_rate: 0.1,
            uniform_boost_min_score: 50,

            core_floor_ratio: 0.8,
            data_floor_ratio: 0.7,
            strong_candidate_floor: 70.0,

            low_overlap_floor: 30.0,
            strong_match_threshold: 65.0,
            strong_match_bonus: 5.0,

            section_base: 25.0,
            section_step: 3.0,
            section_cap: 15.0,
            structureless_baseline: 20.0,

            short_resume_chars: 200,
            short_resume_cap: 50.0,
            modest_resume_chars: 600,
            modest_resume_floor: 25.0,

            baseline_score: 15.0,

            safety_nets: true,
        }
    }
}

impl ScoringPolicy {
    /// Policy with all score-shaping safety nets disabled.
    pub fn strict() -> Self {
        Self {
            safety_nets: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let weights = CategoryWeights::default();
        assert!((weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn redistributed_weights_sum_to_one() {
        let weights = CategoryWeights::default().without_bonus();
        assert!((weights.sum() - 1.0).abs() < 1e-9);
        assert_eq!(weights.bonus, 0.0);
    }

    #[test]
    fn redistribution_preserves_proportions() {
        let weights = CategoryWeights::default().without_bonus();
        // 0.45/0.90, 0.25/0.90, 0.20/0.90
        assert!((weights.core - 0.5).abs() < 1e-9);
        assert!((weights.tools - 0.25 / 0.90).abs() < 1e-9);
        assert!((weights.data - 0.20 / 0.90).abs() < 1e-9);
    }

    #[test]
    fn default_policy_matches_documented_values() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.composite_weight, 0.6);
        assert_eq!(policy.overlap_weight, 0.25);
        assert_eq!(policy.cosine_weight, 0.15);
        assert_eq!(policy.semantic_credit, 0.7);
        assert_eq!(policy.neutral_score, 50);
        assert_eq!(policy.baseline_score, 15.0);
        assert!(policy.safety_nets);
    }

    #[test]
    fn strict_policy_disables_safety_nets_only() {
        let strict = ScoringPolicy::strict();
        assert!(!strict.safety_nets);
        assert_eq!(strict.baseline_score, ScoringPolicy::default().baseline_score);
    }
}
