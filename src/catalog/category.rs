// The four fixed skill categories.

use serde::{Deserialize, Serialize};

/// Skill grouping used for weighting and per-category sub-scores.
///
/// The set is fixed: every catalog skill belongs to exactly one of these,
/// and the scorer always reports all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Core,
    ToolsFrameworks,
    DataAnalytics,
    Bonus,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Core,
        SkillCategory::ToolsFrameworks,
        SkillCategory::DataAnalytics,
        SkillCategory::Bonus,
    ];

    /// Display label, also the key used in reports and the CSV format.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Core => "Core Skills",
            SkillCategory::ToolsFrameworks => "Tools & Frameworks",
            SkillCategory::DataAnalytics => "Data & Analytics",
            SkillCategory::Bonus => "Bonus Skills",
        }
    }

    /// Parse a category from its display label (case-insensitive).
    /// Used by the CSV catalog loader.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        match label.as_str() {
            "core skills" => Some(SkillCategory::Core),
            "tools & frameworks" => Some(SkillCategory::ToolsFrameworks),
            "data & analytics" => Some(SkillCategory::DataAnalytics),
            "bonus skills" => Some(SkillCategory::Bonus),
            _ => None,
        }
    }

    /// Bonus skills enhance but never penalize — several scoring rules
    /// branch on this.
    pub fn is_bonus(&self) -> bool {
        matches!(self, SkillCategory::Bonus)
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
