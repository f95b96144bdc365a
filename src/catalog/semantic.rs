// Semantic equivalence map — configured synonym/related-term relationships.
//
// When a JD asks for a skill the resume never names exactly, a related
// phrase ("data preprocessing" for "feature engineering") still earns
// partial credit. The table is static and deliberately small: these are
// curated equivalences, not learned embeddings.

use std::collections::HashMap;

use crate::catalog::pattern::SkillPattern;

/// Built-in equivalence table: canonical skill -> acceptable synonyms.
const SEMANTIC_EQUIVALENTS: &[(&str, &[&str])] = &[
    (
        "feature engineering",
        &["data preprocessing", "data cleaning", "data transformation"],
    ),
    (
        "model evaluation",
        &["model validation", "model testing", "performance evaluation", "optimization"],
    ),
    ("pandas", &["data analysis", "data manipulation", "data processing"]),
    (
        "numpy",
        &["numerical computing", "mathematical computing", "scientific computing"],
    ),
    (
        "machine learning",
        &["ml", "ai", "artificial intelligence", "predictive modeling"],
    ),
    ("data science", &["data analysis", "analytics", "business intelligence"]),
    ("cloud", &["aws", "azure", "gcp", "cloud computing"]),
    ("api", &["rest api", "graphql", "web services"]),
    ("docker", &["containerization", "containers", "kubernetes"]),
    ("sql", &["database", "postgresql", "mysql", "querying"]),
];

struct Synonym {
    phrase: String,
    pattern: SkillPattern,
}

/// Case-insensitive map from a canonical skill name to its synonym phrases.
pub struct SemanticMap {
    entries: HashMap<String, Vec<Synonym>>,
}

impl SemanticMap {
    /// Build the built-in equivalence table.
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        for (skill, synonyms) in SEMANTIC_EQUIVALENTS {
            let compiled: Vec<Synonym> = synonyms
                .iter()
                .map(|phrase| Synonym {
                    phrase: phrase.to_string(),
                    pattern: SkillPattern::compile(phrase)
                        .expect("built-in synonym pattern compiles"),
                })
                .collect();
            entries.insert(skill.to_string(), compiled);
        }
        Self { entries }
    }

    /// Synonym phrases for a skill, in table order. Lookup is case-insensitive.
    pub fn equivalents(&self, skill: &str) -> Option<Vec<&str>> {
        self.entries
            .get(&skill.trim().to_lowercase())
            .map(|synonyms| synonyms.iter().map(|s| s.phrase.as_str()).collect())
    }

    /// Whether any synonym of `skill` appears in the normalized text.
    /// Returns false for skills with no equivalence entry.
    pub fn matches_in(&self, skill: &str, text: &str) -> bool {
        match self.entries.get(&skill.trim().to_lowercase()) {
            Some(synonyms) => synonyms.iter().any(|s| s.pattern.matches(text)),
            None => false,
        }
    }
}

impl Default for SemanticMap {
    fn default() -> Self {
        Self::builtin()
    }
}
