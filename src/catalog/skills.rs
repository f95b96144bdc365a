// The skill catalog: built-in keyword lists per category, compiled match
// patterns, and the optional CSV override.
//
// The built-in lists mirror real HR screening practice for AI/ML roles:
// core competencies carry the most weight, cloud platforms are bonuses
// that enhance but never block a candidate.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::catalog::category::SkillCategory;
use crate::catalog::pattern::SkillPattern;
use crate::catalog::semantic::SemanticMap;

/// Core Skills — AI/ML/programming fundamentals.
const CORE_SKILLS: &[&str] = &[
    "python", "machine learning", "ml", "artificial intelligence", "ai",
    "deep learning", "neural networks", "nlp", "natural language processing",
    "computer vision", "cv", "tensorflow", "pytorch", "scikit-learn", "sklearn",
    "pandas", "numpy", "data science", "algorithms", "programming", "coding",
    "software development", "development", "engineer", "engineering",
];

/// Tools & Frameworks — libraries, frameworks, deployment tooling.
const TOOLS_FRAMEWORKS: &[&str] = &[
    "flask", "fastapi", "django", "streamlit", "react", "angular", "vue",
    "node.js", "nodejs", "express", "spring", "docker", "kubernetes",
    "git", "github", "gitlab", "jenkins", "ci/cd", "api", "rest", "graphql",
    "postgresql", "mysql", "mongodb", "redis", "elasticsearch",
];

/// Data & Analytics — data processing and analysis skills.
const DATA_ANALYTICS: &[&str] = &[
    "data analysis", "data preprocessing", "feature engineering", "etl",
    "data visualization", "matplotlib", "seaborn", "plotly", "bokeh",
    "statistics", "statistical analysis", "model evaluation", "model validation",
    "metrics", "performance metrics", "optimization", "data cleaning",
    "pandas", "numpy", "sql", "big data", "spark", "hadoop",
];

/// Bonus Skills — cloud platforms and nice-to-haves.
const BONUS_SKILLS: &[&str] = &[
    "aws", "amazon web services", "azure", "google cloud platform", "gcp",
    "cloud computing", "serverless", "lambda", "ec2", "s3", "gke", "aks",
    "terraform", "ansible", "iac", "infrastructure as code", "devops",
    "tableau", "power bi", "excel", "powerpoint", "jira", "confluence",
];

/// A single catalog entry: a skill name and its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: String,
    pub category: SkillCategory,
}

/// A catalog entry with its compiled match pattern.
pub struct CatalogSkill {
    pub name: String,
    pub category: SkillCategory,
    pattern: SkillPattern,
}

impl CatalogSkill {
    /// Whether this skill appears in the normalized text.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.matches(text)
    }
}

/// Immutable skill catalog: the keyword lists plus the semantic map.
///
/// Constructed once (built-in or from CSV) and passed into the scorer by
/// reference — no process-wide singleton.
pub struct SkillCatalog {
    skills: Vec<CatalogSkill>,
    semantic: SemanticMap,
}

impl SkillCatalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        let entries = builtin_entries();
        Self::from_entries(entries).expect("built-in skill catalog compiles")
    }

    /// Build a catalog from explicit entries. Fails if any skill name is
    /// empty or its pattern does not compile.
    pub fn from_entries(entries: Vec<SkillEntry>) -> Result<Self> {
        let mut skills = Vec::with_capacity(entries.len());
        for entry in entries {
            let pattern = SkillPattern::compile(&entry.name)
                .with_context(|| format!("skill {:?}", entry.name))?;
            skills.push(CatalogSkill {
                name: entry.name.trim().to_lowercase(),
                category: entry.category,
                pattern,
            });
        }
        Ok(Self {
            skills,
            semantic: SemanticMap::builtin(),
        })
    }

    /// Load a catalog from a `skill,category` CSV file.
    ///
    /// The first line is a header and is skipped. Category labels are the
    /// display names ("Core Skills", "Tools & Frameworks", ...). Rows with
    /// unknown categories or empty names are skipped with a warning. A file
    /// that yields no usable rows is an error so the caller can fall back.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading skills CSV {}", path.display()))?;

        let mut entries = Vec::new();
        for (line_no, line) in raw.lines().enumerate().skip(1) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((name, label)) = line.split_once(',') else {
                warn!(line = line_no + 1, "skills CSV row has no category column; skipping");
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                warn!(line = line_no + 1, "skills CSV row has an empty skill name; skipping");
                continue;
            }
            let Some(category) = SkillCategory::from_label(label) else {
                warn!(
                    line = line_no + 1,
                    label = label.trim(),
                    "skills CSV row has an unknown category; skipping"
                );
                continue;
            };
            entries.push(SkillEntry {
                name: name.to_string(),
                category,
            });
        }

        if entries.is_empty() {
            anyhow::bail!("skills CSV {} contains no usable rows", path.display());
        }

        info!(skills = entries.len(), path = %path.display(), "Loaded skills catalog from CSV");
        Self::from_entries(entries)
    }

    /// Load the catalog, preferring the CSV override when one is configured.
    /// Any problem with the override falls back to the built-in list.
    pub fn load(csv_override: Option<&Path>) -> Self {
        match csv_override {
            Some(path) => match Self::from_csv(path) {
                Ok(catalog) => catalog,
                Err(err) => {
                    warn!(error = %err, "Falling back to the built-in skill catalog");
                    Self::builtin()
                }
            },
            None => Self::builtin(),
        }
    }

    /// Skills belonging to one category, in catalog order.
    pub fn skills_in(&self, category: SkillCategory) -> impl Iterator<Item = &CatalogSkill> {
        self.skills.iter().filter(move |s| s.category == category)
    }

    pub fn semantic(&self) -> &SemanticMap {
        &self.semantic
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

fn builtin_entries() -> Vec<SkillEntry> {
    let groups = [
        (SkillCategory::Core, CORE_SKILLS),
        (SkillCategory::ToolsFrameworks, TOOLS_FRAMEWORKS),
        (SkillCategory::DataAnalytics, DATA_ANALYTICS),
        (SkillCategory::Bonus, BONUS_SKILLS),
    ];
    groups
        .into_iter()
        .flat_map(|(category, names)| {
            names.iter().map(move |name| SkillEntry {
                name: name.to_string(),
                category,
            })
        })
        .collect()
}
