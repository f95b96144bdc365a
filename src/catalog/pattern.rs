// Keyword match rule shared by the skill catalog and the semantic map.
//
// Single alphanumeric tokens match on word boundaries so "java" can't hit
// "javascript". Multi-word or punctuated names ("machine learning",
// "node.js", "ci/cd", "c++") match as plain substrings, where word-boundary
// anchors are unreliable.

use anyhow::Result;
use regex_lite::{escape, Regex};

#[derive(Debug, Clone)]
pub enum SkillPattern {
    Word(Regex),
    Phrase(String),
}

impl SkillPattern {
    /// Compile the match pattern for a skill or synonym name.
    /// Names are lowercased; an empty name is an error.
    pub fn compile(name: &str) -> Result<Self> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            anyhow::bail!("empty skill name");
        }

        if name.chars().all(|c| c.is_ascii_alphanumeric()) {
            let regex = Regex::new(&format!(r"\b{}\b", escape(&name)))?;
            Ok(SkillPattern::Word(regex))
        } else {
            Ok(SkillPattern::Phrase(name))
        }
    }

    /// Check whether the skill appears in normalized text.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            SkillPattern::Word(regex) => regex.is_match(text),
            SkillPattern::Phrase(phrase) => text.contains(phrase.as_str()),
        }
    }
}
