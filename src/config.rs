use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Everything has a
/// sensible default — the scorer runs with the built-in catalog and the
/// standard policy when nothing is set.
pub struct Config {
    /// Optional skills catalog override (SIFT_SKILLS_CSV). A missing or
    /// unusable file falls back to the built-in catalog with a warning.
    pub skills_csv: Option<PathBuf>,
    /// Strict scoring mode (SIFT_STRICT_SCORING): disables the
    /// score-shaping safety nets for honest/debug output.
    pub strict_scoring: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let skills_csv = env::var("SIFT_SKILLS_CSV").ok().map(PathBuf::from);

        let strict_scoring = matches!(
            env::var("SIFT_STRICT_SCORING").as_deref(),
            Ok("1") | Ok("true") | Ok("yes")
        );

        Ok(Self {
            skills_csv,
            strict_scoring,
        })
    }
}
