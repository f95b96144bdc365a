use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::warn;

mod config;

use sift::catalog::category::SkillCategory;
use sift::catalog::skills::SkillCatalog;
use sift::output::terminal;
use sift::scoring::policy::ScoringPolicy;

/// Sift: ATS resume scoring.
///
/// Scores a resume against a job description the way applicant-tracking
/// software does: weighted keyword matching per skill category, global
/// text similarity, and matched/missing skill lists.
#[derive(Parser)]
#[command(name = "sift", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a resume against a job description
    Score {
        /// Path to the resume as plain text
        #[arg(long)]
        resume: PathBuf,

        /// Path to the job description as plain text
        #[arg(long)]
        jd: PathBuf,

        /// Emit the result as JSON instead of the terminal report
        #[arg(long)]
        json: bool,

        /// Disable the score-shaping safety nets (honest/debug scoring)
        #[arg(long)]
        strict: bool,
    },

    /// Show the active skill catalog (validates a CSV override)
    Catalog,
}

/// Minimum JD length before the advisory fires. Shorter descriptions
/// still score, just less reliably.
const JD_ADVISORY_CHARS: usize = 200;

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sift=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = config::Config::load()?;

    match cli.command {
        Commands::Score {
            resume,
            jd,
            json,
            strict,
        } => {
            let resume_text = fs::read_to_string(&resume)
                .with_context(|| format!("reading resume {}", resume.display()))?;
            let jd_text = fs::read_to_string(&jd)
                .with_context(|| format!("reading job description {}", jd.display()))?;

            if jd_text.trim().chars().count() < JD_ADVISORY_CHARS {
                warn!(
                    chars = jd_text.trim().chars().count(),
                    "job description is short; results are more reliable above {} characters",
                    JD_ADVISORY_CHARS
                );
            }

            let catalog = SkillCatalog::load(config.skills_csv.as_deref());
            let policy = if strict || config.strict_scoring {
                ScoringPolicy::strict()
            } else {
                ScoringPolicy::default()
            };

            let result = sift::scoring::analyze(&resume_text, &jd_text, &catalog, &policy);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                terminal::display_score_report(&result);
            }
        }

        Commands::Catalog => {
            let catalog = SkillCatalog::load(config.skills_csv.as_deref());
            println!(
                "\n{}",
                format!("=== Skill Catalog ({} skills) ===", catalog.len()).bold()
            );
            for category in SkillCategory::ALL {
                let names: Vec<&str> = catalog
                    .skills_in(category)
                    .map(|s| s.name.as_str())
                    .collect();
                println!("\n  {}", category.as_str().bold());
                println!("    {}", names.join(", ").dimmed());
            }
            println!();
        }
    }

    Ok(())
}
