// Colored terminal output for score reports.
//
// This module handles all terminal-specific formatting: the score banner,
// per-category bars, and the matched/missing skill lists. The main.rs
// display logic delegates here.

use colored::Colorize;

use crate::scoring::band::MatchBand;
use crate::scoring::ScoreResult;

/// Display a complete score report in the terminal.
pub fn display_score_report(result: &ScoreResult) {
    println!(
        "\n{}",
        format!("=== ATS Score: {:.1}% ({}) ===", result.ats_score, result.band).bold()
    );
    println!();

    let bar_width: usize = 20;

    for (name, score) in &result.category_scores {
        let filled = ((*score as f64 / 100.0) * bar_width as f64).round() as usize;
        let empty = bar_width.saturating_sub(filled);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

        let colored_bar = if *score >= 70 {
            bar.bright_green()
        } else if *score >= 40 {
            bar.bright_yellow()
        } else {
            bar.bright_red()
        };

        println!("  {:<20} {} {:>3}", name, colored_bar, score);
    }

    println!();

    if !result.matched_skills.is_empty() {
        println!(
            "  {} {}",
            "Matched:".green().bold(),
            result.matched_skills.join(", ")
        );
    }
    if !result.missing_skills.is_empty() {
        println!(
            "  {} {}",
            "Missing:".red().bold(),
            result.missing_skills.join(", ").dimmed()
        );
    }
    if result.matched_skills.is_empty() && result.missing_skills.is_empty() {
        println!(
            "  {}",
            "No catalog skills requested by this job description.".dimmed()
        );
    }

    println!();
    println!("  {}", band_hint(result.band).dimmed());
}

fn band_hint(band: MatchBand) -> &'static str {
    match band {
        MatchBand::StrongMatch => "Strong match: this resume should pass automated screening.",
        MatchBand::GoodMatch => "Good match: cover the missing skills to push past 70%.",
        MatchBand::BelowAverage => {
            "Below average: the job description asks for skills this resume doesn't show."
        }
        MatchBand::NeedsImprovement => {
            "Needs improvement: little overlap with this job description."
        }
    }
}
