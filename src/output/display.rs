//! Display functions for command results

use super::formatters::{length_badge, score_bar};
use crate::commands::CheckResult;
use crate::core::SubmissionOutcome;
use colored::Colorize;

/// Print the result of a check run
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (raw, outcome) in &result.outcomes {
        match outcome {
            SubmissionOutcome::Accepted { word, score_delta } => {
                println!(
                    "  {} {} {}  {}",
                    "✓".green().bold(),
                    length_badge(word).bright_black(),
                    word.bright_white().bold(),
                    format!("+{score_delta}").green()
                );
            }
            SubmissionOutcome::Rejected(reason) => {
                println!(
                    "  {} {}  {}: {}",
                    "✗".red().bold(),
                    raw,
                    reason.title().red(),
                    reason.message(&result.root)
                );
            }
        }
    }

    println!(
        "\nTotal score: {}",
        result.score.to_string().bright_yellow().bold()
    );
}

/// Print an end-of-session summary
pub fn print_session_summary(root: &str, used_words: &[String], score: u32) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SESSION SUMMARY:".bright_cyan().bold(),
        root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Score: [{}] {}",
        score_bar(score, 30).green(),
        score.to_string().bright_yellow().bold()
    );
    println!("   Words found: {}", used_words.len());

    for word in used_words {
        println!("   {} {}", length_badge(word).bright_black(), word);
    }
}
