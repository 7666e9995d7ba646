//! Formatting utilities for terminal output

/// Format a word's letter count as a list badge, e.g. `(4)`
#[must_use]
pub fn length_badge(word: &str) -> String {
    format!("({})", word.chars().count())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a score as a bar
///
/// Scaled against 100 points, roughly what a good session lands on.
#[must_use]
pub fn score_bar(score: u32, width: usize) -> String {
    let max_score = 100.0;
    create_progress_bar(f64::from(score), max_score, width)
}
