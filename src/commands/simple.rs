//! Simple interactive CLI mode
//!
//! Line-oriented game loop without TUI

use crate::core::SubmissionOutcome;
use crate::dictionary::Dictionary;
use crate::engine::GameEngine;
use crate::output::formatters::length_badge;
use crate::output::print_session_summary;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a
/// restart cannot pick a root word.
pub fn run_simple<D: Dictionary>(engine: &mut GameEngine<'_, D>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Word Scramble - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Spell as many words as you can from the root word.");
    println!("Words must be longer than two letters, use only letters the root");
    println!("contains, be real words, and not repeat or equal the root.\n");
    println!("Commands: 'quit' to exit, 'new' for a fresh root word\n");

    loop {
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Root word: {}   Score: {}   Words found: {}",
            engine.root_word().to_uppercase().bright_yellow().bold(),
            engine.score().to_string().bright_cyan(),
            engine.used_words().len()
        );
        println!("────────────────────────────────────────────────────────────");

        // Show the freshest finds
        if !engine.used_words().is_empty() {
            let recent: Vec<String> = engine
                .used_words()
                .iter()
                .take(5)
                .map(|w| format!("{} {w}", length_badge(w)))
                .collect();
            println!("Latest: {}\n", recent.join("  "));
        }

        let input = get_user_input("Enter a word (or command)")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                print_session_summary(engine.root_word(), engine.used_words(), engine.score());
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                let root = engine.start_game().map_err(|e| e.to_string())?.to_string();
                println!(
                    "\n🔄 New game! Root word: {}\n",
                    root.to_uppercase().bright_yellow().bold()
                );
            }
            _ => match engine.submit_word(&input) {
                SubmissionOutcome::Accepted { word, score_delta } => {
                    println!(
                        "\n{} '{}' accepted, {}\n",
                        "✓".green().bold(),
                        word.bright_white().bold(),
                        format!("+{score_delta}").green()
                    );
                }
                SubmissionOutcome::Rejected(reason) => {
                    println!(
                        "\n{} {}: {}\n",
                        "✗".red().bold(),
                        reason.title().red().bold(),
                        reason.message(engine.root_word())
                    );
                }
            },
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
