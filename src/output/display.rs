//! Display functions for command results

use super::formatters::{colored_row, format_elapsed};
use crate::core::{GuessRow, KeyState, Tag};
use crate::game::{GameSummary, Outcome};
use crate::history::GameRecord;
use colored::Colorize;

/// Keyboard rows in on-screen order
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Print a single evaluated guess
pub fn print_check_result(row: &GuessRow) {
    println!("\n  {}  {}", colored_row(row), row.to_emoji());
    if row.is_solved() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Print every row played so far
pub fn print_board(rows: &[GuessRow], attempt_cap: usize) {
    println!();
    for (i, row) in rows.iter().enumerate() {
        println!(
            "  {} {}  {}",
            format!("{}/{attempt_cap}", i + 1).bright_black(),
            colored_row(row),
            row.to_emoji()
        );
    }
}

/// Print the keyboard with letters coloured by best known tag
pub fn print_keyboard(keys: &KeyState) {
    println!();
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let line: String = row
            .chars()
            .map(|letter| {
                let text = letter.to_string();
                match keys.get(letter) {
                    Some(Tag::Correct) => text.green().bold().to_string(),
                    Some(Tag::Present) => text.yellow().bold().to_string(),
                    Some(Tag::Absent) => text.bright_black().to_string(),
                    None => text.white().to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {}{line}", " ".repeat(indent));
    }
    println!();
}

/// Print the end-of-game message
pub fn print_summary(player: &str, summary: &GameSummary) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match summary.outcome {
        Outcome::Won => {
            println!("{}", "    🎉  Y O U   W O N !  🎉".bright_green().bold());
            println!("\n  Congratulations, {}!", player.bright_white().bold());
        }
        Outcome::Lost => {
            println!("{}", "    Game Over".red().bold());
            println!(
                "\n  The correct word was: {}",
                summary.target.bright_yellow().bold()
            );
        }
    }
    println!("  Time:     {}", format_elapsed(summary.elapsed));
    println!(
        "  Attempts: {}",
        summary.attempts.to_string().bright_cyan().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print stored history records, newest first
pub fn print_history(records: &[GameRecord]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GAME HISTORY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if records.is_empty() {
        println!("\n  No games played yet.");
        return;
    }

    println!(
        "\n  {:<16} {:>6} {:>8}  {:<6} {}",
        "Player", "Time", "Attempts", "Result", "Played"
    );
    for record in records {
        let result = if record.won {
            format!("{:<6}", "WON").green()
        } else {
            format!("{:<6}", "LOST").red()
        };
        println!(
            "  {:<16} {:>6} {:>8}  {} {}",
            record.player_name,
            format_elapsed(record.elapsed()),
            record.attempts,
            result,
            record.played_at.format("%Y-%m-%d %H:%M")
        );
    }
}
