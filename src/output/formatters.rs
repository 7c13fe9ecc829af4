//! Formatting utilities for terminal output

use crate::core::{LetterVerdict, Word};
use crate::game::{GuessRecord, KEYBOARD_ROWS, Keyboard};
use colored::{ColoredString, Colorize};

/// One letter drawn as a colored tile
#[must_use]
pub fn letter_tile(letter: char, verdict: Option<LetterVerdict>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        Some(LetterVerdict::Exact) => text.black().on_green().bold(),
        Some(LetterVerdict::Present) => text.black().on_yellow().bold(),
        Some(LetterVerdict::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A guess drawn as a row of tiles
#[must_use]
pub fn guess_row(record: &GuessRecord) -> String {
    tiles(record.guess(), record.feedback().verdicts())
}

fn tiles(word: &Word, verdicts: &[LetterVerdict]) -> String {
    word.text()
        .chars()
        .zip(verdicts)
        .map(|(letter, &verdict)| letter_tile(letter, Some(verdict)).to_string())
        .collect()
}

/// The virtual keyboard with each key colored by its best verdict
#[must_use]
pub fn keyboard_rows(keyboard: &Keyboard) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|letter| letter_tile(letter, keyboard.state(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full_and_overflow() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 3), "░░░");
    }

    #[test]
    fn tiles_show_uppercase_letters() {
        colored::control::set_override(false);
        assert_eq!(letter_tile('q', None).to_string(), " Q ");
        assert_eq!(
            letter_tile('a', Some(LetterVerdict::Exact)).to_string(),
            " A "
        );
    }

    #[test]
    fn keyboard_has_three_indented_rows() {
        colored::control::set_override(false);
        let rows = keyboard_rows(&Keyboard::new());
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with(" Q "));
        assert!(rows[1].starts_with("   A "));
        assert!(rows[2].starts_with("     Z "));
    }
}
