//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::{GameSession, NoticeStyle, RoundStatus};
use crate::output::formatters::{guess_row, keyboard_rows};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the text-mode game loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or a new round
/// cannot be started.
pub fn run_simple<R: BufRead, W: Write>(
    session: &mut GameSession<'_>,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                   Wordle+ - Text Mode                        ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries.",
        session.word_length(),
        session.round().max_guesses()
    )?;
    writeln!(out, "  🟩 right letter, right spot")?;
    writeln!(out, "  🟨 right letter, wrong spot")?;
    writeln!(out, "  ⬜ letter not in the word\n")?;
    writeln!(
        out,
        "Commands: ':quit' to exit, ':new' for new game, ':keys' to show the keyboard\n"
    )?;

    loop {
        let round = session.round();
        let turn = round.attempts() + 1;
        let prompt = format!("Guess {turn}/{}", round.max_guesses());

        let Some(line) = read_line(input, out, &prompt)? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        // Words are letters only, so ':' commands never shadow a guess
        match line.to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            ":new" | ":n" => {
                session.new_round()?;
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            ":keys" | ":k" => {
                for row in keyboard_rows(session.keyboard()) {
                    writeln!(out, "  {row}")?;
                }
                writeln!(out)?;
                continue;
            }
            "" => continue,
            _ => {}
        }

        if session.submit(&line).is_ok() {
            writeln!(out)?;
            for record in session.round().records() {
                writeln!(out, "  {}", guess_row(record))?;
            }
            writeln!(out)?;
        }

        for notice in session.notices_mut().drain() {
            let text = match notice.style {
                NoticeStyle::Info => notice.text.normal(),
                NoticeStyle::Success => notice.text.bright_green().bold(),
                NoticeStyle::Error => notice.text.red(),
            };
            writeln!(out, "  {text}")?;
        }

        let status = session.round().status();
        if status.is_terminal() {
            print_round_summary(session, status, out)?;

            let again = read_line(input, out, "Play again? (yes/no)")?;
            match again.as_deref().map(str::to_lowercase).as_deref() {
                Some("yes" | "y") => {
                    session.new_round()?;
                    writeln!(out, "\n🔄 New game started!\n")?;
                }
                _ => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
        }
    }
}

fn print_round_summary<W: Write>(
    session: &GameSession<'_>,
    status: RoundStatus,
    out: &mut W,
) -> anyhow::Result<()> {
    let round = session.round();

    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    if status == RoundStatus::Won {
        writeln!(
            out,
            "{}",
            "    🎉 🎊 ✨  W O R D   F O U N D !  ✨ 🎊 🎉    "
                .bright_green()
                .bold()
        )?;
    } else {
        writeln!(
            out,
            "    The word was {}",
            round.secret().text().to_uppercase().bright_yellow().bold()
        )?;
    }
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;

    if let Some(result) = session.last_result() {
        writeln!(
            out,
            "\n  Attempts: {}   Time: {}s   XP: +{}",
            result.attempts.to_string().bright_cyan().bold(),
            result.time,
            result.xp.to_string().bright_yellow()
        )?;
    }

    let profile = session.profile();
    writeln!(
        out,
        "  Total XP: {}   Rank: {}   Wins: {}\n",
        profile.xp(),
        profile.rank().to_string().bright_white().bold(),
        profile.wins()
    )?;
    Ok(())
}

/// Prompt and read one trimmed line, `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
