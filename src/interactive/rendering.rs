//! TUI rendering with ratatui
//!
//! Guess grid, virtual keyboard, notices and the player's standing.

use super::app::{App, InputMode};
use crate::core::LetterVerdict;
use crate::game::{KEYBOARD_ROWS, NoticeStyle, RoundStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_grid(f, app, now, main_chunks[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(main_chunks[1]);

    render_keyboard(f, app, now, side[0]);
    render_notices(f, app, side[1]);

    render_input(f, app, now, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🟩 WORDLE+ - {} letters, {} guesses",
        app.session.word_length(),
        app.session.round().max_guesses()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn verdict_style(verdict: Option<LetterVerdict>) -> Style {
    match verdict {
        Some(LetterVerdict::Exact) => Style::new().fg(Color::Black).bg(Color::Green),
        Some(LetterVerdict::Present) => Style::new().fg(Color::Black).bg(Color::Yellow),
        Some(LetterVerdict::Absent) => Style::new().fg(Color::White).bg(Color::DarkGray),
        None => Style::new().fg(Color::White),
    }
}

fn tile(letter: char, verdict: Option<LetterVerdict>) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        verdict_style(verdict).add_modifier(Modifier::BOLD),
    )
}

fn render_grid(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let round = app.session.round();
    let length = app.session.word_length();
    let mut lines = Vec::with_capacity(round.max_guesses());

    for (row, record) in round.records().iter().enumerate() {
        let visible = app.visible_tiles(row, now);
        let mut spans = Vec::with_capacity(length * 2);
        for (i, (letter, &verdict)) in record
            .guess()
            .text()
            .chars()
            .zip(record.feedback().verdicts())
            .enumerate()
        {
            spans.push(tile(letter, (i < visible).then_some(verdict)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if !round.status().is_terminal() {
        let typed: Vec<char> = app.session.input().as_str().chars().collect();
        let spans: Vec<Span> = (0..length)
            .flat_map(|i| {
                let letter = typed.get(i).copied().unwrap_or('·');
                [tile(letter, None), Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    while lines.len() < round.max_guesses() {
        let spans: Vec<Span> = (0..length)
            .flat_map(|_| {
                [
                    Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let keyboard = app.keyboard(now);
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let keys: Vec<Span> = row.chars().map(|c| tile(c, keyboard.state(c))).collect();
            Line::from(keys)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_notices(f: &mut Frame, app: &App, area: Rect) {
    let notices: Vec<ListItem> = app
        .session
        .notices()
        .iter()
        .rev()
        .map(|notice| {
            let style = match notice.style {
                NoticeStyle::Info => Style::default().fg(Color::White),
                NoticeStyle::Success => Style::default().fg(Color::Green),
                NoticeStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(notice.text.clone()).style(style)
        })
        .collect();

    let list = List::new(notices).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let round = app.session.round();
    let (title, content, color) = match app.input_mode(now) {
        InputMode::Playing => {
            let mut content = format!("Guess {}/{}", round.attempts() + 1, round.max_guesses());
            if app.session.input().is_full() {
                content.push_str(" - press Enter");
            }
            (
                " Type your guess | Enter: Submit | Backspace: Delete ".to_string(),
                content,
                Color::Yellow,
            )
        }
        InputMode::Revealing => (
            " Revealing... ".to_string(),
            String::new(),
            Color::DarkGray,
        ),
        InputMode::RoundOver => {
            let summary = app.session.last_result().map_or_else(String::new, |result| {
                format!(
                    "{} in {} | {}s | +{} XP",
                    round.secret().text().to_uppercase(),
                    result.attempts,
                    result.time,
                    result.xp
                )
            });
            let (title, color) = if round.status() == RoundStatus::Won {
                (" 🎉 YOU WON! 🎉 | n: New round | q: Quit ", Color::Green)
            } else {
                (" Round over | n: New round | q: Quit ", Color::Red)
            };
            (title.to_string(), summary, color)
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let standing = &app.standing;

    let rank = Paragraph::new(format!("Rank: {}", standing.rank)).alignment(Alignment::Center);
    f.render_widget(rank, chunks[0]);

    let xp = Paragraph::new(format!("XP: {}", standing.xp)).alignment(Alignment::Center);
    f.render_widget(xp, chunks[1]);

    let wins = Paragraph::new(format!("Wins: {}", standing.wins)).alignment(Alignment::Center);
    f.render_widget(wins, chunks[2]);

    let help = Paragraph::new("Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameSession, Key};
    use crate::results::MemorySink;
    use crate::store::{MemoryStore, Profile};
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_grid_keyboard_and_status() {
        let dictionary = Dictionary::from_words(words_from_slice(&["crane"]));
        let session = GameSession::new(
            &dictionary,
            5,
            6,
            StdRng::seed_from_u64(3),
            MemorySink::new(),
            Profile::new(MemoryStore::new()),
        )
        .unwrap();
        let app = App::new(session);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app, Instant::now())).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("WORDLE+"));
        assert!(text.contains("Keyboard"));
        assert!(text.contains("Rank: IRON"));
        assert!(text.contains("Guess 1/6"));
        assert!(!text.contains("press Enter"));
    }

    #[test]
    fn full_buffer_prompts_for_enter() {
        let dictionary = Dictionary::from_words(words_from_slice(&["crane"]));
        let mut session = GameSession::new(
            &dictionary,
            5,
            6,
            StdRng::seed_from_u64(3),
            MemorySink::new(),
            Profile::new(MemoryStore::new()),
        )
        .unwrap();
        for c in "slate".chars() {
            session.press(Key::Letter(c));
        }
        let app = App::new(session);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app, Instant::now())).unwrap();
        assert!(screen_text(&terminal).contains("Guess 1/6 - press Enter"));
    }
}
