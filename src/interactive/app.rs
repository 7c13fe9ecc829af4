//! TUI application state and logic

use crate::game::{GameSession, Key, KeyOutcome, Keyboard, Notice};
use crate::store::ProfileStats;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Time for one tile to flip
pub const TILE_REVEAL: Duration = Duration::from_millis(250);

/// Event poll interval while a reveal is running
const FRAME: Duration = Duration::from_millis(40);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    /// Tiles of the last guess are flipping; keys are ignored
    Revealing,
    RoundOver,
}

/// Tile animation for one submitted row
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    pub row: usize,
    pub tiles: usize,
    pub started: Instant,
}

impl Reveal {
    /// Tiles flipped by `now`
    #[must_use]
    pub fn revealed(&self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.started);
        let flipped = elapsed.as_millis() / TILE_REVEAL.as_millis();
        usize::try_from(flipped).unwrap_or(usize::MAX).min(self.tiles)
    }

    #[must_use]
    pub fn is_done(&self, now: Instant) -> bool {
        self.revealed(now) >= self.tiles
    }
}

/// Application state
///
/// Anything that would give a guess away (keyboard colors, the round's closing
/// notices, the profile standing) stays as it was until that guess's reveal ends.
pub struct App<'a> {
    pub session: GameSession<'a>,
    pub reveal: Option<Reveal>,
    /// Notices posted by the guess being revealed
    pub pending: Vec<Notice>,
    /// Profile stats as of the last finished reveal
    pub standing: ProfileStats,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(mut session: GameSession<'a>) -> Self {
        let length = session.word_length();
        session
            .notices_mut()
            .info(format!("Guess the {length}-letter word!"));
        let standing = session.profile().stats();
        Self {
            session,
            reveal: None,
            pending: Vec::new(),
            standing,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn input_mode(&self, now: Instant) -> InputMode {
        if self.reveal.is_some_and(|reveal| !reveal.is_done(now)) {
            InputMode::Revealing
        } else if self.session.round().status().is_terminal() {
            InputMode::RoundOver
        } else {
            InputMode::Playing
        }
    }

    /// Finish a completed reveal, releasing what it held back
    pub fn tick(&mut self, now: Instant) {
        if self.reveal.is_some_and(|reveal| reveal.is_done(now)) {
            self.reveal = None;
            for notice in std::mem::take(&mut self.pending) {
                self.session.notices_mut().push(notice.text, notice.style);
            }
            self.standing = self.session.profile().stats();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        self.tick(now);
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.input_mode(now) {
            InputMode::Revealing => {}
            InputMode::RoundOver => match key.code {
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_round(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {}
            },
            InputMode::Playing => {
                let key = match key.code {
                    KeyCode::Char(c) => Key::from_char(c),
                    KeyCode::Backspace => Some(Key::Delete),
                    KeyCode::Enter => Some(Key::Enter),
                    _ => None,
                };
                if let Some(key) = key {
                    self.press(key, now);
                }
            }
        }
    }

    fn press(&mut self, key: Key, now: Instant) {
        let shown = self.session.notices_mut().drain();
        let outcome = self.session.press(key);
        let posted = self.session.notices_mut().drain();
        for notice in shown {
            self.session.notices_mut().push(notice.text, notice.style);
        }

        if let KeyOutcome::Accepted(record) = outcome {
            self.pending = posted;
            self.reveal = Some(Reveal {
                row: self.session.round().attempts() - 1,
                tiles: record.feedback().len(),
                started: now,
            });
        } else {
            for notice in posted {
                self.session.notices_mut().push(notice.text, notice.style);
            }
        }
    }

    pub fn new_round(&mut self) {
        self.reveal = None;
        self.pending.clear();
        match self.session.new_round() {
            Ok(()) => self.session.notices_mut().info("New round started!"),
            Err(err) => {
                log::error!("could not start a new round: {err}");
                self.session.notices_mut().error(err.to_string());
            }
        }
    }

    /// Tiles of `row` whose colors may be shown at `now`
    #[must_use]
    pub fn visible_tiles(&self, row: usize, now: Instant) -> usize {
        match self.reveal {
            Some(reveal) if reveal.row == row => reveal.revealed(now),
            _ => self.session.word_length(),
        }
    }

    /// Keyboard colors from the guesses already revealed at `now`
    #[must_use]
    pub fn keyboard(&self, now: Instant) -> Keyboard {
        match self.reveal {
            Some(reveal) if !reveal.is_done(now) => {
                let mut keyboard = Keyboard::new();
                for record in &self.session.round().records()[..reveal.row] {
                    keyboard.apply(record);
                }
                keyboard
            }
            _ => self.session.keyboard().clone(),
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        let timeout = if app.reveal.is_some() { FRAME } else { Duration::from_secs(1) };
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key, Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
