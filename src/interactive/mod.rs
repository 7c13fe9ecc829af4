//! Interactive TUI mode

mod app;
mod rendering;

pub use app::{App, InputMode, Reveal, TILE_REVEAL, run_tui};
