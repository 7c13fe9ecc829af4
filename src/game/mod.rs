//! Game rules around the evaluator
//!
//! Round lifecycle, letter entry, keyboard coloring, scoring and the session that
//! ties them to a dictionary, a result sink and the cached profile.

pub mod input;
pub mod keyboard;
pub mod notice;
pub mod round;
pub mod score;
pub mod session;

pub use input::{Key, LetterInput};
pub use keyboard::{KEYBOARD_ROWS, Keyboard};
pub use notice::{Notice, NoticeBoard, NoticeStyle};
pub use round::{DEFAULT_MAX_GUESSES, GuessError, GuessRecord, Round, RoundStatus};
pub use score::{GameResult, Rank};
pub use session::{GameSession, KeyOutcome, SessionError};
