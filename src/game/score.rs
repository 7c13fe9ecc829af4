//! Round results, XP and ranks

use super::round::{Round, RoundStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Seconds under which a win earns a time bonus
const TIME_BONUS_WINDOW_SECS: u64 = 300;

/// Outcome of a finished round, in the shape the results endpoint accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub word: String,
    pub attempts: usize,
    /// Whole seconds from round start to the final guess
    pub time: u64,
    pub win: bool,
    pub xp: u64,
}

impl GameResult {
    /// Build the result of a terminal round
    ///
    /// Returns `None` while the round is still in progress.
    #[must_use]
    pub fn from_round(round: &Round, elapsed: Duration) -> Option<Self> {
        let win = match round.status() {
            RoundStatus::InProgress => return None,
            RoundStatus::Won => true,
            RoundStatus::Lost => false,
        };
        let time = elapsed.as_secs();

        Some(Self {
            word: round.secret().text().to_string(),
            attempts: round.attempts(),
            time,
            win,
            xp: if win {
                win_xp(round.word_length(), round.remaining(), time)
            } else {
                0
            },
        })
    }
}

/// XP for a win
///
/// `10 × length × (remaining + 1)` plus a third of the seconds left in the
/// five-minute bonus window.
///
/// ```
/// use wordle_plus::game::score::win_xp;
///
/// // Five letters, guessed on the third of six tries, in one minute
/// assert_eq!(win_xp(5, 3, 60), 200 + 80);
/// ```
#[must_use]
pub fn win_xp(word_length: usize, remaining: usize, seconds: u64) -> u64 {
    let base = 10 * word_length as u64 * (remaining as u64 + 1);
    base + TIME_BONUS_WINDOW_SECS.saturating_sub(seconds) / 3
}

/// Player tier derived from total XP
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rank {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Rank {
    /// Tier for an XP total
    ///
    /// ```
    /// use wordle_plus::game::Rank;
    ///
    /// assert_eq!(Rank::from_xp(0), Rank::Iron);
    /// assert_eq!(Rank::from_xp(5_000), Rank::Silver);
    /// assert_eq!(Rank::from_xp(20_000), Rank::Platinum);
    /// ```
    #[must_use]
    pub const fn from_xp(xp: u64) -> Self {
        match xp {
            0..2_000 => Self::Iron,
            2_000..5_000 => Self::Bronze,
            5_000..9_000 => Self::Silver,
            9_000..14_000 => Self::Gold,
            _ => Self::Platinum,
        }
    }

    /// XP at which this tier starts
    #[must_use]
    pub const fn threshold(self) -> u64 {
        match self {
            Self::Iron => 0,
            Self::Bronze => 2_000,
            Self::Silver => 5_000,
            Self::Gold => 9_000,
            Self::Platinum => 14_000,
        }
    }

    /// The tier above this one, `None` at the top
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Iron => Some(Self::Bronze),
            Self::Bronze => Some(Self::Silver),
            Self::Silver => Some(Self::Gold),
            Self::Gold => Some(Self::Platinum),
            Self::Platinum => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iron => "IRON",
            Self::Bronze => "BRONZE",
            Self::Silver => "SILVER",
            Self::Gold => "GOLD",
            Self::Platinum => "PLATINUM",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::Dictionary;

    #[test]
    fn in_progress_round_has_no_result() {
        let round = Round::new(Word::new("crane").unwrap());
        assert!(GameResult::from_round(&round, Duration::from_secs(5)).is_none());
    }

    #[test]
    fn won_round_result() {
        let dictionary = Dictionary::embedded();
        let mut round = Round::new(Word::new("crane").unwrap());
        round.submit("slate", &dictionary).unwrap();
        round.submit("crane", &dictionary).unwrap();

        let result = GameResult::from_round(&round, Duration::from_millis(45_900)).unwrap();
        assert_eq!(result.word, "crane");
        assert_eq!(result.attempts, 2);
        assert_eq!(result.time, 45);
        assert!(result.win);
        assert_eq!(result.xp, win_xp(5, 4, 45));
    }

    #[test]
    fn lost_round_earns_nothing() {
        let dictionary = Dictionary::embedded();
        let mut round = Round::with_max_guesses(Word::new("crane").unwrap(), 1);
        round.submit("slate", &dictionary).unwrap();

        let result = GameResult::from_round(&round, Duration::from_secs(10)).unwrap();
        assert!(!result.win);
        assert_eq!(result.xp, 0);
        assert_eq!(result.attempts, 1);
    }

    #[test]
    fn xp_scales_with_length_and_remaining() {
        assert_eq!(win_xp(5, 0, 600), 50);
        assert_eq!(win_xp(8, 5, 600), 480);
        assert_eq!(win_xp(4, 2, 0), 120 + 100);
        assert!(win_xp(6, 3, 30) > win_xp(6, 2, 30));
    }

    #[test]
    fn rank_thresholds() {
        assert_eq!(Rank::from_xp(1_999), Rank::Iron);
        assert_eq!(Rank::from_xp(2_000), Rank::Bronze);
        assert_eq!(Rank::from_xp(8_999), Rank::Silver);
        assert_eq!(Rank::from_xp(9_000), Rank::Gold);
        assert_eq!(Rank::from_xp(13_999), Rank::Gold);
        assert_eq!(Rank::from_xp(14_000), Rank::Platinum);
    }

    #[test]
    fn thresholds_agree_with_from_xp() {
        let mut rank = Rank::Iron;
        while let Some(next) = rank.next() {
            assert_eq!(Rank::from_xp(next.threshold()), next);
            assert_eq!(Rank::from_xp(next.threshold() - 1), rank);
            rank = next;
        }
        assert_eq!(rank, Rank::Platinum);
    }

    #[test]
    fn result_serializes_with_endpoint_field_names() {
        let result = GameResult {
            word: "crane".to_string(),
            attempts: 3,
            time: 42,
            win: true,
            xp: 250,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"word": "crane", "attempts": 3, "time": 42, "win": true, "xp": 250})
        );
    }
}
