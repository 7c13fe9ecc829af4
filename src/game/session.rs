//! Game session: one player's sequence of rounds
//!
//! Routes key presses into the input buffer and the round, keeps the keyboard and
//! notices current, and reports finished rounds to the result sink and the profile.

use super::input::{Key, LetterInput};
use super::keyboard::Keyboard;
use super::notice::NoticeBoard;
use super::round::{GuessError, GuessRecord, Round, RoundStatus};
use super::score::GameResult;
use crate::results::{Ack, ResultSink};
use crate::store::Profile;
use crate::wordlists::Dictionary;
use rand::rngs::StdRng;
use std::time::Instant;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no {0}-letter words in the dictionary")]
    NoWords(usize),
}

/// What a key press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Round is over or the key had no effect
    Ignored,
    /// Input buffer changed
    Edited,
    /// Guess or letter rejected; round unchanged
    Rejected(GuessError),
    /// Guess accepted and evaluated
    Accepted(GuessRecord),
}

pub struct GameSession<'a> {
    dictionary: &'a Dictionary,
    word_length: usize,
    max_guesses: usize,
    rng: StdRng,
    round: Round,
    started: Instant,
    input: LetterInput,
    keyboard: Keyboard,
    notices: NoticeBoard,
    sink: Box<dyn ResultSink + 'a>,
    profile: Profile,
    last_result: Option<GameResult>,
    last_ack: Option<Ack>,
}

impl<'a> GameSession<'a> {
    /// Start a session and its first round
    ///
    /// # Errors
    /// Returns `SessionError::NoWords` if the dictionary has no words of `word_length`.
    pub fn new(
        dictionary: &'a Dictionary,
        word_length: usize,
        max_guesses: usize,
        mut rng: StdRng,
        sink: impl ResultSink + 'a,
        profile: Profile,
    ) -> Result<Self, SessionError> {
        let round = Self::draw_round(dictionary, word_length, max_guesses, &mut rng)?;

        Ok(Self {
            dictionary,
            word_length,
            max_guesses,
            rng,
            round,
            started: Instant::now(),
            input: LetterInput::new(word_length),
            keyboard: Keyboard::new(),
            notices: NoticeBoard::new(),
            sink: Box::new(sink),
            profile,
            last_result: None,
            last_ack: None,
        })
    }

    fn draw_round(
        dictionary: &Dictionary,
        word_length: usize,
        max_guesses: usize,
        rng: &mut StdRng,
    ) -> Result<Round, SessionError> {
        let secret = dictionary
            .random_word(word_length, rng)
            .ok_or(SessionError::NoWords(word_length))?
            .clone();
        log::debug!("new {word_length}-letter round");
        Ok(Round::with_max_guesses(secret, max_guesses))
    }

    /// Abandon the current round and start another
    ///
    /// # Errors
    /// Returns `SessionError::NoWords` if the dictionary has no words of the session's length.
    pub fn new_round(&mut self) -> Result<(), SessionError> {
        self.round = Self::draw_round(
            self.dictionary,
            self.word_length,
            self.max_guesses,
            &mut self.rng,
        )?;
        self.started = Instant::now();
        self.input.clear();
        self.keyboard.reset();
        self.last_result = None;
        self.last_ack = None;
        Ok(())
    }

    /// Handle one key press
    pub fn press(&mut self, key: Key) -> KeyOutcome {
        if self.round.status().is_terminal() {
            return KeyOutcome::Ignored;
        }

        match key {
            Key::Letter(letter) => match self.input.push(letter) {
                Ok(()) => KeyOutcome::Edited,
                Err(err) => {
                    self.notices.error(err.to_string());
                    KeyOutcome::Rejected(err)
                }
            },
            Key::Delete => {
                if self.input.pop().is_some() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Enter => {
                // Keep the typed letters when the guess is refused
                let guess = self.input.as_str().to_string();
                match self.submit(&guess) {
                    Ok(record) => {
                        self.input.clear();
                        KeyOutcome::Accepted(record)
                    }
                    Err(err) => KeyOutcome::Rejected(err),
                }
            }
        }
    }

    /// Submit a whole guess
    ///
    /// Rejections post an error notice and leave the round unchanged. When the guess
    /// finishes the round, the result is submitted and the profile updated.
    ///
    /// # Errors
    /// Returns the `GuessError` that caused the rejection.
    pub fn submit(&mut self, guess: &str) -> Result<GuessRecord, GuessError> {
        let record = match self.round.submit(guess, self.dictionary) {
            Ok(record) => record.clone(),
            Err(err) => {
                self.notices.error(err.to_string());
                return Err(err);
            }
        };

        self.keyboard.apply(&record);
        if self.round.status().is_terminal() {
            self.finish_round();
        }
        Ok(record)
    }

    fn finish_round(&mut self) {
        let Some(result) = GameResult::from_round(&self.round, self.started.elapsed()) else {
            return;
        };

        match self.round.status() {
            RoundStatus::Won => self.notices.success("You won!"),
            RoundStatus::Lost => self.notices.error(format!(
                "You lost! The word was {}",
                self.round.secret().text().to_uppercase()
            )),
            RoundStatus::InProgress => {}
        }

        match self.sink.submit(&result) {
            Ok(ack) => {
                log::info!("result for '{}' acknowledged: {}", result.word, ack.reference);
                self.last_ack = Some(ack);
            }
            Err(err) => {
                log::warn!("result submission failed: {err}");
                self.notices.error("Could not submit result");
            }
        }

        if let Err(err) = self.profile.record_result(&result) {
            log::warn!("failed to update profile: {err}");
            self.notices.error("Could not save stats");
        }

        self.last_result = Some(result);
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn input(&self) -> &LetterInput {
        &self.input
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    #[must_use]
    pub const fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub const fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Result of the round that just finished, cleared by `new_round`
    #[must_use]
    pub const fn last_result(&self) -> Option<&GameResult> {
        self.last_result.as_ref()
    }

    #[must_use]
    pub const fn last_ack(&self) -> Option<&Ack> {
        self.last_ack.as_ref()
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterVerdict;
    use crate::game::NoticeStyle;
    use crate::results::{MemorySink, SubmitError};
    use crate::store::{KeyValueStore, MemoryStore, StoreError};
    use serde_json::Value;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct SharedSink(Rc<RefCell<MemorySink>>);

    impl ResultSink for SharedSink {
        fn submit(&mut self, result: &GameResult) -> Result<Ack, SubmitError> {
            self.0.borrow_mut().submit(result)
        }
    }

    struct DownSink;

    impl ResultSink for DownSink {
        fn submit(&mut self, _result: &GameResult) -> Result<Ack, SubmitError> {
            Err(SubmitError::Unavailable("connection refused".to_string()))
        }
    }

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<Value> {
            None
        }

        fn set(&mut self, _key: &str, _value: Value) -> Result<(), StoreError> {
            Err(StoreError::Io {
                path: "profile.json".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }

        fn remove(&mut self, key: &str) -> Result<(), StoreError> {
            self.set(key, Value::Null)
        }

        fn clear(&mut self) -> Result<(), StoreError> {
            self.set("", Value::Null)
        }
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_words(words_from_slice(&[
            "crane", "slate", "erase", "robot", "floor", "audio", "radio", "cool",
        ]))
    }

    fn two_word_dictionary() -> Dictionary {
        Dictionary::from_words(words_from_slice(&["crane", "slate", "cool"]))
    }

    fn session<'a>(dictionary: &'a Dictionary, sink: impl ResultSink + 'a) -> GameSession<'a> {
        GameSession::new(
            dictionary,
            5,
            6,
            StdRng::seed_from_u64(1),
            sink,
            Profile::new(MemoryStore::new()),
        )
        .unwrap()
    }

    fn type_word(session: &mut GameSession<'_>, word: &str) -> KeyOutcome {
        for c in word.chars() {
            session.press(Key::Letter(c));
        }
        session.press(Key::Enter)
    }

    #[test]
    fn missing_length_is_an_error() {
        let dictionary = dictionary();
        let result = GameSession::new(
            &dictionary,
            8,
            6,
            StdRng::seed_from_u64(1),
            MemorySink::new(),
            Profile::new(MemoryStore::new()),
        );
        assert!(matches!(result, Err(SessionError::NoWords(8))));
    }

    #[test]
    fn secret_comes_from_dictionary() {
        let dictionary = dictionary();
        let session = session(&dictionary, MemorySink::new());
        assert_eq!(session.round().word_length(), 5);
        assert!(dictionary.words(5).contains(session.round().secret()));
    }

    #[test]
    fn short_guess_keeps_letters_and_posts_notice() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, MemorySink::new());

        let outcome = type_word(&mut session, "cra");
        assert!(matches!(
            outcome,
            KeyOutcome::Rejected(GuessError::NotEnoughLetters { .. })
        ));
        assert_eq!(session.input().as_str(), "cra");
        assert_eq!(session.round().remaining(), 6);
        assert_eq!(session.notices().latest().unwrap().text, "Not enough letters!");
    }

    #[test]
    fn sixth_letter_rejected() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, MemorySink::new());
        for c in "crane".chars() {
            assert_eq!(session.press(Key::Letter(c)), KeyOutcome::Edited);
        }
        assert!(matches!(
            session.press(Key::Letter('s')),
            KeyOutcome::Rejected(GuessError::TooManyLetters { .. })
        ));
        assert_eq!(
            session.notices().latest().unwrap().text,
            "Max letters reached!"
        );
    }

    #[test]
    fn unknown_word_rejected() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, MemorySink::new());
        assert_eq!(
            type_word(&mut session, "zzzzz"),
            KeyOutcome::Rejected(GuessError::NotInWordList)
        );
        assert_eq!(session.notices().latest().unwrap().text, "Word not in list!");
    }

    #[test]
    fn delete_edits_buffer() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, MemorySink::new());
        assert_eq!(session.press(Key::Delete), KeyOutcome::Ignored);
        session.press(Key::Letter('c'));
        assert_eq!(session.press(Key::Delete), KeyOutcome::Edited);
        assert!(session.input().is_empty());
    }

    #[test]
    fn winning_submits_result_and_updates_profile() {
        let dictionary = dictionary();
        let sink = Rc::new(RefCell::new(MemorySink::new()));
        let mut session = session(&dictionary, SharedSink(Rc::clone(&sink)));
        let secret = session.round().secret().text().to_string();

        let outcome = type_word(&mut session, &secret);
        let KeyOutcome::Accepted(record) = outcome else {
            panic!("expected accepted guess");
        };
        assert!(record.feedback().is_perfect());
        assert!(session.input().is_empty());
        assert_eq!(session.round().status(), RoundStatus::Won);
        assert_eq!(session.notices().iter().next().unwrap().text, "You won!");

        let submitted = sink.borrow().results().to_vec();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].word, secret);
        assert_eq!(submitted[0].attempts, 1);
        assert!(submitted[0].win);

        assert_eq!(session.profile().wins(), 1);
        assert_eq!(session.profile().xp(), submitted[0].xp);
        assert!(session.last_ack().is_some());
        assert_eq!(session.last_result(), Some(&submitted[0]));
    }

    #[test]
    fn keyboard_tracks_guesses() {
        let dictionary = two_word_dictionary();
        let mut session = session(&dictionary, MemorySink::new());
        let secret = session.round().secret().text().to_string();
        let other = if secret == "crane" { "slate" } else { "crane" };

        session.submit(other).unwrap();
        // CRANE and SLATE share A and E in place
        assert_eq!(session.keyboard().state('a'), Some(LetterVerdict::Exact));
        assert_eq!(session.keyboard().state('e'), Some(LetterVerdict::Exact));
    }

    #[test]
    fn losing_reveals_word_and_keys_are_ignored() {
        let dictionary = two_word_dictionary();
        let mut session = GameSession::new(
            &dictionary,
            5,
            2,
            StdRng::seed_from_u64(3),
            MemorySink::new(),
            Profile::new(MemoryStore::new()),
        )
        .unwrap();
        let secret = session.round().secret().text().to_string();
        let other = if secret == "crane" { "slate" } else { "crane" };

        session.submit(other).unwrap();
        session.submit(other).unwrap();

        assert_eq!(session.round().status(), RoundStatus::Lost);
        let notice = session.notices().latest().unwrap();
        assert_eq!(notice.style, NoticeStyle::Error);
        assert!(notice.text.contains(&secret.to_uppercase()));
        assert_eq!(session.profile().wins(), 0);
        assert_eq!(session.press(Key::Letter('a')), KeyOutcome::Ignored);
        assert_eq!(session.submit(other), Err(GuessError::RoundOver));
    }

    #[test]
    fn sink_failure_is_a_notice_not_a_rollback() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, DownSink);
        let secret = session.round().secret().text().to_string();

        session.submit(&secret).unwrap();

        assert_eq!(session.round().status(), RoundStatus::Won);
        assert!(
            session
                .notices()
                .iter()
                .any(|n| n.text == "Could not submit result")
        );
        assert!(session.last_ack().is_none());
        assert_eq!(session.profile().wins(), 1);
    }

    #[test]
    fn store_failure_is_a_notice_not_a_rollback() {
        let dictionary = dictionary();
        let sink = Rc::new(RefCell::new(MemorySink::new()));
        let mut session = GameSession::new(
            &dictionary,
            5,
            6,
            StdRng::seed_from_u64(1),
            SharedSink(Rc::clone(&sink)),
            Profile::new(ReadOnlyStore),
        )
        .unwrap();
        let secret = session.round().secret().text().to_string();

        session.submit(&secret).unwrap();

        assert_eq!(session.round().status(), RoundStatus::Won);
        let notice = session.notices().latest().unwrap();
        assert_eq!(notice.text, "Could not save stats");
        assert_eq!(notice.style, NoticeStyle::Error);
        assert_eq!(sink.borrow().results().len(), 1);
        assert!(session.last_ack().is_some());
        assert!(session.last_result().is_some_and(|result| result.win));
        assert_eq!(session.profile().wins(), 0);
    }

    #[test]
    fn new_round_resets_state() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, MemorySink::new());
        let secret = session.round().secret().text().to_string();
        session.submit(&secret).unwrap();

        session.new_round().unwrap();
        assert_eq!(session.round().status(), RoundStatus::InProgress);
        assert_eq!(session.round().remaining(), 6);
        assert!(session.keyboard().state(secret.chars().next().unwrap()).is_none());
        assert!(session.last_result().is_none());
    }
}
