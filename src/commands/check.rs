//! One-shot guess evaluation
//!
//! Scores a single guess against a given secret through the same validation path
//! as a real round.

use crate::core::Word;
use crate::game::{GuessRecord, Round};
use crate::wordlists::{Dictionary, WordValidator};

/// Validator that accepts any well-formed word of the right length
struct AnyWord;

impl WordValidator for AnyWord {
    fn is_valid_word(&self, word: &str, length: usize) -> bool {
        word.len() == length
    }
}

/// Evaluate `guess` against `secret`
///
/// With `allow_any`, the guess only has to be a well-formed word of the secret's
/// length; otherwise it must also be in the dictionary.
///
/// # Errors
///
/// Returns an error if the secret is not a valid word or the guess is rejected.
///
/// # Examples
/// ```
/// use wordle_plus::commands::check_guess;
/// use wordle_plus::wordlists::Dictionary;
///
/// let dictionary = Dictionary::embedded();
/// let record = check_guess(&dictionary, "speed", "erase", false).unwrap();
/// assert_eq!(record.feedback().to_string(), "Y--YY");
///
/// assert!(check_guess(&dictionary, "speed", "eras", false).is_err());
/// ```
pub fn check_guess(
    dictionary: &Dictionary,
    secret: &str,
    guess: &str,
    allow_any: bool,
) -> Result<GuessRecord, String> {
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret word: {e}"))?;
    let mut round = Round::new(secret);

    let record = if allow_any {
        round.submit(guess, &AnyWord)
    } else {
        round.submit(guess, dictionary)
    };

    record.cloned().map_err(|e| e.to_string())
}
