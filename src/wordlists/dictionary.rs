//! Accepted-word dictionary
//!
//! Groups words by length for guess validation and secret selection.

use super::{embedded, loader};
use crate::core::{WORD_LENGTHS, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};

/// Dictionary lookup used to validate guesses before evaluation
pub trait WordValidator {
    /// Whether `word` is an accepted word of exactly `length` letters
    fn is_valid_word(&self, word: &str, length: usize) -> bool;
}

#[derive(Debug, Default, Clone)]
struct Bucket {
    words: Vec<Word>,
    lookup: FxHashSet<String>,
}

/// Words grouped by length
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    buckets: FxHashMap<usize, Bucket>,
}

impl Dictionary {
    /// Dictionary built from the word lists embedded at build time
    ///
    /// # Examples
    /// ```
    /// use wordle_plus::wordlists::{Dictionary, WordValidator};
    ///
    /// let dictionary = Dictionary::embedded();
    /// assert!(dictionary.is_valid_word("crane", 5));
    /// assert!(!dictionary.is_valid_word("crane", 6));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(
            WORD_LENGTHS.flat_map(|length| loader::words_from_slice(embedded::words_of_length(length))),
        )
    }

    /// Build a dictionary from arbitrary words, dropping duplicates
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut buckets: FxHashMap<usize, Bucket> = FxHashMap::default();
        for word in words {
            let bucket = buckets.entry(word.len()).or_default();
            if bucket.lookup.insert(word.text().to_string()) {
                bucket.words.push(word);
            }
        }
        Self { buckets }
    }

    /// All words of the given length, in insertion order
    #[must_use]
    pub fn words(&self, length: usize) -> &[Word] {
        self.buckets
            .get(&length)
            .map_or(&[], |bucket| bucket.words.as_slice())
    }

    /// Lengths that have at least one word, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self
            .buckets
            .iter()
            .filter(|(_, bucket)| !bucket.words.is_empty())
            .map(|(&length, _)| length)
            .collect();
        lengths.sort_unstable();
        lengths
    }

    /// Total number of words across all lengths
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(|bucket| bucket.words.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pick a random word of the given length
    ///
    /// Returns `None` when the dictionary has no words of that length.
    pub fn random_word<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<&Word> {
        self.words(length).choose(rng)
    }
}

impl WordValidator for Dictionary {
    fn is_valid_word(&self, word: &str, length: usize) -> bool {
        word.len() == length
            && self
                .buckets
                .get(&length)
                .is_some_and(|bucket| bucket.lookup.contains(&word.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small() -> Dictionary {
        Dictionary::from_words(loader::words_from_slice(&[
            "crane", "slate", "crane", "cool", "secret",
        ]))
    }

    #[test]
    fn from_words_groups_by_length_and_dedupes() {
        let dictionary = small();
        assert_eq!(dictionary.words(5).len(), 2);
        assert_eq!(dictionary.words(4).len(), 1);
        assert_eq!(dictionary.words(6).len(), 1);
        assert!(dictionary.words(7).is_empty());
        assert_eq!(dictionary.len(), 4);
        assert_eq!(dictionary.lengths(), vec![4, 5, 6]);
    }

    #[test]
    fn validation_checks_length_and_membership() {
        let dictionary = small();
        assert!(dictionary.is_valid_word("crane", 5));
        assert!(dictionary.is_valid_word("CRANE", 5));
        assert!(!dictionary.is_valid_word("crane", 4));
        assert!(!dictionary.is_valid_word("zzzzz", 5));
        assert!(!dictionary.is_valid_word("", 5));
    }

    #[test]
    fn random_word_has_requested_length() {
        let dictionary = Dictionary::embedded();
        let mut rng = StdRng::seed_from_u64(7);
        for length in WORD_LENGTHS {
            let word = dictionary.random_word(length, &mut rng).unwrap();
            assert_eq!(word.len(), length);
            assert!(dictionary.is_valid_word(word.text(), length));
        }
    }

    #[test]
    fn random_word_missing_length() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(small().random_word(8, &mut rng).is_none());
    }

    #[test]
    fn embedded_covers_every_supported_length() {
        let dictionary = Dictionary::embedded();
        assert_eq!(dictionary.lengths(), WORD_LENGTHS.collect::<Vec<_>>());
    }
}
