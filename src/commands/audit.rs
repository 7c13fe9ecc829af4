//! Dictionary and evaluator audit
//!
//! Evaluates every (secret, guess) pair of one word length and checks the
//! scoring invariants on each result.

use crate::core::{Feedback, LetterVerdict, Word};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Violations kept in the report
const MAX_REPORTED_VIOLATIONS: usize = 20;

/// A pair whose feedback broke an invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub secret: String,
    pub guess: String,
    pub feedback: String,
    pub reason: &'static str,
}

#[derive(Debug, Clone)]
pub struct AuditReport {
    pub word_length: usize,
    pub words: usize,
    pub pairs: usize,
    pub exact: usize,
    pub present: usize,
    pub absent: usize,
    pub perfect: usize,
    pub violation_count: usize,
    pub violations: Vec<Violation>,
    pub duration: Duration,
}

impl AuditReport {
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.violation_count == 0
    }
}

#[derive(Default)]
struct Tally {
    pairs: usize,
    exact: usize,
    present: usize,
    absent: usize,
    perfect: usize,
    violation_count: usize,
    violations: Vec<Violation>,
}

impl Tally {
    fn merge(mut self, other: Self) -> Self {
        self.pairs += other.pairs;
        self.exact += other.exact;
        self.present += other.present;
        self.absent += other.absent;
        self.perfect += other.perfect;
        self.violation_count += other.violation_count;
        let room = MAX_REPORTED_VIOLATIONS.saturating_sub(self.violations.len());
        self.violations.extend(other.violations.into_iter().take(room));
        self
    }
}

/// First invariant `feedback` breaks for this pair, if any
#[must_use]
pub fn check_feedback(secret: &Word, guess: &Word, feedback: &Feedback) -> Option<&'static str> {
    if feedback.len() != secret.len() {
        return Some("verdict count differs from word length");
    }

    if feedback.is_perfect() != (secret == guess) {
        return Some("perfect feedback does not match word equality");
    }

    let mut credited: FxHashMap<u8, usize> = FxHashMap::default();
    for (i, &verdict) in feedback.verdicts().iter().enumerate() {
        let letter = guess.char_at(i);
        let exact = letter == secret.char_at(i);
        if exact != (verdict == LetterVerdict::Exact) {
            return Some("exact verdict does not match position");
        }
        if verdict == LetterVerdict::Present && !secret.has_letter(letter) {
            return Some("present verdict for a letter missing from the secret");
        }
        if verdict != LetterVerdict::Absent {
            *credited.entry(letter).or_default() += 1;
        }
    }

    for (letter, count) in credited {
        if count > secret.positions_of(letter).len() {
            return Some("letter credited more often than it occurs in the secret");
        }
    }

    // An absent letter means every occurrence in the secret was already credited
    for (i, &verdict) in feedback.verdicts().iter().enumerate() {
        let letter = guess.char_at(i);
        if verdict == LetterVerdict::Absent {
            let credited_here = guess
                .positions_of(letter)
                .iter()
                .filter(|&&j| feedback.verdicts()[j] != LetterVerdict::Absent)
                .count();
            if credited_here < secret.positions_of(letter).len() {
                return Some("absent verdict while an occurrence was left uncredited");
            }
        }
    }

    None
}

fn audit_secret(secret: &Word, guesses: &[Word]) -> Tally {
    let mut tally = Tally::default();
    for guess in guesses {
        let feedback = Feedback::evaluate(secret, guess);
        tally.pairs += 1;
        tally.exact += feedback.count(LetterVerdict::Exact);
        tally.present += feedback.count(LetterVerdict::Present);
        tally.absent += feedback.count(LetterVerdict::Absent);
        if feedback.is_perfect() {
            tally.perfect += 1;
        }

        if let Some(reason) = check_feedback(secret, guess, &feedback) {
            tally.violation_count += 1;
            if tally.violations.len() < MAX_REPORTED_VIOLATIONS {
                tally.violations.push(Violation {
                    secret: secret.text().to_string(),
                    guess: guess.text().to_string(),
                    feedback: feedback.to_string(),
                    reason,
                });
            }
        }
    }
    tally
}

/// Audit all pairs of `word_length` words, optionally limited to the first `limit` words
#[must_use]
pub fn run_audit(
    dictionary: &Dictionary,
    word_length: usize,
    limit: Option<usize>,
    show_progress: bool,
) -> AuditReport {
    let words = dictionary.words(word_length);
    let words = &words[..limit.unwrap_or(words.len()).min(words.len())];

    let pb = if show_progress {
        let pb = ProgressBar::new(words.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message(format!("{word_length}-letter secrets"));
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let tally = words
        .par_iter()
        .map(|secret| {
            let tally = audit_secret(secret, words);
            pb.inc(1);
            tally
        })
        .reduce(Tally::default, Tally::merge);
    pb.finish_with_message("Complete!");

    log::info!(
        "audited {} pairs of {word_length}-letter words, {} violations",
        tally.pairs,
        tally.violation_count
    );

    AuditReport {
        word_length,
        words: words.len(),
        pairs: tally.pairs,
        exact: tally.exact,
        present: tally.present,
        absent: tally.absent,
        perfect: tally.perfect,
        violation_count: tally.violation_count,
        violations: tally.violations,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn evaluator_passes_on_small_list() {
        let dictionary = Dictionary::from_words(words_from_slice(&[
            "speed", "erase", "robot", "floor", "crane", "slate", "steel", "sleep",
        ]));
        let report = run_audit(&dictionary, 5, None, false);

        assert_eq!(report.words, 8);
        assert_eq!(report.pairs, 64);
        assert_eq!(report.perfect, 8);
        assert_eq!(report.exact + report.present + report.absent, 64 * 5);
        assert!(report.passed(), "{:?}", report.violations);
    }

    #[test]
    fn limit_restricts_words() {
        let dictionary = Dictionary::embedded();
        let report = run_audit(&dictionary, 4, Some(10), false);
        assert_eq!(report.words, 10);
        assert_eq!(report.pairs, 100);
        assert!(report.passed());
    }

    #[test]
    fn missing_length_audits_nothing() {
        let dictionary = Dictionary::from_words(words_from_slice(&["crane"]));
        let report = run_audit(&dictionary, 8, None, false);
        assert_eq!(report.pairs, 0);
        assert!(report.passed());
    }

    #[test]
    fn check_flags_over_credit() {
        use LetterVerdict::{Absent, Present};
        // Secret CRANE has one E; crediting both E's of EERIE is wrong
        let bogus = Feedback::from_verdicts(vec![Present, Present, Present, Absent, Absent]);
        assert!(check_feedback(&word("crane"), &word("eerie"), &bogus).is_some());
    }

    #[test]
    fn check_flags_missed_credit() {
        // Naive all-absent answer for an anagram
        let bogus = Feedback::from_verdicts(vec![LetterVerdict::Absent; 5]);
        assert_eq!(
            check_feedback(&word("stare"), &word("tears"), &bogus),
            Some("exact verdict does not match position")
        );
        let bogus = Feedback::parse("--GG-").unwrap();
        assert_eq!(
            check_feedback(&word("stare"), &word("tears"), &bogus),
            Some("absent verdict while an occurrence was left uncredited")
        );
    }

    #[test]
    fn check_accepts_real_feedback() {
        let (secret, guess) = (word("speed"), word("erase"));
        let feedback = Feedback::evaluate(&secret, &guess);
        assert_eq!(check_feedback(&secret, &guess, &feedback), None);
    }
}
