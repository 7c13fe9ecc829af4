//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));

/// Embedded words of the given length, empty for unsupported lengths
#[must_use]
pub const fn words_of_length(length: usize) -> &'static [&'static str] {
    match length {
        4 => WORDS_4,
        5 => WORDS_5,
        6 => WORDS_6,
        7 => WORDS_7,
        8 => WORDS_8,
        _ => &[],
    }
}
