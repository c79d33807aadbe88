//! Emoji removal pass.
//!
//! The filter is approximate: it covers a fixed table of code point
//! intervals and nothing else. Newer supplemental symbol blocks and the
//! zero width joiner fall outside it and are left alone.

/// Inclusive code point intervals treated as emoji.
///
/// The last interval also spans CJK, kana, Hangul and other non-emoji
/// blocks, so text in those scripts is removed along with the emoji.
pub const EMOJI_RANGES: [(char, char); 6] = [
    ('\u{1F600}', '\u{1F64F}'), // emoticons
    ('\u{1F300}', '\u{1F5FF}'), // symbols & pictographs
    ('\u{1F680}', '\u{1F6FF}'), // transport & map symbols
    ('\u{1F1E0}', '\u{1F1FF}'), // regional indicators (flags)
    ('\u{2702}', '\u{27B0}'),
    ('\u{24C2}', '\u{1F251}'),
];

/// Result of [`strip_emoji`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    pub text: String,
    /// Number of characters removed.
    pub removed: usize,
}

pub fn is_emoji(c: char) -> bool {
    EMOJI_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&c))
}

/// Delete every character that falls in [`EMOJI_RANGES`].
///
/// Dropping each in-range character is the same as dropping each maximal
/// run of them. Surrounding text, whitespace included, is kept as is.
pub fn strip_emoji(text: &str) -> Stripped {
    let mut out = String::with_capacity(text.len());
    let mut removed = 0;

    for c in text.chars() {
        if is_emoji(c) {
            removed += 1;
        } else {
            out.push(c);
        }
    }

    Stripped { text: out, removed }
}
