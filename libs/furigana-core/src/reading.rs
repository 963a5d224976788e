//! Reading annotation matcher.
//!
//! # Format
//! ```text
//! 今日[きょう]は 猫[ねこ]と犬[いぬ]
//! ```
//!
//! A word is any run of characters other than a space or `>`, directly
//! followed by its reading in square brackets. A single space in front of the
//! word belongs to the annotation, so kanji-only output of ` 今日[きょう]`
//! is `今日` with no gap.

use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;

/// Reading prefix used by audio references such as `[sound:foo.mp3]`.
pub const AUDIO_PREFIX: &str = "sound:";

// Word and reading are both lazy so the reading stops at the first `]`.
// A reading never crosses a line terminator (LF, CR, NEL, LS, PS).
static READING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" ?([^ >]+?)\[([^\n\r\x{85}\x{2028}\x{2029}]+?)\]")
        .expect("reading annotation pattern must compile")
});

/// Compile the shared pattern now instead of on first use.
pub(crate) fn init_pattern() {
    LazyLock::force(&READING);
}

/// One `word[reading]` occurrence located in a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation<'a> {
    /// Matched text, including the optional leading space.
    pub text: &'a str,
    pub word: &'a str,
    pub reading: &'a str,
    /// Byte range of `text` in the scanned input.
    pub span: Range<usize>,
}

impl<'a> Annotation<'a> {
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        let whole = caps.get(0)?;
        Some(Self {
            text: whole.as_str(),
            word: caps.get(1)?.as_str(),
            reading: caps.get(2)?.as_str(),
            span: whole.range(),
        })
    }

    /// Whether this is an audio reference that must be left untouched.
    pub fn is_audio(&self) -> bool {
        self.reading.starts_with(AUDIO_PREFIX)
    }

    /// Whether the leading space was consumed as part of the match.
    pub fn has_leading_space(&self) -> bool {
        self.text.starts_with(' ')
    }
}

/// Scan `text` left to right for reading annotations.
pub fn annotations(text: &str) -> impl Iterator<Item = Annotation<'_>> {
    READING
        .captures_iter(text)
        .filter_map(|caps| Annotation::from_captures(&caps))
}

/// Whether `text` contains at least one reading annotation.
pub fn contains_annotation(text: &str) -> bool {
    READING.is_match(text)
}
