//! Replacement templates for each transform and markup style.

use crate::types::{MarkupStyle, Transform};

/// Piece of a replacement template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Literal(&'static str),
    Word,
    Reading,
}

/// Fixed replacement with word and reading placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    parts: &'static [Part],
}

use Part::{Literal, Reading, Word};

const WORD_ONLY: Template = Template { parts: &[Word] };

const READING_ONLY: Template = Template { parts: &[Reading] };

const FURIGANA_RUBY: Template = Template {
    parts: &[
        Literal("<ruby class='furigana'><rb>"),
        Word,
        Literal("</rb><rt>"),
        Reading,
        Literal("</rt></ruby>"),
    ],
};

const FURIKANJI_RUBY: Template = Template {
    parts: &[
        Literal("<ruby class='furikanji'><rb>"),
        Reading,
        Literal("</rb><rt>"),
        Word,
        Literal("</rt></ruby>"),
    ],
};

// Without ruby support the annotation is a nested span lifted above the base
// text by the legacy_ruby_rt rule in the card stylesheet.
const FURIGANA_LEGACY: Template = Template {
    parts: &[
        Literal("<span class='furigana legacy_ruby_rb'><span class='legacy_ruby_rt'>"),
        Reading,
        Literal("</span>"),
        Word,
        Literal("</span>"),
    ],
};

const FURIKANJI_LEGACY: Template = Template {
    parts: &[
        Literal("<span class='furikanji legacy_ruby_rb'><span class='legacy_ruby_rt'>"),
        Word,
        Literal("</span>"),
        Reading,
        Literal("</span>"),
    ],
};

impl Template {
    /// Look up the template a transform uses under the given markup style.
    pub fn lookup(transform: Transform, style: MarkupStyle) -> Self {
        match (transform, style) {
            (Transform::Kanji, _) => WORD_ONLY,
            (Transform::Kana, _) => READING_ONLY,
            (Transform::Furigana, MarkupStyle::Ruby) => FURIGANA_RUBY,
            (Transform::Furigana, MarkupStyle::Legacy) => FURIGANA_LEGACY,
            (Transform::Furikanji, MarkupStyle::Ruby) => FURIKANJI_RUBY,
            (Transform::Furikanji, MarkupStyle::Legacy) => FURIKANJI_LEGACY,
        }
    }

    pub fn parts(&self) -> &'static [Part] {
        self.parts
    }

    /// Append the expansion of this template to `out`.
    pub fn expand_into(&self, word: &str, reading: &str, out: &mut String) {
        for part in self.parts {
            match part {
                Literal(text) => out.push_str(text),
                Word => out.push_str(word),
                Reading => out.push_str(reading),
            }
        }
    }

    /// Expand this template into a new string.
    pub fn expand(&self, word: &str, reading: &str) -> String {
        let mut out = String::new();
        self.expand_into(word, reading, &mut out);
        out
    }
}
