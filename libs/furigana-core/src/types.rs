//! Core types for reading transforms.

use crate::error::{FilterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix hosts put in front of filter names in card templates.
const DIRECTIVE_PREFIX: &str = "fmod_";

/// Output form produced for each `word[reading]` annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    /// Keep the word, drop the reading.
    Kanji,
    /// Keep the reading, drop the word.
    Kana,
    /// Word as base text with the reading above it.
    Furigana,
    /// Reading as base text with the word above it.
    Furikanji,
}

impl Transform {
    /// Every transform, in registration order.
    pub const ALL: [Transform; 4] = [
        Transform::Kanji,
        Transform::Kana,
        Transform::Furigana,
        Transform::Furikanji,
    ];

    /// Name of the filter as used in card templates, without the directive prefix.
    pub fn filter_name(self) -> &'static str {
        match self {
            Self::Kanji => "kanji",
            Self::Kana => "kana",
            Self::Furigana => "furigana",
            Self::Furikanji => "furikanji",
        }
    }

    /// Resolve a filter name, with or without the `fmod_` directive prefix.
    pub fn from_filter_name(name: &str) -> Result<Self> {
        let bare = name.strip_prefix(DIRECTIVE_PREFIX).unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|t| t.filter_name() == bare)
            .ok_or_else(|| FilterError::UnknownFilter {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.filter_name())
    }
}

impl FromStr for Transform {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_filter_name(s)
    }
}

/// Markup family used for the furigana and furikanji transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkupStyle {
    /// `<ruby>` with `<rb>` and `<rt>` children.
    Ruby,
    /// Nested `<span>` containers positioned by the `legacy_ruby_*` CSS classes.
    Legacy,
}

impl Default for MarkupStyle {
    fn default() -> Self {
        Self::Ruby
    }
}

/// Engine configuration supplied by the host at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Whether the rendering target understands ruby markup.
    pub use_rich_ruby_markup: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            use_rich_ruby_markup: true,
        }
    }
}

impl EngineConfig {
    /// Markup family selected by this configuration.
    pub fn markup_style(&self) -> MarkupStyle {
        if self.use_rich_ruby_markup {
            MarkupStyle::Ruby
        } else {
            MarkupStyle::Legacy
        }
    }
}

impl From<MarkupStyle> for EngineConfig {
    fn from(style: MarkupStyle) -> Self {
        Self {
            use_rich_ruby_markup: style == MarkupStyle::Ruby,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_names_round_trip() {
        for transform in Transform::ALL {
            assert_eq!(
                Transform::from_filter_name(transform.filter_name()),
                Ok(transform)
            );
        }
    }

    #[test]
    fn accepts_directive_prefix() {
        assert_eq!(Transform::from_filter_name("fmod_kana"), Ok(Transform::Kana));
        assert_eq!("fmod_furikanji".parse::<Transform>(), Ok(Transform::Furikanji));
    }

    #[test]
    fn rejects_unknown_filter() {
        let result = Transform::from_filter_name("fmod_romaji");
        assert_eq!(
            result,
            Err(FilterError::UnknownFilter {
                name: "fmod_romaji".to_string()
            })
        );
    }

    #[test]
    fn filter_names_are_case_sensitive() {
        assert!(Transform::from_filter_name("Kanji").is_err());
    }

    #[test]
    fn default_config_uses_ruby() {
        assert_eq!(EngineConfig::default().markup_style(), MarkupStyle::Ruby);
        let legacy = EngineConfig {
            use_rich_ruby_markup: false,
        };
        assert_eq!(legacy.markup_style(), MarkupStyle::Legacy);
    }

    #[test]
    fn config_from_style() {
        assert!(EngineConfig::from(MarkupStyle::Ruby).use_rich_ruby_markup);
        assert!(!EngineConfig::from(MarkupStyle::Legacy).use_rich_ruby_markup);
    }
}
