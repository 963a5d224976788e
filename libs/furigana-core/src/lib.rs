//! Reading annotation filters for flashcard field text.
//!
//! Provides:
//! - Matcher for the inline `word[reading]` syntax
//! - Kanji, kana, furigana and furikanji transforms
//! - Ruby and legacy span markup templates
//! - Audio references (`[sound:...]`) are never rewritten

pub mod engine;
pub mod error;
pub mod reading;
pub mod template;
pub mod types;

pub use engine::ReadingEngine;
pub use error::{FilterError, Result};
pub use reading::{annotations, contains_annotation, Annotation, AUDIO_PREFIX};
pub use template::{Part, Template};
pub use types::{EngineConfig, MarkupStyle, Transform};
