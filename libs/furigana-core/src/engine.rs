//! Reading transform engine.
//!
//! Every transform runs the same scan and differs only in the template used to
//! rewrite each annotation. Audio references share the bracket syntax, so they
//! are passed through before any template is applied.

use crate::error::Result;
use crate::reading::{self, Annotation};
use crate::template::Template;
use crate::types::{EngineConfig, MarkupStyle, Transform};

/// Rewrites `word[reading]` annotations in field text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingEngine {
    style: MarkupStyle,
}

impl Default for ReadingEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ReadingEngine {
    /// Create an engine, fixing the markup style for its lifetime.
    pub fn new(config: EngineConfig) -> Self {
        reading::init_pattern();
        let style = config.markup_style();
        tracing::debug!("Reading engine initialised with {:?} markup", style);
        Self { style }
    }

    pub fn style(&self) -> MarkupStyle {
        self.style
    }

    /// Apply `transform` to every annotation in `text`.
    pub fn apply(&self, transform: Transform, text: &str) -> String {
        let template = Template::lookup(transform, self.style);
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for annotation in reading::annotations(text) {
            out.push_str(&text[last..annotation.span.start]);
            render(&annotation, template, &mut out);
            last = annotation.span.end;
        }

        out.push_str(&text[last..]);
        out
    }

    /// Keep only the words.
    pub fn kanji(&self, text: &str) -> String {
        self.apply(Transform::Kanji, text)
    }

    /// Keep only the readings.
    pub fn kana(&self, text: &str) -> String {
        self.apply(Transform::Kana, text)
    }

    /// Render readings above their words.
    pub fn furigana(&self, text: &str) -> String {
        self.apply(Transform::Furigana, text)
    }

    /// Render words above their readings.
    pub fn furikanji(&self, text: &str) -> String {
        self.apply(Transform::Furikanji, text)
    }

    /// Run a filter by the name a card template uses for it.
    ///
    /// Extra arguments from the host's filter call are accepted and ignored.
    pub fn run_filter(&self, name: &str, text: &str, _args: &[&str]) -> Result<String> {
        let transform = Transform::from_filter_name(name).map_err(|e| {
            tracing::warn!("Rejected filter {}", name);
            e
        })?;
        tracing::trace!("Running filter {} as {}", name, transform);
        Ok(self.apply(transform, text))
    }
}

/// Audio guard: leave `[sound:...]` references as written, expand everything else.
fn render(annotation: &Annotation<'_>, template: Template, out: &mut String) {
    if annotation.is_audio() {
        tracing::trace!("Leaving audio reference {} untouched", annotation.reading);
        out.push_str(annotation.text);
    } else {
        template.expand_into(annotation.word, annotation.reading, out);
    }
}
