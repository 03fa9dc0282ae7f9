use serde::{Deserialize, Serialize};

/// Average silent reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Metrics derived from the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub words: usize,
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub lines: usize,
    pub reading_time_minutes: usize,
}

/// One stat display on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    Words,
    Characters,
    CharactersNoSpaces,
    Lines,
    ReadingTime,
}

impl StatField {
    pub fn all() -> &'static [StatField] {
        &[
            Self::Words,
            Self::Characters,
            Self::CharactersNoSpaces,
            Self::Lines,
            Self::ReadingTime,
        ]
    }
}

impl Stats {
    pub fn compute(text: &str) -> Self {
        let words = text.split_whitespace().count();
        Self {
            words,
            characters: text.chars().count(),
            characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
            // A trailing newline opens one more (empty) line
            lines: text.split('\n').count(),
            reading_time_minutes: words.div_ceil(WORDS_PER_MINUTE),
        }
    }

    /// Display text for one field. Zero words reads as "0 min read".
    pub fn display(&self, field: StatField) -> String {
        match field {
            StatField::Words => format!("{} words", self.words),
            StatField::Characters => format!("{} chars", self.characters),
            StatField::CharactersNoSpaces => {
                format!("{} chars (no spaces)", self.characters_no_spaces)
            }
            StatField::Lines => format!("{} lines", self.lines),
            StatField::ReadingTime => format!("{} min read", self.reading_time_minutes),
        }
    }
}
