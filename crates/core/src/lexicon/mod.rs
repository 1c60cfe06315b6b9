//! Static phrase lexicons used for substring matching.
//!
//! A [`Lexicon`] is built once and never mutated afterwards. Content comes from
//! the builtin tables, optionally replaced per category by `<category>.txt`
//! files in an override directory (one phrase per line, `#` comments).

mod builtin;

use std::path::Path;

use crate::error::WarmError;

/// Semantic category of a phrase list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexiconCategory {
    Negative,
    Positive,
    Neutral,
    Need,
    Intensity,
    Physical,
    Context,
    Negation,
    OpenCommand,
    CloseCommand,
}

impl LexiconCategory {
    pub const ALL: [LexiconCategory; 10] = [
        Self::Negative,
        Self::Positive,
        Self::Neutral,
        Self::Need,
        Self::Intensity,
        Self::Physical,
        Self::Context,
        Self::Negation,
        Self::OpenCommand,
        Self::CloseCommand,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Need => "need",
            Self::Intensity => "intensity",
            Self::Physical => "physical",
            Self::Context => "context",
            Self::Negation => "negation",
            Self::OpenCommand => "open_command",
            Self::CloseCommand => "close_command",
        }
    }

    fn builtin(self) -> &'static [&'static str] {
        match self {
            Self::Negative => builtin::NEGATIVE,
            Self::Positive => builtin::POSITIVE,
            Self::Neutral => builtin::NEUTRAL,
            Self::Need => builtin::NEED,
            Self::Intensity => builtin::INTENSITY,
            Self::Physical => builtin::PHYSICAL,
            Self::Context => builtin::CONTEXT,
            Self::Negation => builtin::NEGATION,
            Self::OpenCommand => builtin::OPEN_COMMAND,
            Self::CloseCommand => builtin::CLOSE_COMMAND,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Immutable mapping from category to an ordered, duplicate-free phrase list.
#[derive(Debug, Clone)]
pub struct Lexicon {
    tables: [Vec<String>; 10],
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// The hardcoded tables.
    pub fn builtin() -> Self {
        let tables = LexiconCategory::ALL.map(|c| dedup(c.builtin().iter().copied()));
        Self { tables }
    }

    /// Builtin tables with every category that has a `<dir>/<category>.txt`
    /// file replaced by that file's phrases.
    pub fn with_overrides(dir: impl AsRef<Path>) -> Result<Self, WarmError> {
        let dir = dir.as_ref();
        let mut lexicon = Self::builtin();
        for category in LexiconCategory::ALL {
            let path = dir.join(format!("{}.txt", category.as_str()));
            let text = match std::fs::read_to_string(&path) {
                Ok(text) => text,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(source) => return Err(WarmError::Io { path, source }),
            };
            let phrases = Self::parse_list(&text);
            if phrases.is_empty() {
                return Err(WarmError::EmptyCategory {
                    category: category.as_str(),
                });
            }
            tracing::debug!(
                category = category.as_str(),
                count = phrases.len(),
                "lexicon override loaded"
            );
            lexicon.tables[category.index()] = phrases;
        }
        Ok(lexicon)
    }

    /// Parse the one-phrase-per-line list format.
    /// Blank lines and `#` comments are skipped; duplicates keep the first.
    pub fn parse_list(text: &str) -> Vec<String> {
        dedup(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn phrases(&self, category: LexiconCategory) -> &[String] {
        &self.tables[category.index()]
    }

    /// Phrases of `category` occurring anywhere in `text`, in lexicon order.
    pub fn find_in<'a>(
        &'a self,
        category: LexiconCategory,
        text: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.phrases(category)
            .iter()
            .map(String::as_str)
            .filter(move |p| text.contains(*p))
    }
}

fn dedup<'a>(phrases: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for phrase in phrases {
        if !out.iter().any(|p| p == phrase) {
            out.push(phrase.to_owned());
        }
    }
    out
}
