use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification outcome category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    /// Input contained an explicit "turn warm mode on" phrase.
    ExplicitOpen,
    /// Input contained an explicit "turn warm mode off" phrase. Force mode off.
    ExplicitClose,
    /// Emotion or need words survived negation filtering.
    Keyword,
    /// Only physical-sensation words matched.
    PhysicalSensation,
    /// No opinion; callers leave their mode flag unchanged.
    None,
}

impl TriggerType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExplicitOpen => "explicit_open",
            Self::ExplicitClose => "explicit_close",
            Self::Keyword => "keyword",
            Self::PhysicalSensation => "physical_sensation",
            Self::None => "none",
        }
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source tag of a keyword match.
/// Ordering follows the lexicon scan order, so a `BTreeSet` iterates
/// negative → positive → neutral → need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchCategory {
    EmotionNegative,
    EmotionPositive,
    EmotionNeutral,
    Need,
}

impl MatchCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmotionNegative => "emotion_negative",
            Self::EmotionPositive => "emotion_positive",
            Self::EmotionNeutral => "emotion_neutral",
            Self::Need => "need",
        }
    }
}

impl fmt::Display for MatchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Decision ────────────────────────────────────────────────────

/// Result of classifying a single utterance.
///
/// Invariants upheld by the classifier:
/// - explicit open/close: exactly one matched word (the command), no categories
/// - `TriggerType::None`: not triggered, confidence 0.0, no matched words
/// - confidence ∈ [0, 0.95] for everything except an explicit open (1.0)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub triggered: bool,
    pub trigger_type: TriggerType,
    pub matched_words: Vec<String>,
    pub categories: BTreeSet<MatchCategory>,
    pub confidence: f32,
    /// Verbatim input, kept for downstream logging only.
    pub raw_input: String,
}

impl Decision {
    pub fn explicit_open(command: &str, raw_input: &str) -> Self {
        Self {
            triggered: true,
            trigger_type: TriggerType::ExplicitOpen,
            matched_words: vec![command.to_owned()],
            categories: BTreeSet::new(),
            confidence: 1.0,
            raw_input: raw_input.to_owned(),
        }
    }

    pub fn explicit_close(command: &str, raw_input: &str) -> Self {
        Self {
            triggered: false,
            trigger_type: TriggerType::ExplicitClose,
            matched_words: vec![command.to_owned()],
            categories: BTreeSet::new(),
            confidence: 0.0,
            raw_input: raw_input.to_owned(),
        }
    }

    pub fn none(raw_input: &str) -> Self {
        Self {
            triggered: false,
            trigger_type: TriggerType::None,
            matched_words: Vec::new(),
            categories: BTreeSet::new(),
            confidence: 0.0,
            raw_input: raw_input.to_owned(),
        }
    }

    pub fn has_category(&self, category: MatchCategory) -> bool {
        self.categories.contains(&category)
    }

    /// First matched word, if any.
    pub fn first_word(&self) -> Option<&str> {
        self.matched_words.first().map(String::as_str)
    }

    /// True for the explicit open/close control signals.
    pub fn is_command(&self) -> bool {
        matches!(
            self.trigger_type,
            TriggerType::ExplicitOpen | TriggerType::ExplicitClose
        )
    }
}
