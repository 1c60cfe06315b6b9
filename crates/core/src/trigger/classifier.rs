use std::collections::BTreeSet;

use super::template::{self, IndexPicker, ThreadRngPicker};
use crate::lexicon::{Lexicon, LexiconCategory};
use crate::types::{Decision, MatchCategory, TriggerType};

/// Base confidence before per-word increments.
const KEYWORD_BASE_CONFIDENCE: f32 = 0.3;
/// Added per surviving emotion/need word.
const KEYWORD_WORD_STEP: f32 = 0.2;
/// Ceiling of the word-count component.
const KEYWORD_COUNT_CAP: f32 = 0.9;
/// Added per intensity/context phrase present in the input.
const MODIFIER_STEP: f32 = 0.1;
/// Absolute ceiling for keyword confidence.
const CONFIDENCE_CAP: f32 = 0.95;
/// Fixed confidence for physical-sensation triggers.
const PHYSICAL_CONFIDENCE: f32 = 0.4;

/// Lexicon scan order for keyword matching.
const KEYWORD_SCAN: [(LexiconCategory, MatchCategory); 4] = [
    (LexiconCategory::Negative, MatchCategory::EmotionNegative),
    (LexiconCategory::Positive, MatchCategory::EmotionPositive),
    (LexiconCategory::Neutral, MatchCategory::EmotionNeutral),
    (LexiconCategory::Need, MatchCategory::Need),
];

/// Rule-based emotional-intent detector.
///
/// Holds only read-only lexicons, so a single instance can be shared across
/// threads (`Arc<TriggerClassifier>`) and reused for every call.
#[derive(Debug, Clone, Default)]
pub struct TriggerClassifier {
    lexicon: Lexicon,
}

impl TriggerClassifier {
    /// Classifier over the builtin lexicons.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Classify a single utterance. Total: any string yields a decision.
    ///
    /// Priority (first match wins): open command, close command,
    /// emotion/need keywords after negation filtering, physical sensation.
    pub fn classify(&self, text: &str) -> Decision {
        if let Some(cmd) = self.lexicon.find_in(LexiconCategory::OpenCommand, text).next() {
            tracing::debug!(command = cmd, "explicit open");
            return Decision::explicit_open(cmd, text);
        }
        if let Some(cmd) = self.lexicon.find_in(LexiconCategory::CloseCommand, text).next() {
            tracing::debug!(command = cmd, "explicit close");
            return Decision::explicit_close(cmd, text);
        }

        let survivors: Vec<(&str, MatchCategory)> = KEYWORD_SCAN
            .iter()
            .flat_map(|&(lexicon_cat, tag)| {
                self.lexicon.find_in(lexicon_cat, text).map(move |w| (w, tag))
            })
            .filter(|(word, _)| !self.is_negated(text, word))
            .collect();

        if !survivors.is_empty() {
            let confidence = self.keyword_confidence(text, survivors.len());
            let categories: BTreeSet<MatchCategory> = survivors.iter().map(|(_, c)| *c).collect();
            let matched_words: Vec<String> = survivors.iter().map(|(w, _)| (*w).to_owned()).collect();
            tracing::debug!(
                words = ?matched_words,
                ?categories,
                confidence,
                "keyword trigger"
            );
            return Decision {
                triggered: true,
                trigger_type: TriggerType::Keyword,
                matched_words,
                categories,
                confidence,
                raw_input: text.to_owned(),
            };
        }

        // Physical words are not negation-filtered.
        let physical: Vec<String> = self
            .lexicon
            .find_in(LexiconCategory::Physical, text)
            .map(str::to_owned)
            .collect();
        if !physical.is_empty() {
            tracing::debug!(words = ?physical, "physical sensation trigger");
            return Decision {
                triggered: true,
                trigger_type: TriggerType::PhysicalSensation,
                matched_words: physical,
                categories: BTreeSet::new(),
                confidence: PHYSICAL_CONFIDENCE,
                raw_input: text.to_owned(),
            };
        }

        Decision::none(text)
    }

    /// Render a response template for `decision` with a uniformly random pick.
    pub fn render(&self, decision: &Decision) -> String {
        template::render_with(decision, &ThreadRngPicker)
    }

    /// Render with an injected index picker.
    pub fn render_with(&self, decision: &Decision, picker: &dyn IndexPicker) -> String {
        template::render_with(decision, picker)
    }

    /// A negation marker anywhere before the word's first occurrence
    /// suppresses it, not only an adjacent one.
    fn is_negated(&self, text: &str, word: &str) -> bool {
        let Some(pos) = text.find(word) else {
            return false;
        };
        let preceding = &text[..pos];
        let negated = self
            .lexicon
            .phrases(LexiconCategory::Negation)
            .iter()
            .any(|neg| preceding.contains(neg.as_str()));
        if negated {
            tracing::debug!(word, "suppressed by negation");
        }
        negated
    }

    fn keyword_confidence(&self, text: &str, matched: usize) -> f32 {
        let base = (KEYWORD_BASE_CONFIDENCE + KEYWORD_WORD_STEP * matched as f32).min(KEYWORD_COUNT_CAP);
        let modifiers = self.lexicon.find_in(LexiconCategory::Intensity, text).count()
            + self.lexicon.find_in(LexiconCategory::Context, text).count();
        (0..modifiers).fold(base, |c, _| (c + MODIFIER_STEP).min(CONFIDENCE_CAP))
    }
}
