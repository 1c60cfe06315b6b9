//! Caller-side warm session.
//!
//! The classifier only reports intent; the session owns the warm-mode flag,
//! applies open/close commands to it and keeps a bounded per-user emotion
//! memory of the turns processed while warm mode was on.

mod emotion_memory;

pub use emotion_memory::{EmotionMemory, EmotionSummary, MemoryEntry};

use std::sync::Arc;

use chrono::Utc;

use crate::config::WarmCfg;
use crate::trigger::{IndexPicker, TriggerClassifier};
use crate::types::{Decision, TriggerType};

const CLOSE_ACK: &str =
    "✅ 好的，情感模式已关闭。需要的时候随时说'开启情感模式'或使用情感词触发哦！😊";
const FALLBACK_PREFIX: &str = "我理解你的感受...🤗 ";
const SENTENCE_END: char = '。';

/// What the caller should do with the turn.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Reply with this text instead of a normal response.
    Respond(String),
    /// Produce a normal response, then pass it through `enhance_response`.
    EnhanceResponse,
    /// Warm mode is off; leave the response alone.
    PassThrough,
}

/// Outcome of processing one user message.
#[derive(Debug, Clone)]
pub struct Processed {
    pub action: SessionAction,
    /// Warm mode after this turn.
    pub warm_mode: bool,
    pub decision: Decision,
}

/// Warm-mode state machine over a shared classifier.
#[derive(Debug)]
pub struct WarmSession {
    classifier: Arc<TriggerClassifier>,
    warm_mode: bool,
    auto_enhance: bool,
    recent_window: usize,
    memory: EmotionMemory,
}

impl WarmSession {
    pub fn new(classifier: Arc<TriggerClassifier>, cfg: &WarmCfg) -> Self {
        Self {
            classifier,
            warm_mode: cfg.default_warm_mode,
            auto_enhance: cfg.auto_enhance,
            recent_window: cfg.recent_window,
            memory: EmotionMemory::new(cfg.history_cap),
        }
    }

    pub fn warm_mode(&self) -> bool {
        self.warm_mode
    }

    pub fn set_warm_mode(&mut self, on: bool) {
        if self.warm_mode != on {
            tracing::info!(warm_mode = on, "warm mode set by caller");
        }
        self.warm_mode = on;
    }

    pub fn classifier(&self) -> &TriggerClassifier {
        &self.classifier
    }

    pub fn memory(&self) -> &EmotionMemory {
        &self.memory
    }

    /// Classify `text` and apply the result to the warm-mode flag.
    pub fn process_message(&mut self, user_id: &str, text: &str) -> Processed {
        let decision = self.classifier.classify(text);

        match decision.trigger_type {
            TriggerType::ExplicitClose => {
                if self.warm_mode {
                    tracing::info!(user_id, "warm mode closed by command");
                }
                self.warm_mode = false;
                return Processed {
                    action: SessionAction::Respond(CLOSE_ACK.to_owned()),
                    warm_mode: false,
                    decision,
                };
            }
            TriggerType::ExplicitOpen => {
                if !self.warm_mode {
                    tracing::info!(user_id, "warm mode opened by command");
                }
                self.warm_mode = true;
                let welcome = self.classifier.render(&decision);
                return Processed {
                    action: SessionAction::Respond(welcome),
                    warm_mode: true,
                    decision,
                };
            }
            _ => {}
        }

        if decision.triggered && !self.warm_mode && self.auto_enhance {
            tracing::info!(
                user_id,
                trigger = %decision.trigger_type,
                confidence = decision.confidence,
                "warm mode opened by trigger"
            );
            self.warm_mode = true;
        }

        if self.warm_mode {
            self.memory.record(
                user_id,
                MemoryEntry {
                    timestamp: Utc::now(),
                    user_input: text.to_owned(),
                    primary_emotion: primary_emotion(&decision),
                    intensity: decision.confidence,
                },
            );
        }

        let action = if self.warm_mode {
            SessionAction::EnhanceResponse
        } else {
            SessionAction::PassThrough
        };
        Processed {
            action,
            warm_mode: self.warm_mode,
            decision,
        }
    }

    /// Warm up `base` according to a processed turn.
    ///
    /// Triggered turns get their template with `base` inserted after the first
    /// "。" (appended when the template has none); untriggered turns in warm
    /// mode get a fixed warm prefix.
    pub fn enhance_response(
        &self,
        base: &str,
        processed: &Processed,
        picker: &dyn IndexPicker,
    ) -> String {
        if !processed.warm_mode {
            return base.to_owned();
        }
        if !processed.decision.triggered {
            return format!("{FALLBACK_PREFIX}{base}");
        }
        let template = self.classifier.render_with(&processed.decision, picker);
        match template.find(SENTENCE_END) {
            Some(pos) => {
                let split = pos + SENTENCE_END.len_utf8();
                format!("{}{base}{}", &template[..split], &template[split..])
            }
            None => format!("{template} {base}"),
        }
    }

    pub fn emotion_summary(&self, user_id: &str) -> Option<EmotionSummary> {
        self.memory.summary(user_id, self.recent_window)
    }
}

/// First category tag, else the trigger type for physical sensations.
fn primary_emotion(decision: &Decision) -> Option<String> {
    if let Some(category) = decision.categories.iter().next() {
        return Some(category.to_string());
    }
    (decision.trigger_type == TriggerType::PhysicalSensation)
        .then(|| decision.trigger_type.to_string())
}
