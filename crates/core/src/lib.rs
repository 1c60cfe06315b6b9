//! Rule-based emotional-intent detection for warm, empathetic responses.
//!
//! [`TriggerClassifier::classify`] decides whether warm mode should be active
//! for an utterance; [`TriggerClassifier::render`] picks a response template
//! for the resulting [`Decision`]. [`WarmSession`] is a ready-made caller that
//! owns the warm-mode flag across turns.

pub mod config;
pub mod error;
pub mod lexicon;
pub mod session;
pub mod trigger;
pub mod types;

pub use config::WarmCfg;
pub use error::WarmError;
pub use lexicon::{Lexicon, LexiconCategory};
pub use session::{EmotionSummary, Processed, SessionAction, WarmSession};
pub use trigger::{FixedPicker, IndexPicker, TemplateKind, ThreadRngPicker, TriggerClassifier};
pub use types::{Decision, MatchCategory, TriggerType};
