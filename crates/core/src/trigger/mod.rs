mod classifier;
pub mod template;

pub use classifier::TriggerClassifier;
pub use template::{FixedPicker, IndexPicker, TemplateKind, ThreadRngPicker};
