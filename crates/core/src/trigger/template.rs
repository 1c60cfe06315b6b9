//! Warm response templates.
//!
//! Selection within a pool is the only non-deterministic step of the crate and
//! goes through [`IndexPicker`], so tests can pin it.

use rand::Rng;

use crate::types::{Decision, MatchCategory, TriggerType};

const WORD: &str = "{word}";

const WELCOME: [&str; 3] = [
    "好的！温暖模式已开启～✨ 从现在开始，我会用更温暖的方式回应你，记得随时告诉我你的感受哦！",
    "情感模式启动成功！🎉 我会更加关注你的情绪和感受，用更有温度的方式陪伴你～",
    "温暖回应已激活！❤️ 我会用心倾听你的每一句话，用温暖回应你的每一个情绪～",
];

const NEGATIVE: [&str; 3] = [
    "听到你提到{word}，我也跟着有点担心呢...😔 想和我聊聊具体发生了什么吗？或者需要我给你一些温暖的小建议？",
    "{word}的滋味确实不好受...💔 但请相信，每一次情绪波动都是成长的契机。我在这里陪着你，想说什么都可以。",
    "感受到你的{word}情绪了...🤗 这种时候确实需要有人倾听和理解。我在这里，随时准备给你支持和陪伴～",
];

const POSITIVE: [&str; 3] = [
    "哇！听到你{word}，我也跟着高兴起来！🎉 这种美好的时刻值得好好庆祝和分享～",
    "真为你感到{word}！✨ 美好的情绪就像阳光，能照亮一整天～要不要和我分享更多细节？",
    "{word}的情绪是最有感染力的！😊 看到你开心，我也觉得世界变得更美好了呢～",
];

const NEED: [&str; 3] = [
    "感受到你需要{word}了...🤗 我在这里，随时准备给你最温暖的{word}和陪伴～",
    "需要{word}的时候，记得我永远在这里～❤️ 无论是倾听、建议还是简单的陪伴，我都会用心对待。",
    "{word}已就位！✨ 我会用最温暖的方式回应你的每一个需求，让你感受到被理解和关怀～",
];

const PHYSICAL: [&str; 3] = [
    "听起来你身体有点{word}呢...💤 身体是革命的本钱，要好好照顾自己哦！需要休息的建议吗？",
    "感受到你的身体{word}了...🛌 这种时候最适合放松和恢复。要不要试试一些简单的放松方法？",
    "{word}的时候确实需要格外关爱自己呢...🌿 我在这里陪你，一起找到最适合的恢复方式～",
];

const GENERAL: [&str; 3] = [
    "我在这里用心倾听～✨ 无论你想分享什么，我都会用最温暖的方式回应你～",
    "感受到你想和我连接的心意了...❤️ 我会用全部的关注和温暖来回应你～",
    "欢迎来到温暖空间～🌼 在这里，每一个字都会被温柔对待，每一种情绪都会被理解～",
];

/// Source of the index used to pick a template from a pool.
pub trait IndexPicker: Send + Sync {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform pick from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl IndexPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Always picks the same slot (wrapped into range).
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl IndexPicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

impl<F> IndexPicker for F
where
    F: Fn(usize) -> usize + Send + Sync,
{
    fn pick(&self, len: usize) -> usize {
        self(len)
    }
}

/// Template pool selected for a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Welcome,
    NegativeEmotion,
    PositiveEmotion,
    Need,
    Physical,
    General,
}

impl TemplateKind {
    /// Priority: explicit open, negative, positive, need, physical, general.
    pub fn for_decision(decision: &Decision) -> Self {
        if decision.trigger_type == TriggerType::ExplicitOpen {
            Self::Welcome
        } else if decision.has_category(MatchCategory::EmotionNegative) {
            Self::NegativeEmotion
        } else if decision.has_category(MatchCategory::EmotionPositive) {
            Self::PositiveEmotion
        } else if decision.has_category(MatchCategory::Need) {
            Self::Need
        } else if decision.trigger_type == TriggerType::PhysicalSensation {
            Self::Physical
        } else {
            Self::General
        }
    }

    pub fn pool(self) -> &'static [&'static str] {
        match self {
            Self::Welcome => &WELCOME,
            Self::NegativeEmotion => &NEGATIVE,
            Self::PositiveEmotion => &POSITIVE,
            Self::Need => &NEED,
            Self::Physical => &PHYSICAL,
            Self::General => &GENERAL,
        }
    }

    /// Word substituted when the decision has no matched words.
    pub fn fallback_word(self) -> &'static str {
        match self {
            Self::NegativeEmotion => "心情",
            Self::PositiveEmotion => "开心",
            Self::Need => "支持",
            Self::Physical => "累",
            Self::Welcome | Self::General => "",
        }
    }
}

/// Render a template for `decision`. Never fails, whatever the decision holds.
pub fn render_with(decision: &Decision, picker: &dyn IndexPicker) -> String {
    let kind = TemplateKind::for_decision(decision);
    let pool = kind.pool();
    // Guard against pickers that ignore the contract.
    let template = pool[picker.pick(pool.len()) % pool.len()];
    let word = decision.first_word().unwrap_or(kind.fallback_word());
    template.replace(WORD, word)
}
