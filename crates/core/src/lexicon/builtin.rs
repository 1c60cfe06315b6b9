//! Hardcoded phrase tables.

pub(super) const NEGATIVE: &[&str] = &[
    "难过", "伤心", "悲伤", "痛苦", "心痛", "心碎",
    "焦虑", "紧张", "担忧", "忧虑", "不安",
    "压力", "压抑", "沉重", "负担",
    "烦躁", "恼火", "生气", "愤怒", "气愤",
    "失望", "绝望", "沮丧", "失落",
    "孤独", "寂寞", "孤单", "孤立",
    "害怕", "恐惧", "惊恐", "恐慌", "畏惧",
    "疲惫", "疲倦", "疲劳", "累",
    "迷茫", "困惑", "疑惑", "不解",
    "愧疚", "内疚", "自责", "后悔",
    "嫉妒", "羡慕", "妒忌",
];

pub(super) const POSITIVE: &[&str] = &[
    "开心", "高兴", "快乐", "愉快", "喜悦",
    "兴奋", "激动", "振奋", "激昂",
    "幸福", "美满", "甜蜜", "温馨",
    "感动", "感激", "感恩", "感谢",
    "满足", "满意", "知足",
    "平静", "安宁", "宁静", "祥和",
    "自信", "自豪", "骄傲",
    "期待", "盼望", "希望", "渴望",
    "放松", "轻松", "舒畅", "舒心",
];

pub(super) const NEUTRAL: &[&str] = &[
    "惊讶", "惊奇", "吃惊", "诧异",
    "好奇", "兴趣", "关注",
    "犹豫", "迟疑", "纠结",
    "怀念", "思念", "想念",
    "同情", "怜悯", "心疼",
];

pub(super) const NEED: &[&str] = &[
    "安慰", "抚慰", "慰藉",
    "支持", "鼓励", "鼓舞", "加油",
    "陪伴", "陪同", "伴随",
    "倾听", "聆听", "听听",
    "温暖", "温情", "温情",
    "情感", "情绪", "心情", "心境",
    "理解", "体谅", "体察",
    "帮助", "协助", "援助",
    "建议", "意见", "提议",
    "分享", "倾诉", "诉说",
];

pub(super) const INTENSITY: &[&str] = &[
    "很", "非常", "特别", "极其", "极度", "极端",
    "有点", "有些", "稍微", "略微", "稍稍",
    "十分", "相当", "挺", "蛮",
    "太", "过于", "过分",
    "一点", "一些", "些许",
];

pub(super) const PHYSICAL: &[&str] = &[
    "累", "疲惫", "疲倦", "疲劳",
    "困", "困倦", "想睡",
    "饿", "饥饿", "空腹",
    "渴", "口渴", "干渴",
    "冷", "寒冷", "冰凉",
    "热", "炎热", "闷热",
    "痛", "疼痛", "酸痛", "刺痛",
    "晕", "头晕", "眩晕",
    "恶心", "想吐", "反胃",
];

pub(super) const CONTEXT: &[&str] = &[
    "工作", "职场", "办公室", "上班",
    "学习", "考试", "功课", "作业",
    "感情", "恋爱", "爱情", "婚姻", "家庭",
    "朋友", "友谊", "友情", "人际",
    "未来", "前途", "前景", "发展",
    "过去", "回忆", "往事", "历史",
    "金钱", "财务", "经济", "收入",
    "健康", "身体", "疾病", "生病",
];

pub(super) const NEGATION: &[&str] = &["不", "没", "无", "非", "未", "别", "莫", "勿"];

pub(super) const OPEN_COMMAND: &[&str] = &[
    "开启情感模式",
    "开启warm agent",
    "开启温暖模式",
    "开启情感支持",
    "开启温暖回应",
];

pub(super) const CLOSE_COMMAND: &[&str] = &[
    "关闭情感模式",
    "关闭warm agent",
    "关闭温暖模式",
    "恢复正常模式",
    "退出情感支持",
    "关闭情感支持",
    "关闭温暖回应",
    "关闭情感回应",
];
