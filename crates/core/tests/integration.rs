//! End-to-end tests over the public API:
//! utterance → classify → render, and a multi-turn warm session.

use std::sync::Arc;

use warm_core::{
    Decision, FixedPicker, Lexicon, LexiconCategory, MatchCategory, SessionAction,
    TriggerClassifier, TriggerType, WarmCfg, WarmSession,
};

/// Every open command wins regardless of what else the input says.
#[test]
fn open_commands_short_circuit() {
    let c = TriggerClassifier::new();
    for cmd in c.lexicon().phrases(LexiconCategory::OpenCommand) {
        let d = c.classify(&format!("我很难过，{cmd}，需要安慰"));
        assert_eq!(d.trigger_type, TriggerType::ExplicitOpen, "{cmd}");
        assert_eq!(d.confidence, 1.0);
        assert_eq!(d.matched_words, vec![cmd.clone()]);
        assert!(d.categories.is_empty());
    }
}

#[test]
fn close_commands_alone_close() {
    let c = TriggerClassifier::new();
    for cmd in c.lexicon().phrases(LexiconCategory::CloseCommand) {
        let d = c.classify(cmd);
        assert_eq!(d.trigger_type, TriggerType::ExplicitClose, "{cmd}");
        assert!(!d.triggered);
        assert_eq!(d.matched_words.len(), 1);
        assert!(d.categories.is_empty());
    }
}

/// A negation marker in front of any negative word keeps it out of the match.
#[test]
fn negation_suppresses_every_negative_word() {
    let c = TriggerClassifier::new();
    let lex = c.lexicon();
    for neg in lex.phrases(LexiconCategory::Negation) {
        for word in lex.phrases(LexiconCategory::Negative) {
            let d = c.classify(&format!("{neg}{word}"));
            assert!(
                !d.matched_words.contains(word) || d.trigger_type == TriggerType::PhysicalSensation,
                "{neg}{word} reported {word} as {:?}",
                d.trigger_type
            );
            assert!(!d.has_category(MatchCategory::EmotionNegative), "{neg}{word}");
        }
    }
}

#[test]
fn adding_modifiers_never_lowers_confidence() {
    let c = TriggerClassifier::new();
    let modifiers = ["很", "工作", "学习", "非常", "家庭", "十分", "朋友", "金钱"];
    let mut input = String::from("难过");
    let mut last = c.classify(&input).confidence;
    for m in modifiers {
        // Appended after the word so negation markers inside modifiers do not apply.
        input.push_str(m);
        let d = c.classify(&input);
        assert_eq!(d.matched_words, vec!["难过".to_string()]);
        assert!(d.confidence >= last);
        assert!(d.confidence <= 0.95);
        last = d.confidence;
    }
    assert!((last - 0.95).abs() < 1e-5);
}

#[test]
fn classify_is_deterministic() {
    let c = TriggerClassifier::new();
    for input in ["今天工作压力好大", "我不难过，只是有点累", "你好", "", "开启温暖模式"] {
        assert_eq!(c.classify(input), c.classify(input));
    }
}

#[test]
fn confidence_stays_in_range() {
    let c = TriggerClassifier::new();
    let inputs = [
        "今天工作压力好大",
        "我有点难过",
        "需要一些安慰",
        "今天很开心！",
        "我不难过，只是有点累",
        "关闭情感模式",
        "你好",
        "工作学习考试作业感情恋爱难过伤心焦虑紧张孤独寂寞",
    ];
    for input in inputs {
        let d = c.classify(input);
        assert!((0.0..=0.95).contains(&d.confidence), "{input}: {}", d.confidence);
    }
}

#[test]
fn example_scenarios() {
    let c = TriggerClassifier::new();

    let d = c.classify("需要一些安慰");
    assert_eq!(d.trigger_type, TriggerType::Keyword);
    assert!(d.has_category(MatchCategory::Need));

    let d = c.classify("今天很开心！");
    assert!(d.matched_words.contains(&"开心".to_string()));

    let d = c.classify("我不难过，只是有点累");
    assert_eq!(d.trigger_type, TriggerType::PhysicalSensation);
    assert!(!d.matched_words.contains(&"难过".to_string()));
}

#[test]
fn render_never_fails_on_sparse_decisions() {
    let c = TriggerClassifier::new();
    let mut d = Decision::none("");
    assert!(!c.render(&d).is_empty());

    d.categories.insert(MatchCategory::EmotionPositive);
    let text = c.render_with(&d, &FixedPicker(0));
    assert!(text.contains("开心"));
}

#[test]
fn custom_lexicon_drives_classification() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("negative.txt"), "sad\nupset\n").unwrap();
    std::fs::write(dir.path().join("negation.txt"), "not \n").unwrap();
    let c = TriggerClassifier::with_lexicon(Lexicon::with_overrides(dir.path()).unwrap());

    let d = c.classify("I feel sad");
    assert_eq!(d.trigger_type, TriggerType::Keyword);
    assert_eq!(d.matched_words, vec!["sad".to_string()]);

    let d = c.classify("I am not upset");
    assert_eq!(d.trigger_type, TriggerType::None);
}

/// Multi-turn session mirroring a short chat.
#[test]
fn session_conversation() {
    let classifier = Arc::new(TriggerClassifier::new());
    let mut session = WarmSession::new(classifier, &WarmCfg::default());

    let p = session.process_message("default", "今天工作压力好大");
    assert_eq!(p.action, SessionAction::EnhanceResponse);
    let out = session.enhance_response("建议你休息一下，听听音乐放松", &p, &FixedPicker(2));
    assert!(out.contains("压力"));

    let p = session.process_message("default", "我有点难过");
    assert!(p.warm_mode);

    let p = session.process_message("default", "关闭情感模式");
    assert!(matches!(p.action, SessionAction::Respond(_)));
    assert!(!session.warm_mode());

    // Keyword triggers re-open warm mode with the default config.
    let p = session.process_message("default", "今天很开心！");
    assert!(p.warm_mode);

    let p = session.process_message("default", "开启温暖模式");
    assert!(matches!(p.action, SessionAction::Respond(_)));

    let summary = session.emotion_summary("default").unwrap();
    assert_eq!(summary.total_interactions, 3);
    assert_eq!(
        summary.most_common_emotion,
        Some(("emotion_negative".to_string(), 2))
    );
    assert_eq!(
        summary.recent_emotions,
        vec![
            "emotion_negative".to_string(),
            "emotion_negative".to_string(),
            "emotion_positive".to_string()
        ]
    );
}

#[test]
fn classifier_is_shareable_across_threads() {
    let classifier = Arc::new(TriggerClassifier::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let c = Arc::clone(&classifier);
            std::thread::spawn(move || {
                let d = c.classify("今天工作压力好大");
                c.render(&d)
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap().contains("压力"));
    }
}
