use std::sync::Arc;

use rustyline::error::ReadlineError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use warm_core::{Lexicon, SessionAction, TriggerClassifier, WarmCfg, WarmSession};

const USER_ID: &str = "default";

fn main() -> anyhow::Result<()> {
    // Tracing: JSON lines on stderr, only when RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .init();
    }

    let cfg = WarmCfg::from_env()?;
    let lexicon = match &cfg.lexicon_dir {
        Some(dir) => {
            let lexicon = Lexicon::with_overrides(dir)?;
            tracing::info!(dir = %dir.display(), "lexicon overrides applied");
            lexicon
        }
        None => Lexicon::builtin(),
    };
    let classifier = Arc::new(TriggerClassifier::with_lexicon(lexicon));

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        for text in &args {
            println!("{}", serde_json::to_string(&classifier.classify(text))?);
        }
        return Ok(());
    }

    let session = WarmSession::new(classifier, &cfg);
    run_repl(session, &cfg)
}

fn run_repl(mut session: WarmSession, cfg: &WarmCfg) -> anyhow::Result<()> {
    let mut editor = rustyline::DefaultEditor::new()?;
    let mut show_json = false;
    println!("warm: /summary, /config, /json, /q");

    loop {
        let line = match editor.readline("You> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(text);

        match text {
            "/q" | "/exit" | "/quit" => break,
            "/json" => {
                show_json = !show_json;
                println!("json output {}", if show_json { "on" } else { "off" });
                continue;
            }
            "/summary" => {
                match session.emotion_summary(USER_ID) {
                    Some(summary) => println!("{}", serde_json::to_string_pretty(&summary)?),
                    None => println!("暂无情感记录"),
                }
                continue;
            }
            "/config" => {
                for (key, value, desc) in cfg.to_entries() {
                    println!("{key:<18} {value:<12} {desc}");
                }
                continue;
            }
            _ => {}
        }

        let processed = session.process_message(USER_ID, text);
        if show_json {
            println!("{}", serde_json::to_string(&processed.decision)?);
        }
        match &processed.action {
            SessionAction::Respond(reply) => println!("{reply}"),
            SessionAction::EnhanceResponse => {
                let reply = session.classifier().render(&processed.decision);
                println!("{reply}");
            }
            SessionAction::PassThrough => {}
        }
        println!(
            "[warm mode: {}]",
            if processed.warm_mode { "on" } else { "off" }
        );
    }

    Ok(())
}
