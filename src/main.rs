use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use echolingo::config::AppConfig;
use echolingo::history::{self, TranslationHistory, TranslationRecord};
use echolingo::translation::{
    FallbackTranslator, MyMemoryClient, Origin, PhraseTable, Translation, TranslationRequest,
    Translator,
};
use echolingo::types::{ConversationMode, Language};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Echolingo - speech practice companion
///
/// Translates phrases between Korean, English, Japanese and Chinese, keeps a
/// short translation history and lists sample sentences per conversation mode.
#[derive(Parser, Debug)]
#[command(name = "echolingo")]
#[command(version = "0.1.0")]
#[command(about = "Phrase translation with offline fallback", long_about = None)]
struct Cli {
    /// Override for the directory holding history files
    #[arg(long = "data-dir", global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate text, falling back to the bundled phrase table when offline
    Translate(TranslateArgs),
    /// List sample sentences for a conversation mode
    Samples {
        /// general, travel, business or study
        #[arg(default_value = "general")]
        mode: ConversationMode,
    },
    /// Show or clear the translation history
    History {
        /// Remove every stored translation
        #[arg(long)]
        clear: bool,
    },
}

#[derive(Args, Debug)]
struct TranslateArgs {
    /// Text to translate
    #[arg(value_name = "TEXT")]
    text: String,

    /// Source language (ko, en, ja, zh)
    #[arg(long, default_value = "ko")]
    from: Language,

    /// Target language (ko, en, ja, zh)
    #[arg(long, default_value = "en")]
    to: Language,

    /// Skip the translation service and use the phrase table only
    #[arg(long)]
    offline: bool,

    /// Translate the result back into the source language as well
    #[arg(long = "round-trip")]
    round_trip: bool,

    /// Do not record the translation in history
    #[arg(long = "no-history")]
    no_history: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Translate(args) => handle_translate(&cli, args),
        Command::Samples { mode } => {
            println!("Sample sentences ({mode}):");
            for sample in mode.sample_sentences() {
                println!("  {} -> {}", sample.ko, sample.en);
            }
            Ok(())
        }
        Command::History { clear } => handle_history(&cli, *clear),
    }
}

fn handle_translate(cli: &Cli, args: &TranslateArgs) -> Result<()> {
    let request = TranslationRequest::new(args.text.as_str(), args.from, args.to)
        .context("Invalid translation request")?;
    let translation = run_translation(&request, args.offline)?;
    print_translation(&request, &translation);

    let mut records = vec![TranslationRecord::new(
        request.text(),
        translation.text.as_str(),
        request.source(),
        request.target(),
        Local::now(),
    )];

    if args.round_trip {
        let back = request
            .reversed(&translation.text)
            .context("Cannot translate the result back")?;
        let returned = run_translation(&back, args.offline)?;
        print_translation(&back, &returned);
        records.push(TranslationRecord::new(
            back.text(),
            returned.text.as_str(),
            back.source(),
            back.target(),
            Local::now(),
        ));
    }

    if args.no_history {
        return Ok(());
    }
    let config = AppConfig::from_override(cli.data_dir.clone())?;
    let path = config.translation_history_path();
    let mut stored = TranslationHistory::load(&path, history::TRANSLATION_HISTORY_CAPACITY)?;
    for record in records {
        stored.push(record);
    }
    stored
        .save(&path)
        .with_context(|| format!("Failed to save translation history to {:?}", path))?;
    info!(entries = stored.len(), "translation history updated");
    Ok(())
}

fn run_translation(request: &TranslationRequest, offline: bool) -> Result<Translation> {
    if offline {
        return Ok(Translation {
            text: PhraseTable::shared().translate(request)?,
            origin: Origin::Offline,
        });
    }
    let client = MyMemoryClient::new()?;
    Ok(FallbackTranslator::new(client).translate(request))
}

fn print_translation(request: &TranslationRequest, translation: &Translation) {
    let note = match translation.origin {
        Origin::Online => "",
        Origin::Offline => " (offline)",
    };
    println!("{}: {}", request.source().display_name(), request.text());
    println!("{}: {}{}", request.target().display_name(), translation.text, note);
}

fn handle_history(cli: &Cli, clear: bool) -> Result<()> {
    let config = AppConfig::from_override(cli.data_dir.clone())?;
    let path = config.translation_history_path();
    if clear {
        let removed = history::clear_file::<TranslationRecord>(
            &path,
            history::TRANSLATION_HISTORY_CAPACITY,
        )?;
        println!("Cleared {removed} translations");
        return Ok(());
    }

    let stored = TranslationHistory::load(&path, history::TRANSLATION_HISTORY_CAPACITY)?;
    if stored.is_empty() {
        println!("No translations recorded yet");
        return Ok(());
    }
    for record in stored.entries() {
        println!(
            "{} {}: {} | {}: {}",
            record.timestamp,
            record.source_lang.display_name(),
            record.source,
            record.target_lang.display_name(),
            record.target
        );
    }
    Ok(())
}
