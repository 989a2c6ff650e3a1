use anyhow::{Context, Result};
use clap::Parser;
use echolingo::config::AppConfig;
use echolingo::history::{self, PronunciationHistory, PronunciationRecord};
use echolingo::pronunciation::cli::{Cli, Command, HistoryArgs, ScoreArgs};
use echolingo::pronunciation::{Attempt, PracticeSession, ScoreBand, SAMPLE_TARGETS};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match &cli.command {
        Command::Score(args) => handle_score(&cli, args),
        Command::History(args) => handle_history(&cli, args),
        Command::Targets => {
            for (index, target) in SAMPLE_TARGETS.iter().enumerate() {
                println!("{:>2}. {}", index + 1, target);
            }
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_score(cli: &Cli, args: &ScoreArgs) -> Result<()> {
    let mut session = PracticeSession::new(args.target.as_str())?;
    if args.no_history {
        let attempt = session.record(&args.spoken, args.confidence);
        return print_attempt(&attempt, args.json);
    }

    let config = AppConfig::from_override(cli.data_dir.clone())?;
    let path = config.pronunciation_history_path();
    let stored = PronunciationHistory::load(&path, history::PRONUNCIATION_HISTORY_CAPACITY)?;
    let mut session = session.with_history(stored);
    let attempt = session.record(&args.spoken, args.confidence);
    session
        .history()
        .save(&path)
        .with_context(|| format!("Failed to save practice history to {:?}", path))?;
    print_attempt(&attempt, args.json)
}

fn print_attempt(attempt: &Attempt, json: bool) -> Result<()> {
    let result = &attempt.result;
    if json {
        let rendered =
            serde_json::to_string_pretty(result).context("Failed to render score as JSON")?;
        println!("{rendered}");
        return Ok(());
    }
    println!("Pronunciation score: {}/100", result.total);
    println!("Spoken:  \"{}\"", result.spoken);
    println!("Target:  \"{}\"", result.target);
    println!("Recognizer confidence: {}%", result.confidence_pct);
    println!("Text match: {}%", result.similarity_pct);
    println!("[{}] {}", attempt.tier.status(), attempt.tier.message());
    Ok(())
}

fn handle_history(cli: &Cli, args: &HistoryArgs) -> Result<()> {
    args.validate()?;
    let config = AppConfig::from_override(cli.data_dir.clone())?;
    let path = config.pronunciation_history_path();
    if args.clear {
        let removed = history::clear_file::<PronunciationRecord>(
            &path,
            history::PRONUNCIATION_HISTORY_CAPACITY,
        )?;
        println!("Cleared {removed} practice attempts");
        return Ok(());
    }

    let stored = PronunciationHistory::load(&path, history::PRONUNCIATION_HISTORY_CAPACITY)?;
    if stored.is_empty() {
        println!("No practice attempts recorded yet");
        return Ok(());
    }
    for record in stored.entries().take(args.limit) {
        let band = ScoreBand::from_total(record.score);
        println!(
            "{:>3}/100 [{}] \"{}\" -> \"{}\" ({})",
            record.score,
            band.label(),
            record.spoken,
            record.target,
            record.timestamp
        );
    }
    Ok(())
}
