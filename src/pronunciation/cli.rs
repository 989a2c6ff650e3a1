use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pronunciation",
    about = "Score pronunciation practice attempts against a target sentence"
)]
pub struct Cli {
    /// Override for the directory holding practice history.
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score one recognized utterance against the intended sentence.
    Score(ScoreArgs),
    /// Show or clear past practice attempts.
    History(HistoryArgs),
    /// List the built-in practice sentences.
    Targets,
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Text produced by the speech recognizer.
    #[arg(long)]
    pub spoken: String,
    /// Sentence the learner meant to pronounce.
    #[arg(long)]
    pub target: String,
    /// Recognizer confidence in [0, 1]; defaults to 0.8 when omitted.
    #[arg(long, allow_negative_numbers = true)]
    pub confidence: Option<f64>,
    /// Do not append the attempt to the stored history.
    #[arg(long = "no-history")]
    pub no_history: bool,
    /// Print the score breakdown as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    /// Remove every stored attempt.
    #[arg(long)]
    pub clear: bool,
    /// Maximum number of attempts to print.
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

impl HistoryArgs {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.limit > 0, "limit must be positive");
        Ok(())
    }
}
