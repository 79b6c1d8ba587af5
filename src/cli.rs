use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "burnout",
    version,
    about = "Occupational burnout self-assessment questionnaire"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the questions and the response scale
    Questions(QuestionsCommand),
    /// Score a complete set of answers
    Score(ScoreCommand),
    /// Answer the questionnaire interactively
    Take(TakeCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Md,
    Json,
}

#[derive(Args)]
pub struct QuestionsCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Answer as ID=VALUE with VALUE in 1..=5; repeatable
    #[arg(short, long = "answer", value_name = "ID=VALUE")]
    pub answers: Vec<String>,

    /// JSON or TOML file mapping question ids to values
    #[arg(long)]
    pub answers_file: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct TakeCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}
