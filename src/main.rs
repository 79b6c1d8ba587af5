mod cli;
mod config;
mod error;
mod logging;
mod prompt;
mod report;
mod scoring;
mod session;
mod types;

use crate::error::BurnoutError;
use crate::report::{OutputFormat, RenderOptions};
use crate::session::Session;
use crate::types::answers::{self, AnswerSet};
use crate::types::config::BurnoutConfig;
use clap::Parser;
use std::io::{self, Write};
use tracing::{info, warn};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INCOMPLETE: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn resolve_format(
    flag: Option<cli::ReportFormat>,
    config: &BurnoutConfig,
) -> Result<OutputFormat, BurnoutError> {
    match flag {
        Some(cli::ReportFormat::Text) => Ok(OutputFormat::Text),
        Some(cli::ReportFormat::Md) => Ok(OutputFormat::Md),
        Some(cli::ReportFormat::Json) => Ok(OutputFormat::Json),
        None => OutputFormat::parse(config.report_format()),
    }
}

fn collect_answers(cmd: &cli::ScoreCommand) -> Result<AnswerSet, BurnoutError> {
    let from_file = match &cmd.answers_file {
        Some(path) => answers::read_answers_file(path)?,
        None => AnswerSet::new(),
    };
    let from_flags = cmd
        .answers
        .iter()
        .map(|pair| answers::parse_pair(pair))
        .try_fold(AnswerSet::new(), |set, pair| {
            let (id, value) = pair?;
            set.with_answer(&id, value)
        })?;
    Ok(from_file.merged(&from_flags))
}

fn run() -> Result<i32, BurnoutError> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd)?;
    if loaded.is_none() {
        info!("no burnout.toml found in {}; using defaults", cwd.display());
    }
    let config = loaded.unwrap_or_default();
    let options = RenderOptions {
        show_dimensions: config.show_dimensions(),
    };

    match cli.command {
        cli::Commands::Questions(cmd) => {
            let format = resolve_format(cmd.format, &config)?;
            let rendered = report::render_catalog(&types::question::QUESTIONS, format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let format = resolve_format(cmd.format, &config)?;
            let session = Session::from_answers(collect_answers(&cmd)?)?;
            info!(answered = session.answers().len(), "scoring answers");
            let submitted = session.submit()?;
            if let Some(result) = submitted.result() {
                println!("{}", report::render(result, format, options)?);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Take(cmd) => {
            let format = resolve_format(cmd.format, &config)?;
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let stdout = io::stdout();
            let mut output = stdout.lock();

            let mut session = Session::new();
            loop {
                match prompt::ask_all(session, &mut input, &mut output)? {
                    prompt::Outcome::Submitted(submitted) => {
                        if let Some(result) = submitted.result() {
                            writeln!(output)?;
                            writeln!(output, "{}", report::render(result, format, options)?)?;
                        }
                        if !prompt::ask_restart(&mut input, &mut output)? {
                            writeln!(output)?;
                            return Ok(exit_code::SUCCESS);
                        }
                        session = submitted.reset();
                    }
                    prompt::Outcome::Incomplete(partial) => {
                        writeln!(output)?;
                        warn!(answered = partial.answers().len(), "input ended early");
                        return Err(BurnoutError::IncompleteSubmission {
                            missing: partial.missing().into_iter().map(str::to_string).collect(),
                        });
                    }
                }
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
