use crate::error::{BurnoutError, Result};
use crate::report::text::scale_legend;
use crate::session::Session;
use crate::types::question::parse_response;
use std::io::{BufRead, Write};
use tracing::debug;

pub enum Outcome {
    Submitted(Session),
    Incomplete(Session),
}

/// Walks the catalog once, re-prompting on unreadable responses. Running
/// out of input before the last question yields `Outcome::Incomplete`.
pub fn ask_all<R: BufRead, W: Write>(
    mut session: Session,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome> {
    let questions = session.questions();
    writeln!(output, "Burnout Self-Assessment")?;
    writeln!(output, "Scale: {}", scale_legend())?;

    for (index, question) in questions.iter().enumerate() {
        writeln!(output)?;
        writeln!(output, "{}. {}", index + 1, question.text)?;
        loop {
            write!(output, "> ")?;
            output.flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(Outcome::Incomplete(session));
            };
            match parse_response(&line) {
                Some(value) => {
                    session = session.answer(question.id, i64::from(value))?;
                    break;
                }
                None => {
                    debug!(question = question.id, input = %line.trim(), "unreadable response");
                    writeln!(
                        output,
                        "Please answer with 1-5 or one of: Never, Rarely, Sometimes, Often, Always."
                    )?;
                }
            }
        }
    }

    Ok(Outcome::Submitted(session.submit()?))
}

/// Asks "Start over?" and reports whether the user answered yes.
pub fn ask_restart<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    write!(output, "Start over? [y/N] ")?;
    output.flush()?;
    Ok(read_line(input)?
        .map(|line| matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
        .unwrap_or(false))
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(BurnoutError::Io)?;
    Ok((read > 0).then_some(line))
}
