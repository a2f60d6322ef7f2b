//! Interactive league ID entry.
//!
//! The loop has two states. While awaiting input it reads a league ID and
//! runs the whole leaderboard pipeline; an invalid league prints a message
//! and asks again, success moves to done. Any other error ends the loop.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::{
    sleeper::{compute::SeasonOptions, service::LeagueService, types::RankedEntry},
    Result,
};

use super::season_points::run_for_league;

pub const PROMPT: &str = "Enter your Sleeper league ID: ";

pub const INVALID_LEAGUE_MESSAGE: &str = "That is not a valid Sleeper league ID. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum EntryState {
    AwaitingInput,
    Done(Vec<RankedEntry>),
}

/// Read one league ID line, writing the prompt first.
///
/// End of input is an error; there is nobody left to re-prompt.
fn read_league_id<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no Sleeper league ID entered before end of input",
        )
        .into());
    }
    Ok(line)
}

/// Prompt until a league ID produces a leaderboard.
///
/// `initial` is tried first without prompting (e.g. from `--league-id`).
pub async fn prompt_until_ranked<S, R, W>(
    service: &S,
    options: SeasonOptions,
    initial: Option<String>,
    input: &mut R,
    output: &mut W,
) -> Result<Vec<RankedEntry>>
where
    S: LeagueService + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut pending = initial;
    let mut state = EntryState::AwaitingInput;

    loop {
        state = match state {
            EntryState::Done(ranked) => return Ok(ranked),
            EntryState::AwaitingInput => {
                let raw = match pending.take() {
                    Some(league_id) => league_id,
                    None => read_league_id(input, output)?,
                };

                match run_for_league(service, &raw, options).await {
                    Ok(ranked) => EntryState::Done(ranked),
                    Err(e) if e.is_invalid_league() => {
                        warn!(error = %e, "league rejected");
                        writeln!(output, "{}", INVALID_LEAGUE_MESSAGE)?;
                        EntryState::AwaitingInput
                    }
                    Err(e) => return Err(e),
                }
            }
        };
    }
}
