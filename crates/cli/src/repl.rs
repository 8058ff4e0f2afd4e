//! Interactive command loop.
//!
//! Reads one command per line until `exit` or end of input. Recommendation
//! commands take two double-quoted arguments, for example
//! `genre_recommendation "bob" "Drama"`. An empty username asks for an
//! anonymous recommendation.

use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use server::RecommendationOrchestrator;
use tracing::debug;

use crate::output::{Printer, Request};

const GENRE_COMMAND: &str = "genre_recommendation";
const CAST_COMMAND: &str = "cast_recommendation";

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Exit,
    Users,
    Films,
    Genre { username: String, genre: String },
    Cast { username: String, cast: String },
    /// A recommendation command without its two quoted arguments
    Malformed,
    /// Anything unrecognised
    Help,
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        match line {
            "exit" => ReplCommand::Exit,
            "users" => ReplCommand::Users,
            "films" => ReplCommand::Films,
            _ if line.starts_with(GENRE_COMMAND) => match quoted_pair(line) {
                Some((username, genre)) => ReplCommand::Genre {
                    username: username.to_string(),
                    genre: genre.to_string(),
                },
                None => ReplCommand::Malformed,
            },
            _ if line.starts_with(CAST_COMMAND) => match quoted_pair(line) {
                Some((username, cast)) => ReplCommand::Cast {
                    username: username.to_string(),
                    cast: cast.to_string(),
                },
                None => ReplCommand::Malformed,
            },
            _ => ReplCommand::Help,
        }
    }
}

/// Text between the 1st and 2nd quotes, and between the 3rd and 4th.
/// Anything after the 4th quote is ignored.
fn quoted_pair(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split('"');
    parts.next()?;
    let first = parts.next()?;
    parts.next()?;
    let second = parts.next()?;
    // Present only if the 4th quote closed the second argument
    parts.next()?;
    Some((first, second))
}

/// Run the loop until `exit` or end of input
pub fn run<R: BufRead, W: Write>(
    orchestrator: &RecommendationOrchestrator,
    printer: &Printer,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", "=== Film Recommendation System ===".bold().blue())?;
    writeln!(out, "Type 'exit' to quit.")?;

    let mut line = String::new();
    loop {
        write!(out, "\nCommand: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input, leaving the command loop");
            break;
        }

        let command = ReplCommand::parse(&line);
        debug!(?command, "Parsed command");

        match command {
            ReplCommand::Exit => break,
            ReplCommand::Users => printer.users(out, orchestrator.catalog())?,
            ReplCommand::Films => printer.films(out, orchestrator.catalog())?,
            ReplCommand::Genre { username, genre } => {
                let result = orchestrator.genre_recommendation(Some(&username), &genre);
                printer.recommendation(out, Request::Genre(&genre), result)?;
            }
            ReplCommand::Cast { username, cast } => {
                let result = orchestrator.cast_recommendation(Some(&username), &cast);
                printer.recommendation(out, Request::Cast(&cast), result)?;
            }
            ReplCommand::Malformed => writeln!(out, "Invalid command format.")?,
            ReplCommand::Help => print_help(out)?,
        }
    }

    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Available commands:")?;
    writeln!(out, "users - Show users list")?;
    writeln!(out, "films - Show films list")?;
    writeln!(
        out,
        "{} \"<Username>\" \"<Genre>\" - Recommend by genre",
        GENRE_COMMAND
    )?;
    writeln!(
        out,
        "{} \"<Username>\" \"<Cast>\" - Recommend by cast",
        CAST_COMMAND
    )?;
    writeln!(out, "exit - Exit")?;
    Ok(())
}
