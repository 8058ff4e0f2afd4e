//! Rendering of recommendations, catalog listings and request errors.
//!
//! Text output keeps the classic one-line formats; `--format json` swaps
//! them for `serde_json` documents so the output can be piped elsewhere.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use data_loader::Catalog;
use server::error::Result as RecommendResult;
use server::{FilmRecommendation, RecommendError, RecommendationOutcome};
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable lines
    Text,
    /// Pretty-printed JSON
    Json,
}

/// What a recommendation request asked for
#[derive(Debug, Clone, Copy)]
pub enum Request<'a> {
    Genre(&'a str),
    Cast(&'a str),
}

impl Request<'_> {
    fn empty_message(&self) -> String {
        match self {
            Request::Genre(genre) => format!("No films found for genre {}.", genre),
            Request::Cast(cast) => format!("No suitable films found for cast {}.", cast),
        }
    }
}

/// Writes everything the binary shows on stdout
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    format: OutputFormat,
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print the outcome of a genre or cast request.
    ///
    /// Request failures are shown as a one-line `Error:` message, so only
    /// write failures are returned.
    pub fn recommendation<W: Write>(
        &self,
        out: &mut W,
        request: Request<'_>,
        result: RecommendResult<RecommendationOutcome>,
    ) -> Result<()> {
        match result {
            Ok(RecommendationOutcome::Ranked(recommendations)) => {
                self.ranked(out, &recommendations)
            }
            Ok(RecommendationOutcome::NoCandidates) => {
                self.message(out, &request.empty_message())
            }
            Err(err) => {
                if let RecommendError::Pipeline(cause) = &err {
                    error!("Recommendation pipeline failed: {:#}", cause);
                }
                self.error(out, &error_message(&err))
            }
        }
    }

    fn ranked<W: Write>(&self, out: &mut W, recommendations: &[FilmRecommendation]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for rec in recommendations {
                    writeln!(
                        out,
                        "{}. {}: {} ({})",
                        rec.rank.to_string().green(),
                        rec.name,
                        rec.director,
                        rec.imdb
                    )?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, recommendations)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Every user with their `film(rating)` history
    pub fn users<W: Write>(&self, out: &mut W, catalog: &Catalog) -> Result<()> {
        if self.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut *out, catalog.users())?;
            writeln!(out)?;
            return Ok(());
        }

        writeln!(out, "{}", "=== Users List ===".bold().blue())?;
        for user in catalog.users() {
            let history = user
                .history
                .iter()
                .map(|entry| format!("{}({})", entry.film, entry.rating))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(out, "Username: {}", user.username)?;
            writeln!(out, "Watched movies: {}", history)?;
            writeln!(out)?;
        }
        Ok(())
    }

    /// Every film with all of its fields
    pub fn films<W: Write>(&self, out: &mut W, catalog: &Catalog) -> Result<()> {
        if self.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut *out, catalog.films())?;
            writeln!(out)?;
            return Ok(());
        }

        writeln!(out, "{}", "=== Films List ===".bold().blue())?;
        for film in catalog.films() {
            writeln!(out, "Name: {}", film.name)?;
            writeln!(out, "Director: {}", film.director)?;
            writeln!(out, "Cast: {}", film.cast)?;
            writeln!(out, "Genre: {}", film.genre)?;
            writeln!(out, "IMDb Rating: {}", film.imdb)?;
            writeln!(out)?;
        }
        Ok(())
    }

    /// A plain informational line
    pub fn message<W: Write>(&self, out: &mut W, text: &str) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{}", text)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &serde_json::json!({ "message": text }))?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// A one-line `Error:` message
    pub fn error<W: Write>(&self, out: &mut W, text: &str) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{} {}", "Error:".red().bold(), text)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &serde_json::json!({ "error": text }))?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

fn error_message(err: &RecommendError) -> String {
    match err {
        RecommendError::InvalidGenre { valid, .. } => format!("Invalid genre. Valid genres: {}", valid),
        RecommendError::Pipeline(cause) => format!("{:#}", cause),
        other => other.to_string(),
    }
}
