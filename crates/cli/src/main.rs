mod output;
mod repl;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::Catalog;
use output::{OutputFormat, Printer, Request};
use server::RecommendationOrchestrator;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// FilmPicks - Film Recommendation Engine
#[derive(Parser)]
#[command(name = "film-picks")]
#[command(about = "Film recommendations by genre or cast", long_about = None)]
struct Cli {
    /// Users CSV: username,watched,ratings (lists joined with ';')
    users_file: PathBuf,

    /// Films CSV: name,director,cast,genre,imdb
    films_file: PathBuf,

    /// Output format for recommendations and listings
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Command to run; starts the interactive loop when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend up to 3 films of a genre
    Genre {
        /// Username to personalise for; anonymous when omitted
        #[arg(long)]
        user: Option<String>,

        /// One of: Action, Comedy, Drama, Horror, Science Fiction
        genre: String,
    },

    /// Recommend up to 2 films featuring a cast member
    Cast {
        /// Username to personalise for; anonymous when omitted
        #[arg(long)]
        user: Option<String>,

        /// Exact cast name
        cast: String,
    },

    /// List every user and their watch history
    Users,

    /// List every film
    Films,

    /// Start the interactive command loop
    Repl,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout is for results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    eprintln!(
        "Loading films from {} and users from {}...",
        cli.films_file.display(),
        cli.users_file.display()
    );
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_files(&cli.users_file, &cli.films_file)
            .context("Failed to load film catalog")?,
    );
    eprintln!(
        "{} Loaded {} films and {} users in {:?}",
        "✓".green(),
        catalog.films().len(),
        catalog.users().len(),
        start.elapsed()
    );

    let orchestrator = RecommendationOrchestrator::new(catalog);
    let printer = Printer::new(cli.format);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Dispatch to appropriate command handler
    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Genre { user, genre } => {
            handle_genre(&orchestrator, &printer, &mut out, user.as_deref(), &genre)?
        }
        Commands::Cast { user, cast } => {
            handle_cast(&orchestrator, &printer, &mut out, user.as_deref(), &cast)?
        }
        Commands::Users => printer.users(&mut out, orchestrator.catalog())?,
        Commands::Films => printer.films(&mut out, orchestrator.catalog())?,
        Commands::Repl => repl::run(&orchestrator, &printer, io::stdin().lock(), &mut out)?,
    }

    out.flush()?;
    Ok(())
}

/// Handle the 'genre' command
fn handle_genre<W: Write>(
    orchestrator: &RecommendationOrchestrator,
    printer: &Printer,
    out: &mut W,
    user: Option<&str>,
    genre: &str,
) -> Result<()> {
    let result = orchestrator.genre_recommendation(user, genre);
    printer.recommendation(out, Request::Genre(genre), result)
}

/// Handle the 'cast' command
fn handle_cast<W: Write>(
    orchestrator: &RecommendationOrchestrator,
    printer: &Printer,
    out: &mut W,
    user: Option<&str>,
    cast: &str,
) -> Result<()> {
    let result = orchestrator.cast_recommendation(user, cast);
    printer.recommendation(out, Request::Cast(cast), result)
}
