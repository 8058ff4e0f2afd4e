//! Parser for the catalog CSV files.
//!
//! This module handles the two input files:
//! - films:  name,director,cast,genre,imdb
//! - users:  username,watched,ratings   (watched/ratings are `;`-joined lists)
//!
//! Both files start with a header row. Columns are read by position, so the
//! header names themselves are never checked.
//!
//! Parsing is best-effort: a malformed row is logged with its line number
//! and skipped. Only problems with the file as a whole (missing file, I/O
//! failure) abort the load.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

/// Separator inside the watched/ratings columns of the users file
const LIST_DELIMITER: char = ';';

/// Open a CSV file with the settings shared by both parsers
fn open_reader(path: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|_| DataLoadError::FileNotFound {
        path: path.display().to_string(),
    })?;

    Ok(ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(file))
}

/// Short file name for log and error messages
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or(0)
}

/// Walk every record of `path`, converting each with `convert`.
///
/// Rows that fail to convert are logged and dropped. Reader-level I/O
/// errors are returned; any other reader error only skips its row.
fn read_rows<T>(
    path: &Path,
    convert: impl Fn(&StringRecord, &str) -> Result<T>,
) -> Result<Vec<T>> {
    let mut reader = open_reader(path)?;
    let file = file_label(path);
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                warn!(file = %file, "Skipping unreadable row: {}", err);
                skipped += 1;
                continue;
            }
        };

        match convert(&record, &file) {
            Ok(row) => rows.push(row),
            Err(err) => {
                warn!("Skipping row: {}", err);
                skipped += 1;
            }
        }
    }

    debug!(file = %file, parsed = rows.len(), skipped, "Finished parsing");
    Ok(rows)
}

/// Parse the films file
pub fn parse_films(path: &Path) -> Result<Vec<Film>> {
    read_rows(path, film_from_record)
}

/// Parse the users file
pub fn parse_users(path: &Path) -> Result<Vec<User>> {
    read_rows(path, user_from_record)
}

fn film_from_record(record: &StringRecord, file: &str) -> Result<Film> {
    let line = line_of(record);
    let missing = |what: &str| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Missing {}", what),
    };

    let name = record
        .get(0)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| missing("name"))?;
    let director = record.get(1).ok_or_else(|| missing("director"))?;
    let cast = record.get(2).ok_or_else(|| missing("cast"))?;
    let genre = record.get(3).ok_or_else(|| missing("genre"))?;
    let imdb_raw = record.get(4).ok_or_else(|| missing("imdb"))?;

    let imdb: f64 = imdb_raw.parse().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid imdb: {}", e),
    })?;
    if !imdb.is_finite() {
        return Err(DataLoadError::InvalidValue {
            field: "imdb".to_string(),
            value: imdb_raw.to_string(),
        });
    }

    Ok(Film {
        name: name.to_string(),
        director: director.to_string(),
        cast: cast.to_string(),
        genre: genre.parse()?,
        imdb,
    })
}

fn user_from_record(record: &StringRecord, file: &str) -> Result<User> {
    let username = record
        .get(0)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| DataLoadError::ParseError {
            file: file.to_string(),
            line: line_of(record),
            reason: "Missing username".to_string(),
        })?;

    // A user who has watched nothing may leave both list columns out
    let watched = split_list(record.get(1).unwrap_or(""));
    let ratings = split_list(record.get(2).unwrap_or(""));

    if watched.len() != ratings.len() {
        warn!(
            user = username,
            watched = watched.len(),
            ratings = ratings.len(),
            "watched/ratings length mismatch, truncating to the shorter list"
        );
    }

    let history = watched
        .into_iter()
        .zip(ratings)
        .map(|(film, rating)| WatchEntry::new(film, RatingLabel::parse(rating)))
        .collect();

    Ok(User::new(username, history))
}

/// Split a `;`-joined list, trimming items and dropping empty ones
///
/// Example: "A; B;;C " -> ["A", "B", "C"]
fn split_list(s: &str) -> Vec<&str> {
    s.split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}
