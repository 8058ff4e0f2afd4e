//! Core domain types for the film catalog.
//!
//! This module defines the fundamental data structures used throughout the system.
//! Key Rust concepts demonstrated here:
//! - Enums for fixed sets of values (Genre, RatingLabel)
//! - `FromStr` / `Display` for round-tripping the labels used in the CSV files
//! - A single owning struct (Catalog) that hands out borrows

use crate::error::DataLoadError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Genre
// =============================================================================

/// The fixed set of genres a film can belong to.
///
/// Rust concept: a closed enum means an unknown genre can only ever exist
/// as a parse error, never as a value flowing through the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
}

impl Genre {
    /// Every genre, in the order they are presented to users
    pub const ALL: [Genre; 5] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::ScienceFiction,
    ];

    /// The label used in data files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Horror => "Horror",
            Genre::ScienceFiction => "Science Fiction",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = DataLoadError;

    /// Labels are matched exactly, including case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| DataLoadError::InvalidValue {
                field: "genre".to_string(),
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Rating labels
// =============================================================================

/// A user's qualitative reaction to a film they watched.
///
/// Anything outside the three known labels is kept verbatim in `Other`.
/// It carries no weight when scoring but is still shown in user listings.
/// Serialized as the bare label, the same text the listings print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RatingLabel {
    Perfect,
    Average,
    Poor,
    Other(String),
}

impl RatingLabel {
    /// Infallible: unknown labels become `Other`
    pub fn parse(s: &str) -> Self {
        match s {
            "Perfect" => RatingLabel::Perfect,
            "Average" => RatingLabel::Average,
            "Poor" => RatingLabel::Poor,
            other => RatingLabel::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RatingLabel::Perfect => "Perfect",
            RatingLabel::Average => "Average",
            RatingLabel::Poor => "Poor",
            RatingLabel::Other(raw) => raw,
        }
    }
}

impl From<String> for RatingLabel {
    fn from(raw: String) -> Self {
        match RatingLabel::parse(&raw) {
            RatingLabel::Other(_) => RatingLabel::Other(raw),
            known => known,
        }
    }
}

impl From<RatingLabel> for String {
    fn from(label: RatingLabel) -> Self {
        match label {
            RatingLabel::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RatingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Films and users
// =============================================================================

/// A film in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    /// Unique title, also the key users reference in their history
    pub name: String,
    pub director: String,
    /// Single lead/credited cast member
    pub cast: String,
    pub genre: Genre,
    /// IMDb rating, expected range 0-10
    pub imdb: f64,
}

/// One step of a user's watch history: the film title and how they rated it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchEntry {
    pub film: String,
    pub rating: RatingLabel,
}

impl WatchEntry {
    pub fn new(film: impl Into<String>, rating: RatingLabel) -> Self {
        Self {
            film: film.into(),
            rating,
        }
    }
}

/// A user and their ordered watch history.
///
/// History order matters: the scorer walks it front to back and later
/// entries overwrite earlier affinity matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub history: Vec<WatchEntry>,
}

impl User {
    pub fn new(username: impl Into<String>, history: Vec<WatchEntry>) -> Self {
        Self {
            username: username.into(),
            history,
        }
    }

    /// Titles the user has watched, in history order
    pub fn watched(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(|entry| entry.film.as_str())
    }

    pub fn has_watched(&self, film_name: &str) -> bool {
        self.watched().any(|name| name == film_name)
    }
}

// =============================================================================
// Catalog - the read-only in-memory store
// =============================================================================

/// Owns every film and user for the lifetime of the process.
///
/// Films and users keep their file order in `Vec`s (listings and candidate
/// order depend on it). The lookup maps only ever point at the FIRST record
/// with a given name, which matches a first-match linear search.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) films: Vec<Film>,
    pub(crate) users: Vec<User>,

    // Name lookups (index into the Vecs above)
    pub(crate) film_lookup: HashMap<String, usize>,
    pub(crate) user_lookup: HashMap<String, usize>,

    // Secondary indices for candidate generation
    pub(crate) genre_index: HashMap<Genre, Vec<usize>>,
    pub(crate) cast_index: HashMap<String, Vec<usize>>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a film by its exact title
    pub fn find_film(&self, name: &str) -> Option<&Film> {
        self.film_lookup.get(name).map(|&idx| &self.films[idx])
    }

    /// Look up a user by their exact username
    pub fn find_user(&self, username: &str) -> Option<&User> {
        self.user_lookup.get(username).map(|&idx| &self.users[idx])
    }

    /// All films in load order
    pub fn films(&self) -> &[Film] {
        &self.films
    }

    /// All users in load order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Films of one genre, in load order
    pub fn films_by_genre(&self, genre: Genre) -> impl Iterator<Item = &Film> {
        self.genre_index
            .get(&genre)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|&idx| &self.films[idx])
    }

    /// Films whose cast matches `cast` exactly, in load order
    pub fn films_by_cast(&self, cast: &str) -> impl Iterator<Item = &Film> {
        self.cast_index
            .get(cast)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|&idx| &self.films[idx])
    }

    /// Insert a film and update every index.
    ///
    /// Returns `false` when the title was already present. The film is still
    /// stored, but lookups keep resolving to the earlier record.
    pub fn insert_film(&mut self, film: Film) -> bool {
        let idx = self.films.len();
        self.genre_index.entry(film.genre).or_default().push(idx);
        self.cast_index.entry(film.cast.clone()).or_default().push(idx);

        let is_new = !self.film_lookup.contains_key(&film.name);
        if is_new {
            self.film_lookup.insert(film.name.clone(), idx);
        }
        self.films.push(film);
        is_new
    }

    /// Insert a user. Same duplicate policy as `insert_film`.
    pub fn insert_user(&mut self, user: User) -> bool {
        let idx = self.users.len();
        let is_new = !self.user_lookup.contains_key(&user.username);
        if is_new {
            self.user_lookup.insert(user.username.clone(), idx);
        }
        self.users.push(user);
        is_new
    }

    /// (users, films, watch entries) for logging and sanity checks
    pub fn counts(&self) -> (usize, usize, usize) {
        let entries = self.users.iter().map(|u| u.history.len()).sum();
        (self.users.len(), self.films.len(), entries)
    }
}
