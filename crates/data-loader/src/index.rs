//! Catalog building logic.
//!
//! This module builds the Catalog from the two parsed CSV files:
//! - Parse films and users in parallel
//! - Insert films first so user histories can be cross-checked
//! - Report dangling references without failing the load

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::{info, warn};

impl Catalog {
    /// Load the catalog from a users file and a films file
    ///
    /// This is the main entry point for loading data.
    ///
    /// Steps:
    /// 1. Parse both files IN PARALLEL using Rayon
    /// 2. Insert films, then users (duplicates are logged, first one wins)
    /// 3. Validate cross references
    pub fn load_from_files(users_path: &Path, films_path: &Path) -> Result<Self> {
        info!(
            users = %users_path.display(),
            films = %films_path.display(),
            "Loading catalog"
        );

        let (films, users) = rayon::join(
            || parser::parse_films(films_path),
            || parser::parse_users(users_path),
        );
        let films = films?;
        let users = users?;

        let mut catalog = Catalog::new();

        for film in films {
            let name = film.name.clone();
            if !catalog.insert_film(film) {
                warn!(film = %name, "Duplicate film title, keeping the first record for lookups");
            }
        }

        for user in users {
            let username = user.username.clone();
            if !catalog.insert_user(user) {
                warn!(user = %username, "Duplicate username, keeping the first record for lookups");
            }
        }

        let dangling = catalog.validate();

        let (users, films, entries) = catalog.counts();
        info!(
            users,
            films,
            entries,
            dangling,
            "Catalog successfully built"
        );
        Ok(catalog)
    }

    /// Check that every watched title refers to a film in the catalog
    ///
    /// Unknown titles are legal (they simply contribute nothing when
    /// scoring), so this only warns. Returns how many entries dangle.
    pub fn validate(&self) -> usize {
        let mut dangling = 0;
        for user in &self.users {
            for title in user.watched() {
                if self.find_film(title).is_none() {
                    warn!(user = %user.username, film = %title, "Watched film is not in the catalog");
                    dangling += 1;
                }
            }
        }
        dangling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_load_from_files() {
        let films = write_temp(
            "name,director,cast,genre,imdb\n\
             A,dirX,castY,Comedy,8.0\n\
             B,dirX,castY,Comedy,6.0\n\
             C,dirZ,castW,Drama,7.1\n",
        );
        let users = write_temp(
            "username,watched,ratings\n\
             bob,A,Perfect\n\
             amy,C;Missing,Average;Poor\n",
        );

        let catalog = Catalog::load_from_files(users.path(), films.path()).unwrap();

        assert_eq!(catalog.counts(), (2, 3, 3));
        assert_eq!(catalog.find_film("B").unwrap().imdb, 6.0);
        assert_eq!(catalog.find_user("amy").unwrap().history.len(), 2);
        assert_eq!(catalog.films_by_genre(Genre::Comedy).count(), 2);
        assert_eq!(catalog.validate(), 1);
    }

    #[test]
    fn test_load_duplicate_titles_first_wins() {
        let films = write_temp(
            "name,director,cast,genre,imdb\n\
             A,first,castY,Comedy,8.0\n\
             A,second,castY,Drama,6.0\n",
        );
        let users = write_temp("username,watched,ratings\n");

        let catalog = Catalog::load_from_files(users.path(), films.path()).unwrap();

        assert_eq!(catalog.films().len(), 2);
        assert_eq!(catalog.find_film("A").unwrap().director, "first");
    }

    #[test]
    fn test_load_missing_users_file() {
        let films = write_temp("name,director,cast,genre,imdb\n");
        let result = Catalog::load_from_files(Path::new("nope/users.csv"), films.path());
        assert!(result.is_err());
    }
}
