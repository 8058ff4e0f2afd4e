//! Helper functions to build UserContext from the Catalog
//!
//! This module aggregates what the filters need to know about a user
//! into a UserContext, once per request.

use crate::types::UserContext;
use data_loader::{Catalog, Genre, User};

/// Build a UserContext for a known user
///
/// This gathers:
/// - Films watched (every title in the history, resolvable or not)
/// - Favorite genre (see [`favorite_genre`])
///
/// ## Learning Note
/// The context borrows from both the Catalog and the User, so it cannot
/// outlive either. That is exactly the lifetime of one request.
pub fn build_user_context<'a>(catalog: &'a Catalog, user: &'a User) -> UserContext<'a> {
    UserContext {
        user: Some(user),
        watched_films: user.watched().collect(),
        favorite_genre: favorite_genre(catalog, user),
    }
}

/// The genre a user has watched most often
///
/// ## Algorithm
/// 1. Resolve each watched title in history order; unknown titles are skipped
/// 2. Count genres, remembering the order each genre first appeared
/// 3. Scan genres in that order, replacing the leader only on a strictly
///    greater count, so on a tie the genre seen first keeps the lead
///
/// The tie rule is a compatibility decision: "first-encountered max" is
/// read as first appearance in the watch history, not as `Genre::ALL`
/// order. Changing it changes which films a cast recommendation returns.
///
/// Returns `None` when no watched title resolves to a catalog film.
pub fn favorite_genre(catalog: &Catalog, user: &User) -> Option<Genre> {
    let mut counts: Vec<(Genre, usize)> = Vec::new();

    for title in user.watched() {
        let Some(film) = catalog.find_film(title) else {
            continue;
        };
        match counts.iter_mut().find(|(genre, _)| *genre == film.genre) {
            Some((_, count)) => *count += 1,
            None => counts.push((film.genre, 1)),
        }
    }

    let mut leader: Option<(Genre, usize)> = None;
    for (genre, count) in counts {
        if leader.is_none_or(|(_, best)| count > best) {
            leader = Some((genre, count));
        }
    }
    leader.map(|(genre, _)| genre)
}
