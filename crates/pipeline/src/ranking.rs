//! Ranking of scored candidates.
//!
//! Descending order with a three-level tie-break:
//! 1. score (higher first)
//! 2. imdb (higher first)
//! 3. name (lexicographically smaller first)
//!
//! Scores and imdb ratings are snapped to a 1e-6 grid before comparing, so
//! arithmetic noise such as `0.1 + 0.2` vs `0.3` compares equal. A plain
//! `|a - b| < eps` test is not transitive and would break `sort_by`.
//!
//! The grid only approximates "equal within 1e-6": two values less than
//! 1e-6 apart that straddle a rounding boundary (`1.0000004` and
//! `1.0000006`) still compare as different. Scores and ratings built from
//! one-decimal inputs never get that close to a boundary.

use sources::Candidate;
use std::cmp::Ordering;

/// Values closer than this are treated as equal
pub const SCORE_EPSILON: f64 = 1e-6;

fn quantize(value: f64) -> i64 {
    (value / SCORE_EPSILON).round() as i64
}

/// Present scores beat absent ones; two absent scores tie
fn compare_scores(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => quantize(b).cmp(&quantize(a)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// `Ordering::Less` means `a` ranks above `b`
pub fn compare_candidates(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    compare_scores(a.score, b.score)
        .then_with(|| quantize(b.film.imdb).cmp(&quantize(a.film.imdb)))
        .then_with(|| a.film.name.cmp(&b.film.name))
}

/// Sort candidates best first
pub fn rank<'a>(mut candidates: Vec<Candidate<'a>>) -> Vec<Candidate<'a>> {
    candidates.sort_by(compare_candidates);
    candidates
}

/// Sort candidates best first and keep at most `limit`
pub fn rank_top<'a>(candidates: Vec<Candidate<'a>>, limit: usize) -> Vec<Candidate<'a>> {
    let mut ranked = rank(candidates);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Film, Genre};
    use proptest::prelude::*;
    use sources::CandidateSource;

    fn film(name: &str, imdb: f64) -> Film {
        Film {
            name: name.to_string(),
            director: "dir".to_string(),
            cast: "cast".to_string(),
            genre: Genre::Comedy,
            imdb,
        }
    }

    fn names<'a>(ranked: &'a [Candidate<'_>]) -> Vec<&'a str> {
        ranked.iter().map(|c| c.film.name.as_str()).collect()
    }

    #[test]
    fn test_rank_by_score() {
        let films = [film("A", 5.0), film("B", 5.0), film("C", 5.0)];
        let candidates = vec![
            Candidate::new(&films[0], CandidateSource::Genre).with_score(1.0),
            Candidate::new(&films[1], CandidateSource::Genre).with_score(3.0),
            Candidate::new(&films[2], CandidateSource::Genre).with_score(2.0),
        ];

        assert_eq!(names(&rank(candidates)), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_equal_scores_fall_back_to_imdb_then_name() {
        let films = [film("Zeta", 7.0), film("Alpha", 7.0), film("Mid", 9.0)];
        let candidates = films
            .iter()
            .map(|f| Candidate::new(f, CandidateSource::Genre).with_score(0.0))
            .collect();

        assert_eq!(names(&rank(candidates)), vec!["Mid", "Alpha", "Zeta"]);
    }

    #[test]
    fn test_floating_point_noise_is_absorbed() {
        let films = [film("B", 6.0), film("A", 6.0)];
        // 0.1 + 0.2 != 0.3 in f64, but they rank as equal
        let candidates = vec![
            Candidate::new(&films[0], CandidateSource::Genre).with_score(0.1 + 0.2),
            Candidate::new(&films[1], CandidateSource::Genre).with_score(0.3),
        ];

        assert_eq!(names(&rank(candidates)), vec!["A", "B"]);
    }

    #[test]
    fn test_imdb_noise_falls_through_to_name() {
        let films = [film("B", 0.1 + 0.2), film("A", 0.3)];
        let candidates = films
            .iter()
            .map(|f| Candidate::new(f, CandidateSource::Genre).with_score(1.0))
            .collect();

        assert_eq!(names(&rank(candidates)), vec!["A", "B"]);
    }

    #[test]
    fn test_grid_boundary_is_not_a_tie() {
        let films = [film("A", 6.0), film("B", 6.0)];
        // 2e-7 apart but rounded to neighbouring grid points
        let candidates = vec![
            Candidate::new(&films[0], CandidateSource::Genre).with_score(1.000_000_4),
            Candidate::new(&films[1], CandidateSource::Genre).with_score(1.000_000_6),
        ];

        assert_eq!(names(&rank(candidates)), vec!["B", "A"]);
    }

    #[test]
    fn test_unscored_candidates_rank_by_imdb() {
        let films = [film("Low", 5.5), film("High", 8.1), film("Also High", 8.1)];
        let candidates = films
            .iter()
            .map(|f| Candidate::new(f, CandidateSource::Cast))
            .collect();

        assert_eq!(names(&rank(candidates)), vec!["Also High", "High", "Low"]);
    }

    #[test]
    fn test_rank_top_truncates() {
        let films = [film("A", 1.0), film("B", 2.0), film("C", 3.0), film("D", 4.0)];
        let candidates = films
            .iter()
            .map(|f| Candidate::new(f, CandidateSource::Cast))
            .collect();

        let top = rank_top(candidates, 2);
        assert_eq!(names(&top), vec!["D", "C"]);

        assert!(rank_top(Vec::new(), 3).is_empty());
    }

    proptest! {
        #[test]
        fn prop_rank_is_sorted_permutation(
            rows in prop::collection::vec(
                ("[a-e]{1,3}", 0.0f64..10.0, prop::option::of(-5.0f64..20.0)),
                0..30,
            )
        ) {
            let films: Vec<Film> = rows.iter().map(|(name, imdb, _)| film(name, *imdb)).collect();
            let candidates: Vec<Candidate> = films
                .iter()
                .zip(&rows)
                .map(|(f, (_, _, score))| Candidate { film: f, source: CandidateSource::Genre, score: *score })
                .collect();

            let ranked = rank(candidates.clone());

            prop_assert_eq!(ranked.len(), candidates.len());
            for pair in ranked.windows(2) {
                prop_assert_ne!(compare_candidates(&pair[0], &pair[1]), Ordering::Greater);
            }

            // Same multiset of films
            let mut before: Vec<*const Film> = candidates.iter().map(|c| c.film as *const Film).collect();
            let mut after: Vec<*const Film> = ranked.iter().map(|c| c.film as *const Film).collect();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }
    }
}
