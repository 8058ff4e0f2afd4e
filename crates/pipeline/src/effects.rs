//! Rating translator: qualitative labels to numeric affinity effects.
//!
//! Two independent scales. A director match swings harder than a cast
//! match in both directions. Unknown labels are neutral.

use data_loader::RatingLabel;

/// Effect of a rating on a film sharing the candidate's director
pub fn director_effect(label: &RatingLabel) -> f64 {
    match label {
        RatingLabel::Perfect => 10.0,
        RatingLabel::Average => 5.0,
        RatingLabel::Poor => -1.0,
        RatingLabel::Other(_) => 0.0,
    }
}

/// Effect of a rating on a film sharing the candidate's cast
pub fn cast_effect(label: &RatingLabel) -> f64 {
    match label {
        RatingLabel::Perfect => 7.0,
        RatingLabel::Average => 4.0,
        RatingLabel::Poor => -2.0,
        RatingLabel::Other(_) => 0.0,
    }
}
