use crate::package::Review;

/// Fold a review list into the displayed package rating: the arithmetic
/// mean of all review ratings, rounded to one decimal place.
///
/// `fallback` is the package's pre-review rating and is returned when the
/// list is empty, so this never divides by zero.
pub fn recompute_rating(reviews: &[Review], fallback: f64) -> f64 {
    if reviews.is_empty() {
        return fallback;
    }

    let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let mean = f64::from(total) / reviews.len() as f64;

    (mean * 10.0).round() / 10.0
}
