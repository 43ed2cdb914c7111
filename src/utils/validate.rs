use crate::types::error::AppError;
use chrono::{Datelike, Utc};

/// Release year of the first film.
pub const MIN_YEAR: i32 = 1888;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

/// Whether a rating exactly on the 0/10 endpoints is accepted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RatingPolicy {
    #[default]
    Inclusive,
    Exclusive,
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

pub fn validate_year(year: i32) -> Result<(), AppError> {
    if year < MIN_YEAR {
        return Err(AppError::Validation(format!(
            "year {} is before {}",
            year, MIN_YEAR
        )));
    }
    let max = current_year();
    if year > max {
        return Err(AppError::Validation(format!(
            "year {} is in the future (max {})",
            year, max
        )));
    }
    Ok(())
}

pub fn validate_rating(rating: f64, policy: RatingPolicy) -> Result<(), AppError> {
    // NaN fails every range comparison, so it has to be caught up front.
    if !rating.is_finite() {
        return Err(AppError::Validation(format!(
            "rating {} is not a finite number",
            rating
        )));
    }
    let out_of_range = match policy {
        RatingPolicy::Inclusive => rating < MIN_RATING || rating > MAX_RATING,
        RatingPolicy::Exclusive => rating <= MIN_RATING || rating >= MAX_RATING,
    };
    if out_of_range {
        return Err(AppError::Validation(format!(
            "rating {} is outside the {}-{} range",
            rating, MIN_RATING, MAX_RATING
        )));
    }
    Ok(())
}

/// Runs every write-time movie check. Called before any row is touched.
pub fn validate_movie_fields(year: i32, rating: f64, policy: RatingPolicy) -> Result<(), AppError> {
    validate_year(year)?;
    validate_rating(rating, policy)?;
    Ok(())
}
