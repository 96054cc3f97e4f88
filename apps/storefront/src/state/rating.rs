//! # Rating State
//!
//! Star ratings for the product page. Lives for the app's lifetime and is
//! not persisted.

use std::sync::Mutex;

use shoez_core::rating::ReviewRatings;

#[derive(Debug, Default)]
pub struct RatingState {
    ratings: Mutex<ReviewRatings>,
}

impl RatingState {
    pub fn new(ratings: ReviewRatings) -> Self {
        RatingState {
            ratings: Mutex::new(ratings),
        }
    }

    pub fn with_ratings<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ReviewRatings) -> R,
    {
        let ratings = self.ratings.lock().unwrap_or_else(|p| p.into_inner());
        f(&ratings)
    }

    pub fn with_ratings_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ReviewRatings) -> R,
    {
        let mut ratings = self.ratings.lock().unwrap_or_else(|p| p.into_inner());
        f(&mut ratings)
    }
}
