//! # Review Ratings
//!
//! Star widget state for a product page: the shopper's own star pick plus an
//! average over a fixed sample of existing reviews.
//!
//! The shopper's pick is never folded into the average. Both live only as
//! long as the widget does.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::validation::{validate_rating, ValidationResult};
use crate::MAX_RATING;

/// Ratings shown before any real reviews exist.
pub const SAMPLE_RATINGS: [u8; 5] = [5, 4, 3, 5, 4];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRatings {
    user_rating: Option<u8>,
    sample: Vec<u8>,
}

impl ReviewRatings {
    /// Widget over the built-in sample.
    pub fn new() -> Self {
        ReviewRatings::with_sample(SAMPLE_RATINGS.to_vec())
    }

    /// Widget over a custom sample. Values outside 1..=5 are dropped.
    pub fn with_sample(sample: Vec<u8>) -> Self {
        let sample = sample
            .into_iter()
            .filter(|star| validate_rating(*star).is_ok())
            .collect();
        ReviewRatings {
            user_rating: None,
            sample,
        }
    }

    /// Records the shopper's pick, replacing any earlier one.
    pub fn rate(&mut self, star: u8) -> ValidationResult<()> {
        validate_rating(star)?;
        debug!(star, previous = ?self.user_rating, "Rating selected");
        self.user_rating = Some(star);
        Ok(())
    }

    pub fn user_rating(&self) -> Option<u8> {
        self.user_rating
    }

    pub fn sample(&self) -> &[u8] {
        &self.sample
    }

    pub fn rating_count(&self) -> usize {
        self.sample.len()
    }

    /// Mean of the sample, 0 when the sample is empty.
    pub fn average(&self) -> f64 {
        if self.sample.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.sample.iter().map(|s| u32::from(*s)).sum();
        f64::from(sum) / self.sample.len() as f64
    }

    /// "4.2 (5 ratings)"
    pub fn average_display(&self) -> String {
        format!("{:.1} ({} ratings)", self.average(), self.rating_count())
    }

    /// Whether star number `star` renders filled.
    pub fn is_star_filled(&self, star: u8) -> bool {
        self.user_rating.is_some_and(|rating| rating >= star)
    }

    pub fn view(&self) -> RatingView {
        RatingView {
            user_rating: self.user_rating,
            stars: (1..=MAX_RATING).map(|s| self.is_star_filled(s)).collect(),
            average: self.average(),
            average_display: self.average_display(),
            rating_count: self.rating_count(),
        }
    }
}

impl Default for ReviewRatings {
    fn default() -> Self {
        Self::new()
    }
}

/// Rendered widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RatingView {
    pub user_rating: Option<u8>,
    /// One flag per star, 1 through 5.
    pub stars: Vec<bool>,
    pub average: f64,
    pub average_display: String,
    #[ts(type = "number")]
    pub rating_count: usize,
}
