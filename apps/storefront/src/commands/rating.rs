//! # Rating Commands

use shoez_core::rating::RatingView;
use tracing::debug;

use crate::error::ApiResult;
use crate::state::RatingState;

pub fn get_ratings(ratings: &RatingState) -> RatingView {
    ratings.with_ratings(|r| r.view())
}

/// Records a 1..=5 star pick. Out of range leaves the previous pick.
pub fn rate_product(ratings: &RatingState, star: u8) -> ApiResult<RatingView> {
    debug!(star, "rate_product command");
    ratings.with_ratings_mut(|r| -> ApiResult<RatingView> {
        r.rate(star)?;
        Ok(r.view())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_rate_and_overwrite() {
        let ratings = RatingState::default();
        assert_eq!(get_ratings(&ratings).user_rating, None);

        rate_product(&ratings, 4).unwrap();
        let view = rate_product(&ratings, 2).unwrap();
        assert_eq!(view.user_rating, Some(2));
        assert_eq!(view.stars, vec![true, true, false, false, false]);
        assert_eq!(view.average_display, "4.2 (5 ratings)");
    }

    #[test]
    fn test_out_of_range_keeps_previous() {
        let ratings = RatingState::default();
        rate_product(&ratings, 3).unwrap();

        assert_eq!(
            rate_product(&ratings, 6).unwrap_err().code,
            ErrorCode::ValidationError
        );
        assert_eq!(rate_product(&ratings, 0).unwrap_err().code, ErrorCode::ValidationError);
        assert_eq!(get_ratings(&ratings).user_rating, Some(3));
    }
}
