//! Submit Rating Use Case
//!
//! Validates then writes a single score. Validation failures are reported
//! before any storage call is made.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::Rating;
use crate::domain::repository::RatingRepository;
use crate::domain::value_objects::{RatedDate, Score};
use crate::error::{RatingsError, RatingsResult};

/// Input DTO for submit rating
#[derive(Debug, Clone)]
pub struct SubmitRatingInput {
    /// Verified account id from the auth gate, never from the request body
    pub user_id: Uuid,
    pub category_id: String,
    pub score: i32,
    pub rated_date: String,
}

/// Submit Rating Use Case
pub struct SubmitRatingUseCase<R>
where
    R: RatingRepository,
{
    repo: Arc<R>,
}

impl<R> SubmitRatingUseCase<R>
where
    R: RatingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: SubmitRatingInput) -> RatingsResult<()> {
        if input.category_id.trim().is_empty() {
            return Err(RatingsError::MissingCategory);
        }

        let score = Score::new(input.score).ok_or(RatingsError::InvalidScore(input.score))?;

        let rated_date = RatedDate::parse(&input.rated_date)
            .ok_or_else(|| RatingsError::InvalidDate(input.rated_date.clone()))?;

        let rating = Rating::new(input.user_id, input.category_id, score, rated_date);
        self.repo.upsert(&rating).await?;

        tracing::info!(
            user_id = %rating.user_id,
            category_id = %rating.category_id,
            rated_date = %rating.rated_date,
            "Rating stored"
        );

        Ok(())
    }
}
