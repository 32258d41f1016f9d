//! List Ratings Use Case
//!
//! Date-windowed read for one account+category. The cutoff is computed
//! from "now" at call time; nothing is cached between calls.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::RatingEntry;
use crate::domain::repository::RatingRepository;
use crate::domain::value_objects::QueryWindow;
use crate::error::{RatingsError, RatingsResult};

/// Input DTO for list ratings
#[derive(Debug, Clone)]
pub struct ListRatingsInput {
    /// Verified account id from the auth gate
    pub user_id: Uuid,
    pub category_id: String,
    /// Raw `days` query parameter; anything non-positive or unparsable
    /// falls back to the 7-day default
    pub days: Option<String>,
}

/// List Ratings Use Case
pub struct ListRatingsUseCase<R>
where
    R: RatingRepository,
{
    repo: Arc<R>,
}

impl<R> ListRatingsUseCase<R>
where
    R: RatingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: ListRatingsInput) -> RatingsResult<Vec<RatingEntry>> {
        if input.category_id.trim().is_empty() {
            return Err(RatingsError::MissingCategory);
        }

        let window = QueryWindow::from_param(input.days.as_deref());
        let cutoff = window.cutoff_from(Utc::now().date_naive());

        self.repo
            .list_since(input.user_id, &input.category_id, cutoff)
            .await
    }
}
