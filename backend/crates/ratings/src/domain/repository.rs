//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::entities::{Rating, RatingEntry};
use crate::error::RatingsResult;

/// Rating store contract.
///
/// `upsert` must be a single atomic insert-or-overwrite against the
/// (user, category, date) composite key; concurrent writes to the same key
/// must not lose updates, and the conflict resolution belongs to the
/// storage engine, not to domain code.
#[trait_variant::make(RatingRepository: Send)]
pub trait LocalRatingRepository {
    /// Insert the rating, or overwrite the score if the key already exists.
    async fn upsert(&self, rating: &Rating) -> RatingsResult<()>;

    /// All ratings for the account+category with `rated_date >= since`,
    /// ascending by date. Recomputed fresh on every call.
    async fn list_since(
        &self,
        user_id: Uuid,
        category_id: &str,
        since: NaiveDate,
    ) -> RatingsResult<Vec<RatingEntry>>;
}
