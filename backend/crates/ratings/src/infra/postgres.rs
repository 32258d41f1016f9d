//! PostgreSQL Repository Implementations

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Rating, RatingEntry};
use crate::domain::repository::RatingRepository;
use crate::error::RatingsResult;

/// PostgreSQL-backed rating store
#[derive(Clone)]
pub struct PgRatingRepository {
    pool: PgPool,
}

impl PgRatingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl RatingRepository for PgRatingRepository {
    async fn upsert(&self, rating: &Rating) -> RatingsResult<()> {
        // Single round trip; the composite unique key resolves concurrent
        // same-key writes without a read-modify-write window
        sqlx::query(
            r#"
            INSERT INTO ratings (user_id, category_id, score, rated_date)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, category_id, rated_date)
            DO UPDATE SET score = EXCLUDED.score
            "#,
        )
        .bind(rating.user_id)
        .bind(&rating.category_id)
        .bind(rating.score.value())
        .bind(rating.rated_date.as_date())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_since(
        &self,
        user_id: Uuid,
        category_id: &str,
        since: NaiveDate,
    ) -> RatingsResult<Vec<RatingEntry>> {
        let rows = sqlx::query_as::<_, RatingEntryRow>(
            r#"
            SELECT rated_date, score
            FROM ratings
            WHERE user_id = $1 AND category_id = $2 AND rated_date >= $3
            ORDER BY rated_date ASC
            "#,
        )
        .bind(user_id)
        .bind(category_id)
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(RatingEntryRow::into_entry).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct RatingEntryRow {
    rated_date: NaiveDate,
    score: i32,
}

impl RatingEntryRow {
    fn into_entry(self) -> RatingEntry {
        RatingEntry {
            rated_date: self.rated_date,
            score: self.score,
        }
    }
}
