//! Domain Entities

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::value_objects::{RatedDate, Score};

/// A score for one (account, category, day) key, as written to storage.
///
/// The storage layer generates the row id and creation timestamp; the
/// domain only carries the composite key and the score.
#[derive(Debug, Clone)]
pub struct Rating {
    pub user_id: Uuid,
    pub category_id: String,
    pub score: Score,
    pub rated_date: RatedDate,
}

impl Rating {
    pub fn new(user_id: Uuid, category_id: String, score: Score, rated_date: RatedDate) -> Self {
        Self {
            user_id,
            category_id,
            score,
            rated_date,
        }
    }
}

/// One row of a windowed rating query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingEntry {
    pub rated_date: NaiveDate,
    pub score: i32,
}
