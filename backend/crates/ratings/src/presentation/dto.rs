//! API DTOs (Data Transfer Objects)
//!
//! Field names are snake_case on the wire, matching the existing mobile
//! client. The write request carries no account id; identity comes from
//! the bearer token only.

use serde::{Deserialize, Serialize};

use crate::domain::entities::RatingEntry;

/// POST /api/v1/ratings request body
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRatingRequest {
    pub category_id: String,
    pub score: i32,
    pub rated_date: String,
}

/// GET /api/v1/ratings query parameters
///
/// `days` is deserialized as a raw string so that a non-numeric value
/// falls back to the default window instead of failing extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct ListRatingsQuery {
    #[serde(default)]
    pub category_id: String,
    pub days: Option<String>,
}

/// One element of the windowed query response
#[derive(Debug, Clone, Serialize)]
pub struct RatingRecord {
    pub rated_date: String,
    pub score: i32,
}

impl From<RatingEntry> for RatingRecord {
    fn from(entry: RatingEntry) -> Self {
        Self {
            rated_date: entry.rated_date.format("%Y-%m-%d").to_string(),
            score: entry.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_create_request_deserializes() {
        let req: CreateRatingRequest = serde_json::from_str(
            r#"{"category_id":"mood","score":8,"rated_date":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(req.category_id, "mood");
        assert_eq!(req.score, 8);
        assert_eq!(req.rated_date, "2024-01-01");
    }

    #[test]
    fn test_record_wire_shape() {
        let record = RatingRecord::from(RatingEntry {
            rated_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            score: 3,
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["rated_date"], "2024-01-03");
        assert_eq!(json["score"], 3);
    }
}
