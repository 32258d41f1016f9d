//! Unit tests for the ratings crate
//!
//! Use cases run against an in-memory store keyed exactly like the
//! Postgres table; the gated router runs via `tower::ServiceExt`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::application::{
    ListRatingsInput, ListRatingsUseCase, SubmitRatingInput, SubmitRatingUseCase,
};
use crate::domain::entities::{Rating, RatingEntry};
use crate::domain::repository::RatingRepository;
use crate::error::{RatingsError, RatingsResult};

/// Rating store backed by a map on the (account, category, date) composite
/// key, so a second write to the same key overwrites like `ON CONFLICT`.
#[derive(Clone, Default)]
struct InMemoryRatings {
    rows: Arc<Mutex<HashMap<(Uuid, String, NaiveDate), i32>>>,
}

impl RatingRepository for InMemoryRatings {
    async fn upsert(&self, rating: &Rating) -> RatingsResult<()> {
        self.rows.lock().unwrap().insert(
            (
                rating.user_id,
                rating.category_id.clone(),
                rating.rated_date.as_date(),
            ),
            rating.score.value(),
        );
        Ok(())
    }

    async fn list_since(
        &self,
        user_id: Uuid,
        category_id: &str,
        since: NaiveDate,
    ) -> RatingsResult<Vec<RatingEntry>> {
        let rows = self.rows.lock().unwrap();
        let mut entries: Vec<RatingEntry> = rows
            .iter()
            .filter(|((uid, cat, date), _)| {
                *uid == user_id && cat.as_str() == category_id && *date >= since
            })
            .map(|((_, _, date), score)| RatingEntry {
                rated_date: *date,
                score: *score,
            })
            .collect();
        entries.sort_by_key(|e| e.rated_date);
        Ok(entries)
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

mod use_case_tests {
    use super::*;

    #[tokio::test]
    async fn test_resubmission_overwrites_score() {
        let repo = Arc::new(InMemoryRatings::default());
        let user_id = Uuid::new_v4();
        let submit = SubmitRatingUseCase::new(repo.clone());

        for score in [5, 8] {
            submit
                .execute(SubmitRatingInput {
                    user_id,
                    category_id: "mood".into(),
                    score,
                    rated_date: "2024-01-02".into(),
                })
                .await
                .unwrap();
        }

        // One row for the key, carrying the later score
        let rows = repo.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[&(user_id, "mood".to_string(), date("2024-01-02"))], 8);
    }

    #[tokio::test]
    async fn test_out_of_range_score_rejected_before_storage() {
        let repo = Arc::new(InMemoryRatings::default());
        let submit = SubmitRatingUseCase::new(repo.clone());

        for score in [0, 11, -1] {
            let err = submit
                .execute(SubmitRatingInput {
                    user_id: Uuid::new_v4(),
                    category_id: "mood".into(),
                    score,
                    rated_date: "2024-01-02".into(),
                })
                .await
                .unwrap_err();
            assert!(matches!(err, RatingsError::InvalidScore(s) if s == score));
        }
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_date_rejected() {
        let repo = Arc::new(InMemoryRatings::default());
        let submit = SubmitRatingUseCase::new(repo.clone());

        for bad in ["02/01/2024", "2024-13-01", "2024-1-2", "today", ""] {
            let err = submit
                .execute(SubmitRatingInput {
                    user_id: Uuid::new_v4(),
                    category_id: "mood".into(),
                    score: 5,
                    rated_date: bad.into(),
                })
                .await
                .unwrap_err();
            assert!(matches!(err, RatingsError::InvalidDate(_)));
        }
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_category_rejected() {
        let repo = Arc::new(InMemoryRatings::default());

        let err = SubmitRatingUseCase::new(repo.clone())
            .execute(SubmitRatingInput {
                user_id: Uuid::new_v4(),
                category_id: "  ".into(),
                score: 5,
                rated_date: "2024-01-02".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RatingsError::MissingCategory));

        let err = ListRatingsUseCase::new(repo)
            .execute(ListRatingsInput {
                user_id: Uuid::new_v4(),
                category_id: "".into(),
                days: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RatingsError::MissingCategory));
    }

    #[tokio::test]
    async fn test_listing_is_scoped_and_ascending() {
        let repo = Arc::new(InMemoryRatings::default());
        let user_id = Uuid::new_v4();
        let other_user = Uuid::new_v4();
        let submit = SubmitRatingUseCase::new(repo.clone());

        let today = chrono::Utc::now().date_naive();
        let d = |offset: i64| (today - chrono::Duration::days(offset)).format("%Y-%m-%d");

        for (uid, cat, score, offset) in [
            (user_id, "mood", 3, 1_i64),
            (user_id, "mood", 8, 4),
            (user_id, "sleep", 6, 1),  // other category, excluded
            (other_user, "mood", 9, 1), // other account, excluded
            (user_id, "mood", 2, 30),   // outside the 7-day window
        ] {
            submit
                .execute(SubmitRatingInput {
                    user_id: uid,
                    category_id: cat.into(),
                    score,
                    rated_date: d(offset).to_string(),
                })
                .await
                .unwrap();
        }

        let entries = ListRatingsUseCase::new(repo)
            .execute(ListRatingsInput {
                user_id,
                category_id: "mood".into(),
                days: None,
            })
            .await
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries[0].rated_date < entries[1].rated_date);
        assert_eq!(entries[0].score, 8);
        assert_eq!(entries[1].score, 3);
    }

    #[tokio::test]
    async fn test_bad_days_parameter_falls_back_to_default() {
        let repo = Arc::new(InMemoryRatings::default());
        let user_id = Uuid::new_v4();
        let submit = SubmitRatingUseCase::new(repo.clone());

        let today = chrono::Utc::now().date_naive();
        // 3 days back: inside the 7-day default, outside a 1-day window
        let inside = (today - chrono::Duration::days(3))
            .format("%Y-%m-%d")
            .to_string();
        submit
            .execute(SubmitRatingInput {
                user_id,
                category_id: "mood".into(),
                score: 5,
                rated_date: inside,
            })
            .await
            .unwrap();

        let list = ListRatingsUseCase::new(repo);
        for bad in [Some("abc"), Some(""), Some("0"), Some("-3"), None] {
            let entries = list
                .execute(ListRatingsInput {
                    user_id,
                    category_id: "mood".into(),
                    days: bad.map(String::from),
                })
                .await
                .unwrap();
            assert_eq!(entries.len(), 1, "days={bad:?} should use the default");
        }

        let entries = list
            .execute(ListRatingsInput {
                user_id,
                category_id: "mood".into(),
                days: Some("1".into()),
            })
            .await
            .unwrap();
        assert!(entries.is_empty());
    }
}

mod router_tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use auth::application::config::AuthConfig;
    use auth::application::token::TokenService;
    use auth::middleware::AuthGateState;

    use crate::presentation::router::ratings_router_generic;

    fn gated_router() -> (axum::Router, Arc<TokenService>, Arc<InMemoryRatings>) {
        let tokens = Arc::new(TokenService::new(&AuthConfig::with_random_secret()));
        let repo = Arc::new(InMemoryRatings::default());
        let router = ratings_router_generic(
            (*repo).clone(),
            AuthGateState {
                tokens: tokens.clone(),
            },
        );
        (router, tokens, repo)
    }

    #[tokio::test]
    async fn test_routes_reject_missing_token() {
        let (router, _, _) = gated_router();

        let res = router
            .oneshot(
                Request::builder()
                    .uri("/?category_id=mood")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_with_valid_token() {
        let (router, tokens, repo) = gated_router();

        let user_id = kernel::id::Id::new();
        let token = tokens.issue(&user_id, "user@example.com").unwrap();

        let res = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"category_id":"mood","score":7,"rated_date":"2024-01-02"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);

        let rows = repo.rows.lock().unwrap();
        assert_eq!(
            rows[&(*user_id.as_uuid(), "mood".to_string(), date("2024-01-02"))],
            7
        );
    }

    #[tokio::test]
    async fn test_mistyped_payload_answers_bad_request() {
        let (router, tokens, repo) = gated_router();

        let user_id = kernel::id::Id::new();
        let token = tokens.issue(&user_id, "user@example.com").unwrap();

        // String score: a shape error, answered 400 rather than axum's 422
        let res = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"category_id":"mood","score":"seven","rated_date":"2024-01-02"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(repo.rows.lock().unwrap().is_empty());
    }
}
