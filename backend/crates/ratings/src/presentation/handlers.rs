//! HTTP Handlers
//!
//! Both handlers sit behind the auth gate; the caller's identity comes
//! exclusively from the [`CurrentUser`] extractor.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::extract::Json;
use std::sync::Arc;

use auth::middleware::CurrentUser;

use crate::application::{
    ListRatingsInput, ListRatingsUseCase, SubmitRatingInput, SubmitRatingUseCase,
};
use crate::domain::repository::RatingRepository;
use crate::error::RatingsResult;
use crate::presentation::dto::{CreateRatingRequest, ListRatingsQuery, RatingRecord};

/// Shared state for ratings handlers
#[derive(Clone)]
pub struct RatingsAppState<R>
where
    R: RatingRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Create Rating
// ============================================================================

/// POST /api/v1/ratings
pub async fn create_rating<R>(
    State(state): State<RatingsAppState<R>>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateRatingRequest>,
) -> RatingsResult<impl IntoResponse>
where
    R: RatingRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitRatingUseCase::new(state.repo.clone());

    use_case
        .execute(SubmitRatingInput {
            user_id: user.user_id,
            category_id: req.category_id,
            score: req.score,
            rated_date: req.rated_date,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "status": "ok" })),
    ))
}

// ============================================================================
// List Ratings
// ============================================================================

/// GET /api/v1/ratings?category_id=...&days=N
pub async fn get_ratings<R>(
    State(state): State<RatingsAppState<R>>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<ListRatingsQuery>,
) -> RatingsResult<Json<Vec<RatingRecord>>>
where
    R: RatingRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListRatingsUseCase::new(state.repo.clone());

    let entries = use_case
        .execute(ListRatingsInput {
            user_id: user.user_id,
            category_id: query.category_id,
            days: query.days,
        })
        .await?;

    Ok(Json(entries.into_iter().map(RatingRecord::from).collect()))
}
