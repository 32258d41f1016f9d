//! Ratings Router
//!
//! The auth gate is layered here, inside the router constructor, so no
//! protected rating route can be registered without it.

use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use auth::middleware::{AuthGateState, require_auth};

use crate::domain::repository::RatingRepository;
use crate::infra::postgres::PgRatingRepository;
use crate::presentation::handlers::{self, RatingsAppState};

/// Create the ratings router with the PostgreSQL repository
pub fn ratings_router(repo: PgRatingRepository, gate: AuthGateState) -> Router {
    ratings_router_generic(repo, gate)
}

/// Create a generic ratings router for any repository implementation
pub fn ratings_router_generic<R>(repo: R, gate: AuthGateState) -> Router
where
    R: RatingRepository + Clone + Send + Sync + 'static,
{
    let state = RatingsAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            get(handlers::get_ratings::<R>).post(handlers::create_rating::<R>),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_auth))
        .with_state(state)
}
