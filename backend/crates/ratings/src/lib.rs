//! Ratings Backend Module
//!
//! Per-user, per-category, per-day scores with idempotent upsert semantics.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Invariants
//! - Exactly one score per (account, category, date); a second submission
//!   replaces the score via a single atomic `ON CONFLICT` write, never a
//!   read-check-then-write sequence
//! - Scores live in the closed range [1, 10] and are validated before any
//!   storage call
//! - Rated dates are calendar days, no time-of-day component
//! - Windowed reads are recomputed fresh per call, ascending by date

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{RatingsError, RatingsResult};
pub use infra::postgres::PgRatingRepository;
pub use presentation::router::ratings_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgRatingRepository as RatingStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
