//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases, token service, configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, bearer-token middleware, router
//!
//! ## Features
//! - User signup/login with email + password
//! - Stateless signed tokens (HS256), 7-day expiry, bearer transport only
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never stored or logged in clear
//! - Tokens carry {sub, email, iat, exp}; claims are trusted only after
//!   signature verification, with zero clock-skew leeway
//! - No server-side session table: possession of a validly signed,
//!   unexpired token is the proof of identity (deliberate tradeoff,
//!   forfeits revocation for stateless scaling)
//! - Login failures are uniform; unknown email and wrong password are
//!   indistinguishable to the client

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAuthRepository as CredentialStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
