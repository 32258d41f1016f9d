//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::error::AuthResult;

/// Credential store contract.
///
/// Both operations are single atomic statements at the storage layer; the
/// domain holds no locks around account creation. A uniqueness race on
/// `create` must surface as [`crate::error::AuthError::EmailTaken`], never
/// as a generic failure.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new account. Fails with `EmailTaken` if the email is
    /// already registered (detected from the unique index, not a
    /// read-then-write check).
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Look up an account by its exact (case-sensitive) email.
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>>;
}
