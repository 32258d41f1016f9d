//! User Entity
//!
//! An account as persisted in the `users` table. Created once on signup,
//! never updated or deleted by this system.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::UserId;
use crate::domain::value_object::email::Email;

/// A registered account
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub email: Email,
    pub password_hash: HashedPassword,
    /// Persisted but never computed anywhere; the column exists in the
    /// schema and is carried as-is.
    pub login_streak: i32,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new account with a fresh ID and creation timestamp
    pub fn new(email: Email, password_hash: HashedPassword) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            login_streak: 0,
            created_at: Utc::now(),
        }
    }
}
