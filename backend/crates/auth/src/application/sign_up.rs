//! Sign Up Use Case
//!
//! Creates a new account and issues its first token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub token: String,
    pub user_id: String,
    pub email: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> SignUpUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // All validation happens before any storage call
        let email = Email::new(input.email)?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::PasswordPolicy(e.to_string()))?;
        let password_hash = password
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // The unique index on email is the arbiter of duplicates; a race
        // between two signups surfaces as EmailTaken from the insert
        let user = User::new(email, password_hash);
        self.repo.create(&user).await?;

        let token = self.tokens.issue(&user.user_id, user.email.as_str())?;

        tracing::info!(user_id = %user.user_id, "User signed up");

        Ok(SignUpOutput {
            token,
            user_id: user.user_id.to_string(),
            email: user.email.into_string(),
        })
    }
}
