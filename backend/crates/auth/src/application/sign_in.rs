//! Sign In Use Case
//!
//! Verifies credentials and issues a fresh token. Every failure path that
//! depends on what the client sent collapses into `InvalidCredentials`, so
//! the response never reveals whether the email exists.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    pub token: String,
    pub user_id: String,
    pub email: String,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> SignInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let user = self
            .repo
            .find_by_email(input.email.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // A password that fails the policy cannot match any stored hash,
        // so it gets the same uniform rejection
        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.user_id, user.email.as_str())?;

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(SignInOutput {
            token,
            user_id: user.user_id.to_string(),
            email: user.email.into_string(),
        })
    }
}
