//! Token Service
//!
//! Issues and verifies the signed, time-bounded identity assertion. Tokens
//! are stateless: nothing is persisted server-side, and possession of a
//! validly signed, unexpired token is sufficient proof of identity.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::UserId;
use crate::error::{AuthError, AuthResult};

/// Token claims.
///
/// Every field is required; a token missing any of them fails to
/// deserialize and is rejected as invalid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID (UUID as string)
    pub sub: String,
    /// Account email at issuance time
    pub email: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Verified identity extracted from a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentity {
    pub user_id: Uuid,
    pub email: String,
}

/// Signs and verifies identity tokens with a process-wide HS256 secret.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock-skew leeway: now >= exp is expired
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(&config.jwt_secret),
            decoding_key: DecodingKey::from_secret(&config.jwt_secret),
            validation,
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Issue a signed token for the given account.
    pub fn issue(&self, user_id: &UserId, email: &str) -> AuthResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenCreation(e.to_string()))
    }

    /// Verify a token and extract the identity it asserts.
    ///
    /// Fails with [`AuthError::TokenInvalid`] on any of: bad signature,
    /// malformed structure, missing claims, non-UUID subject, or expiry.
    pub fn verify(&self, token: &str) -> AuthResult<TokenIdentity> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| AuthError::TokenInvalid)?;

        let claims = data.claims;

        // jsonwebtoken treats exp == now as still valid; the contract here
        // is now >= exp means expired
        if Utc::now().timestamp() >= claims.exp {
            return Err(AuthError::TokenInvalid);
        }

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::TokenInvalid)?;

        Ok(TokenIdentity {
            user_id,
            email: claims.email,
        })
    }
}
