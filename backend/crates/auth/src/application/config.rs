//! Application Configuration
//!
//! Configuration for the Auth application layer. The signing secret is
//! loaded once at startup and is immutable for the process lifetime;
//! rotation is out of scope.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Symmetric secret for HS256 token signing
    pub jwt_secret: Vec<u8>,
    /// Token lifetime (7 days)
    pub token_ttl: Duration,
}

// Deliberately no `Default`: there is no sane default signing secret, and
// an all-zero one must not be reachable through `..Default::default()`.
impl AuthConfig {
    /// Token lifetime: one week
    const TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 3600);

    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            jwt_secret: secret,
            token_ttl: Self::TOKEN_TTL,
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Create config from an externally supplied secret
    pub fn from_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: secret.into(),
            token_ttl: Self::TOKEN_TTL,
        }
    }

    /// Token TTL in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }
}
