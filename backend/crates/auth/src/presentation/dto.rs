//! API DTOs (Data Transfer Objects)
//!
//! Field names are snake_case on the wire, matching the existing mobile
//! client.

use serde::{Deserialize, Serialize};

// ============================================================================
// Signup / Login
// ============================================================================

/// Request body shared by signup and login
#[derive(Debug, Clone, Deserialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

/// Public account info echoed back in the auth envelope
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
}

/// Token envelope returned by both signup (201) and login (200)
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_request_deserializes() {
        let req: AuthRequest =
            serde_json::from_str(r#"{"email":"a@example.com","password":"secret"}"#).unwrap();
        assert_eq!(req.email, "a@example.com");
        assert_eq!(req.password, "secret");
    }

    #[test]
    fn test_auth_response_wire_shape() {
        let resp = AuthResponse {
            token: "t".into(),
            user: UserInfo {
                id: "u1".into(),
                email: "a@example.com".into(),
            },
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["token"], "t");
        assert_eq!(json["user"]["id"], "u1");
        assert_eq!(json["user"]["email"], "a@example.com");
    }
}
