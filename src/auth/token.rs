//! Signed session tokens.
//!
//! A session is not stored server-side. The cookie value is
//! `<payload-hex>.<mac-hex>` where the payload is a JSON claims object and the
//! MAC is HMAC-SHA256 over the hex payload with the configured secret key.
//! Tampering with either half fails verification.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Identity carried by a session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub user_id: i32,
    pub username: String,
}

impl SessionToken {
    pub fn new(user_id: i32, username: &str) -> Self {
        Self {
            user_id,
            username: username.to_string(),
        }
    }

    /// Serializes and signs the claims into a cookie value.
    pub fn sign(&self, secret: &str) -> String {
        let payload = hex::encode(serde_json::to_vec(self).expect("claims serialize"));
        let mut mac =
            HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        let tag = hex::encode(mac.finalize().into_bytes());
        format!("{payload}.{tag}")
    }

    /// Verifies the signature and decodes the claims. Returns None for any
    /// malformed, tampered, or wrongly-keyed token.
    pub fn verify(token: &str, secret: &str) -> Option<Self> {
        let (payload, tag) = token.split_once('.')?;
        let tag_bytes = hex::decode(tag).ok()?;

        let mut mac =
            HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        // verify_slice is constant-time
        mac.verify_slice(&tag_bytes).ok()?;

        let claims = hex::decode(payload).ok()?;
        serde_json::from_slice(&claims).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn round_trip() {
        let token = SessionToken::new(7, "alice").sign(SECRET);
        let claims = SessionToken::verify(&token, SECRET).unwrap();
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = SessionToken::new(7, "alice").sign(SECRET);
        assert!(SessionToken::verify(&token, "other-secret").is_none());
    }

    #[test]
    fn rejects_tampered_payload() {
        let token = SessionToken::new(7, "alice").sign(SECRET);
        let (payload, tag) = token.split_once('.').unwrap();
        let other_payload = hex::encode(
            serde_json::to_vec(&SessionToken::new(8, "alice")).unwrap(),
        );
        assert_ne!(payload, other_payload);
        let forged = format!("{other_payload}.{tag}");
        assert!(SessionToken::verify(&forged, SECRET).is_none());
    }

    #[test]
    fn rejects_garbage() {
        assert!(SessionToken::verify("", SECRET).is_none());
        assert!(SessionToken::verify("no-dot-here", SECRET).is_none());
        assert!(SessionToken::verify("abc.def", SECRET).is_none());
    }
}
