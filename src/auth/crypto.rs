use sha2::{Digest, Sha256};

/// One-way digest of a password, stored instead of the plaintext.
///
/// This is a plain unsalted SHA-256 hex digest with no work factor. That is a
/// known weakness (see DESIGN.md); changing it would invalidate every stored
/// credential, so it is flagged rather than silently replaced.
pub fn digest_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable() {
        assert_eq!(digest_password("hunter2"), digest_password("hunter2"));
    }

    #[test]
    fn digest_differs_per_password() {
        assert_ne!(digest_password("hunter2"), digest_password("hunter3"));
    }

    #[test]
    fn digest_is_sha256_hex() {
        // sha256("") is a well-known vector
        assert_eq!(
            digest_password(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
