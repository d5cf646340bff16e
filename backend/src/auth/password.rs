//! Salted password hashing.
//!
//! Thin wrapper over bcrypt: every hash embeds its own random salt and cost,
//! and verification compares in constant time.

use super::errors::PasswordError;

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        bcrypt::hash(plaintext, self.cost).map_err(PasswordError::Hash)
    }

    /// Returns `Ok(false)` on mismatch; errors only when `hash` is not a
    /// bcrypt hash.
    pub fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(plaintext, hash).map_err(PasswordError::HashFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(TEST_COST)
    }

    #[test]
    fn hash_is_not_plaintext() {
        let hash = hasher().hash("p1").unwrap();
        assert!(!hash.is_empty());
        assert_ne!(hash, "p1");
    }

    #[test]
    fn verify_matches_only_hashed_password() {
        let hasher = hasher();
        let hash = hasher.hash("p1").unwrap();
        assert!(hasher.verify("p1", &hash).unwrap());
        assert!(!hasher.verify("p2", &hash).unwrap());
    }

    #[test]
    fn same_plaintext_gets_fresh_salt() {
        let hasher = hasher();
        let first = hasher.hash("p1").unwrap();
        let second = hasher.hash("p1").unwrap();
        assert_ne!(first, second);
        assert!(hasher.verify("p1", &first).unwrap());
        assert!(hasher.verify("p1", &second).unwrap());
    }

    #[test]
    fn empty_and_unicode_passwords() {
        let hasher = hasher();
        let empty = hasher.hash("").unwrap();
        assert!(hasher.verify("", &empty).unwrap());

        let unicode = hasher.hash("mot de passe é🔐").unwrap();
        assert!(hasher.verify("mot de passe é🔐", &unicode).unwrap());
        assert!(!hasher.verify("mot de passe e", &unicode).unwrap());
    }

    #[test]
    fn malformed_hash_is_format_error() {
        let err = hasher().verify("p1", "not-a-hash").unwrap_err();
        assert!(matches!(err, PasswordError::HashFormat(_)));
    }

    #[test]
    fn hash_records_cost() {
        let hash = hasher().hash("p1").unwrap();
        assert!(hash.starts_with("$2b$04$"));
    }
}
