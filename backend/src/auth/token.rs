//! Signed, expiring access tokens (HS256 JWT).

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use super::errors::TokenError;
use super::models::Claims;

/// Issues and verifies access tokens with a process-wide secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenIssuer {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(TokenError::Signing)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(err.to_string()),
            })
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(b"test-secret-that-is-long-enough-for-hs256")
    }

    #[test]
    fn issued_token_verifies() {
        let issuer = issuer();
        let token = issuer.issue("account-1", Duration::hours(1)).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.sub, "account-1");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn expiry_is_one_ttl_after_issue() {
        let issuer = issuer();
        let token = issuer.issue("account-1", Duration::hours(1)).unwrap();
        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn past_expiry_is_expired() {
        let issuer = issuer();
        let token = issuer.issue("account-1", Duration::seconds(-10)).unwrap();
        assert!(matches!(issuer.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn foreign_secret_is_invalid() {
        let token = TokenIssuer::new(b"other-secret")
            .issue("account-1", Duration::hours(1))
            .unwrap();
        assert!(matches!(issuer().verify(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn tampered_payload_is_invalid() {
        let issuer = issuer();
        let token = issuer.issue("account-1", Duration::hours(1)).unwrap();
        let other = issuer.issue("account-2", Duration::hours(1)).unwrap();

        let parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

        assert!(matches!(issuer.verify(&forged), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn garbage_is_invalid() {
        let issuer = issuer();
        for token in ["", "not-a-jwt", "a.b.c"] {
            assert!(matches!(issuer.verify(token), Err(TokenError::Invalid(_))));
        }
    }
}
