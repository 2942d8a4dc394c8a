use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use domains::{AccessTokenClaims, DomainError, Result, TokenManager};

/// HS256 access-token verifier. Any verification failure collapses into a
/// single `Authentication` error so callers cannot distinguish a forged
/// token from an expired one.
pub struct JwtTokenManager {
    decoding_key: DecodingKey,
    validation: Validation,
}

#[derive(Deserialize)]
struct RawClaims {
    id: String,
    username: String,
}

impl JwtTokenManager {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl TokenManager for JwtTokenManager {
    fn verify_access_token(&self, token: &str) -> Result<AccessTokenClaims> {
        let data = jsonwebtoken::decode::<RawClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|err| {
                tracing::debug!(error = %err, "access token rejected");
                DomainError::Authentication("Missing authentication".into())
            })?;

        Ok(AccessTokenClaims {
            id: data.claims.id,
            username: data.claims.username,
        })
    }
}
