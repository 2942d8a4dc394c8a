use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use domains::{AccessTokenClaims, DomainError};

use crate::error::ApiError;
use crate::state::AppState;

/// Extractor that verifies the bearer token on protected routes.
pub struct AuthenticatedUser(pub AccessTokenClaims);

impl FromRequestParts<Arc<AppState>> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| {
                ApiError::from(DomainError::Authentication("Missing authentication".into()))
            })?;

        let claims = state.token_manager.verify_access_token(token)?;
        Ok(AuthenticatedUser(claims))
    }
}
