use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;

/// Static token guard for protected routes
///
/// Accepts `Authorization: Bearer <token>` as well as the bare token.
///
/// Usage:
/// ```rust,ignore
/// async fn protected_handler(_auth: TokenAuth) -> &'static str {
///     "only with a valid token"
/// }
/// ```
pub struct TokenAuth;

#[async_trait]
impl FromRequestParts<AppState> for TokenAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

        let token = header.strip_prefix("Bearer ").unwrap_or(header).trim();

        if token != &*state.token {
            tracing::debug!("rejected request with invalid token");
            return Err(ApiError::unauthorized("Unauthorized"));
        }

        Ok(TokenAuth)
    }
}
