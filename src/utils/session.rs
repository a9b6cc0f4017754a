use actix_web::HttpRequest;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::state::AppState;
use crate::utils;

/// Route guard: the bearer token must belong to the current session.
pub async fn require_session(req: &HttpRequest, state: &AppState) -> AppResult<Session> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|auth| auth.to_str().ok())
        .and_then(|auth| auth.split_whitespace().nth(1))
        .ok_or_else(|| AppError::Unauthorized("Missing token".to_string()))?;

    let claims = utils::jwt::validate_token(token, &state.config.jwt_secret).map_err(|err| {
        log::warn!("Rejected token: {}", err);
        AppError::Unauthorized("Invalid token".to_string())
    })?;

    let session_id = Uuid::parse_str(&claims.sid)
        .map_err(|_| AppError::Unauthorized("Invalid session in token".to_string()))?;

    state.sessions.verify(session_id, &claims.sub).await
}
