use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::errors::AppError;
use crate::services::auth_gate::LoginRequest;
use crate::state::AppState;
use crate::utils;

pub async fn login_handler(
    req: web::Json<LoginRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let previous = state.sessions.current().await;
    let identity = state.gate.authenticate(&req, &state.sessions).await?;

    // A replaced session takes its open form and table state with it.
    if let Some(previous) = previous {
        state.teardown_views().await;
        log::info!("{} signed in over {}", identity.username, previous.username);
    }
    Ok(HttpResponse::Ok().json(identity))
}

pub async fn logout_handler(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let session = utils::session::require_session(&req, &state).await?;

    state.sessions.end().await;
    state.teardown_views().await;
    log::info!("{} logged out", session.username);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Logged out",
        "redirect": "/v1/auth",
    })))
}
