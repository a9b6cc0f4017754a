use actix_web::{web, HttpRequest, HttpResponse};

use crate::errors::AppError;
use crate::state::AppState;
use crate::utils;

pub async fn upload_image(
    req: HttpRequest,
    state: web::Data<AppState>,
    file: web::Bytes,
) -> Result<HttpResponse, AppError> {
    utils::session::require_session(&req, &state).await?;

    let view = state
        .form
        .attach_image(file.to_vec(), state.config.max_image_bytes)
        .await?;
    Ok(HttpResponse::Accepted().json(view))
}
