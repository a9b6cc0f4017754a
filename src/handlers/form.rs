use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::draft::DraftPatch;
use crate::state::AppState;
use crate::utils;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OpenForm {
    employee_id: Option<Uuid>,
}

/// Opens an empty draft, or one pre-filled from `employeeId`.
pub async fn open_form(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: Option<web::Json<OpenForm>>,
) -> Result<HttpResponse, AppError> {
    utils::session::require_session(&req, &state).await?;

    let request = body.map(web::Json::into_inner).unwrap_or_default();
    let view = match request.employee_id {
        Some(id) => {
            let employee = state.employees.get(id).await?;
            state.form.open_edit(&employee).await
        }
        None => state.form.open_add().await,
    };
    Ok(HttpResponse::Ok().json(view))
}

pub async fn patch_form(
    req: HttpRequest,
    state: web::Data<AppState>,
    patch: web::Json<DraftPatch>,
) -> Result<HttpResponse, AppError> {
    utils::session::require_session(&req, &state).await?;

    let view = state.form.patch(patch.into_inner()).await?;
    Ok(HttpResponse::Ok().json(view))
}

pub async fn submit_form(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    utils::session::require_session(&req, &state).await?;

    let employee = state.form.submit(&state.employees).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn cancel_form(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    utils::session::require_session(&req, &state).await?;

    let discarded = state.form.cancel().await;
    Ok(HttpResponse::Ok().json(json!({ "discarded": discarded })))
}
