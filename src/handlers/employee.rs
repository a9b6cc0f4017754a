use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::draft::{validate_draft, EmployeeDraft};
use crate::pipeline::{self, ListQuery};
use crate::state::AppState;
use crate::utils;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this employee?";

#[derive(Deserialize)]
pub struct DeleteParams {
    #[serde(default)]
    confirm: bool,
}

fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Employee not found".to_string()))
}

pub async fn get_employees(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    utils::session::require_session(&req, &state).await?;

    let records = state.employees.snapshot().await;
    let view = pipeline::run(records, &query, state.config.page_size);
    Ok(HttpResponse::Ok().json(view))
}

pub async fn get_employee(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    utils::session::require_session(&req, &state).await?;

    let employee = state.employees.get(parse_id(&id)?).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn create_employee(
    req: HttpRequest,
    state: web::Data<AppState>,
    new_employee: web::Json<EmployeeDraft>,
) -> Result<HttpResponse, AppError> {
    utils::session::require_session(&req, &state).await?;

    let valid = validate_draft(&new_employee)?;
    let employee = state.employees.insert(valid).await;
    Ok(HttpResponse::Created().json(employee))
}

pub async fn update_employee(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
    updates: web::Json<EmployeeDraft>,
) -> Result<HttpResponse, AppError> {
    utils::session::require_session(&req, &state).await?;

    let id = parse_id(&id)?;
    let valid = validate_draft(&updates)?;
    let employee = state.employees.update(id, valid).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Deletes only when the caller has answered the confirmation prompt.
pub async fn delete_employee(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
    params: web::Query<DeleteParams>,
) -> Result<HttpResponse, AppError> {
    utils::session::require_session(&req, &state).await?;

    let id = parse_id(&id)?;
    if !params.confirm {
        // Surface a missing target before asking for confirmation.
        state.employees.get(id).await?;
        return Err(AppError::ConfirmationRequired(
            DELETE_CONFIRMATION.to_string(),
        ));
    }

    state.employees.delete(id).await?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully",
    })))
}
