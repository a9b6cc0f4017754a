use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Validation(String),
    BadRequest(String),
    InvalidCredentials(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    ConfirmationRequired(String),
    InternalServerError(String),
    Configuration(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    /// The message shown inline by the view that triggered the action.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg)
            | AppError::BadRequest(msg)
            | AppError::InvalidCredentials(msg)
            | AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::ConfirmationRequired(msg)
            | AppError::InternalServerError(msg)
            | AppError::Configuration(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::InvalidCredentials(msg) => write!(f, "Invalid Credentials: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::ConfirmationRequired(msg) => write!(f, "Confirmation Required: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::Configuration(msg) => write!(f, "Configuration Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials(_) | AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::ConfirmationRequired(_) => StatusCode::PRECONDITION_REQUIRED,
            AppError::InternalServerError(_) | AppError::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.message().to_string(),
        })
    }
}

pub type AppResult<T> = Result<T, AppError>;
