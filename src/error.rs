use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::handlers::shared::ApiResponse;

/// Machine-readable code sent with a duplicate registration.
pub const EMAIL_ALREADY_EXISTS: &str = "emailAlreadyExists";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conflict: {message}")]
    Conflict { message: String, code: &'static str },

    #[error("Internal server error{}", .0.as_ref().map_or("".to_string(), |s| format!(": {}", s)))]
    InternalServerError(Option<String>),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        // Internals stay in the log, clients get a generic message
        let error_message = match self {
            AppError::DatabaseError(_) | AppError::InternalServerError(_) => {
                "Internal server error".to_string()
            }
            AppError::NotFound(message)
            | AppError::BadRequest(message)
            | AppError::Unauthorized(message)
            | AppError::Conflict { message, .. } => message.clone(),
        };

        log::error!("Request failed with status {}: {}", status_code, self);

        let mut response_body = ApiResponse::<()>::error(&error_message);
        if let AppError::Conflict { code, .. } = self {
            response_body = response_body.with_code(code);
        }

        HttpResponse::build(status_code).json(response_body)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        log::error!("Database error: {}", error);
        AppError::DatabaseError(error)
    }
}

impl AppError {
    pub fn internal_server_error_message(message: impl Into<String>) -> Self {
        AppError::InternalServerError(Some(message.into()))
    }

    pub fn duplicate_email() -> Self {
        AppError::Conflict {
            message: "Email already registered".to_string(),
            code: EMAIL_ALREADY_EXISTS,
        }
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> Self {
        log::error!("Password hashing error: {}", error);
        AppError::InternalServerError(Some(error.to_string()))
    }
}
