use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use super::app_error::AppError;
use crate::shared::utils::logger::LogContext;

pub const PROBLEM_JSON: &str = "application/problem+json";

/// RFC 7807 problem body returned for every failed request
#[derive(Debug, Clone, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: &'static str,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::OptimisticLockConflict(_) => StatusCode::PRECONDITION_FAILED,
            AppError::SlugAlreadyExists(_) | AppError::AlreadyAssigned(_) | AppError::Conflict(_) => {
                StatusCode::CONFLICT
            }
            AppError::DatabaseError(_)
            | AppError::ConfigurationError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "Invalid request",
            AppError::NotFound(_) => "Resource not found",
            AppError::OptimisticLockConflict(_) => "Version mismatch",
            AppError::SlugAlreadyExists(_) => "Attribute with this slug already exists",
            AppError::AlreadyAssigned(_) => "Attribute is already assigned to this category",
            AppError::Conflict(_) => "Resource already exists",
            AppError::DatabaseError(_)
            | AppError::ConfigurationError(_)
            | AppError::InternalError(_) => "Internal server error",
        }
    }

    pub fn to_problem(&self) -> ProblemDetails {
        let detail = match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::OptimisticLockConflict(msg)
            | AppError::SlugAlreadyExists(msg)
            | AppError::AlreadyAssigned(msg)
            | AppError::Conflict(msg) => Some(msg.clone()),
            // Never leak storage or config internals to callers
            _ => None,
        };

        ProblemDetails {
            problem_type: "about:blank",
            title: self.title().to_string(),
            status: self.status_code().as_u16(),
            detail,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if !self.is_client_error() {
            LogContext::error_with_context(&self, "Request failed");
        }

        let status = self.status_code();
        (
            status,
            [(header::CONTENT_TYPE, PROBLEM_JSON)],
            Json(self.to_problem()),
        )
            .into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}
