//! HTTP mapping for `AppError`.
//!
//! Wraps the core error type so it can implement actix's `ResponseError`,
//! and folds `anyhow` errors from the ports back into it. Store failures
//! surface as a generic 500; the repository has no retry.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use folio_core::AppError;
use std::fmt;

#[derive(Debug)]
pub struct ApiError(AppError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast::<AppError>() {
            Ok(app) => Self(app),
            Err(other) => {
                log::error!("store operation failed: {other:#}");
                Self(AppError::Internal("store operation failed".into()))
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            AppError::NotFound(..) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.0.to_string() }))
    }
}
