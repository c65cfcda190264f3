use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::external::database::CloudDatabaseError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cloud database error")]
    CloudDatabase(#[from] CloudDatabaseError),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::CloudDatabase(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let detail = match &self {
            AppError::CloudDatabase(err) => err.to_string(),
            AppError::Internal(err) => err.to_string(),
        };

        let body = ErrorBody {
            message: self.to_string(),
            error: detail,
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
