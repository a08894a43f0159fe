use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::views;

/// Errors that surface to the browser as an error page. Validation failures
/// never reach this enum; they re-render their form instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(_) => {
                let status = StatusCode::NOT_FOUND;
                (status, views::error_page(status, &self.to_string())).into_response()
            }
            AppError::Internal(error) => {
                log::error!("request failed: {error:#}");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                (
                    status,
                    views::error_page(status, "Something went wrong handling the request."),
                )
                    .into_response()
            }
        }
    }
}
