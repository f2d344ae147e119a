use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Domain errors surfaced to callers. Storage *read* failures never show up
/// here: reads are logged and masked as empty state (see `storage::load`),
/// so only write failures and domain violations reach a handler.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("no household exists on this device")]
    NoHousehold,

    #[error("invalid invite code")]
    InvalidInviteCode,

    #[error("plan not found")]
    PlanNotFound,

    #[error("{0}")]
    Validation(String),

    #[error("storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NoHousehold | AppError::PlanNotFound => StatusCode::NOT_FOUND,
            AppError::InvalidInviteCode | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(e) => {
                error!(error = %e, "storage write failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}
