use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::TournamentError;

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

pub struct ApiError(TournamentError);

impl From<TournamentError> for ApiError {
    fn from(err: TournamentError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            TournamentError::UnknownPlayer { .. } => StatusCode::NOT_FOUND,
            TournamentError::SelfMatch { .. } => StatusCode::BAD_REQUEST,
            TournamentError::Storage { .. } | TournamentError::Pool { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("Request failed: {}", self.0);
        }

        let body = Json(ErrorBody {
            message: self.0.to_string(),
        });

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
