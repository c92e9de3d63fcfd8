// HTTP error responses with a JSON body
use crate::application::dashboard_service::ServiceError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

/// A terminal request failure: status code plus the message shown to the caller.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(id: impl std::fmt::Display) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("ID {} not found", id))
    }

    pub fn invalid_id(raw: &str) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Error converting ID {}", raw),
        )
    }

    pub fn invalid_json() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Unparsable JSON")
    }

    pub fn invalid_data(err: impl std::fmt::Display) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match &err {
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            ServiceError::InvalidData(cell_err) => Self::invalid_data(cell_err),
            ServiceError::IdGeneration { .. } | ServiceError::Persistence { .. } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("{}", self.message);
        } else {
            tracing::debug!("{} {}", self.status, self.message);
        }

        let body = Json(ErrorBody {
            code: self.status.as_u16(),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}
