use crate::provider::FetchError;
use axum::http::StatusCode;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        let status = match err {
            FetchError::InvalidScope(_) => StatusCode::BAD_REQUEST,
            FetchError::Read { .. } | FetchError::Decode { .. } => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
