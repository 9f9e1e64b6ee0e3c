//! Generic wrapper for successful JSON API responses.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// A generic container for all successful API responses.
#[derive(Serialize)]
pub struct Response<T> {
    message: String,
    data: T,
}

impl<T> Response<T> {
    pub fn new(data: T) -> Self {
        Self {
            message: "successfully".to_string(),
            data,
        }
    }
}

impl<T> From<T> for Response<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
