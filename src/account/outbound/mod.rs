pub mod identity;
pub mod profiles;

use crate::app::error::AppError;
use serde::Deserialize;

/// Error body shapes returned by the backend. GoTrue uses
/// `error`/`error_description` or `msg`; PostgREST uses `message`.
#[derive(Deserialize)]
struct ErrorPayload {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

/// Maps a non-success backend response to an `AppError::Auth` carrying the
/// provider's own message verbatim, falling back to the bare status code
/// when the body is not one of the known shapes.
pub(crate) async fn provider_error(response: reqwest::Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<ErrorPayload>(&body)
        .ok()
        .and_then(|e| e.error_description.or(e.msg).or(e.message).or(e.error))
        .unwrap_or_else(|| format!("backend returned status {status}"));

    AppError::Auth { status, message }
}
