use crate::account::domain::inout::profile::GetProfileInput;
use crate::account::inbound::profile_model::{ProfileResponse, UpdateProfileRequest, UpdateProfileResponse};
use crate::app::error::AppError;
use crate::app::extractors::AppJson;
use crate::app::middleware::AccessToken;
use crate::app::response::Response;
use crate::app::state::AppState;
use axum::{debug_handler, extract::State, response::IntoResponse};

#[debug_handler]
pub async fn get_profile(State(state): State<AppState>, token: AccessToken) -> impl IntoResponse {
    state
        .account
        .profile
        .get_profile(GetProfileInput {
            access_token: token.0,
        })
        .await?
        .map(ProfileResponse::from)
        .map(Response::from)
        .ok_or_else(|| AppError::Unauthorized("No active session.".to_string()))
}

#[debug_handler]
pub async fn update_profile(
    State(state): State<AppState>,
    token: AccessToken,
    AppJson(req): AppJson<UpdateProfileRequest>,
) -> impl IntoResponse {
    state
        .account
        .profile
        .update_profile(req.into_input(token.0))
        .await
        .map(UpdateProfileResponse::from)
        .map(Response::from)
}
