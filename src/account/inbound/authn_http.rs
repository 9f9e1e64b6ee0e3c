use crate::account::domain::inout::authn::{LogoutInput, UpdatePasswordInput};
use crate::account::inbound::authn_model::{
    LoginRequest, LogoutResponse, RecoverRequest, RecoverResponse, RegisterRequest, RegisterResponse,
    SessionResponse, SetSessionRequest, UpdatePasswordRequest, UpdatePasswordResponse,
};
use crate::app::extractors::AppJson;
use crate::app::middleware::AccessToken;
use crate::app::response::Response;
use crate::app::state::AppState;
use axum::{debug_handler, extract::State, response::IntoResponse};

#[debug_handler]
pub async fn login(
    State(state): State<AppState>,
    AppJson(req): AppJson<LoginRequest>,
) -> impl IntoResponse {
    state
        .account
        .authn
        .login(req.into())
        .await
        .map(SessionResponse::from)
        .map(Response::from)
}

#[debug_handler]
pub async fn register(
    State(state): State<AppState>,
    AppJson(req): AppJson<RegisterRequest>,
) -> impl IntoResponse {
    state
        .account
        .authn
        .register(req.into())
        .await
        .map(RegisterResponse::from)
        .map(Response::from)
}

#[debug_handler]
pub async fn logout(State(state): State<AppState>, token: AccessToken) -> impl IntoResponse {
    state
        .account
        .authn
        .logout(LogoutInput {
            access_token: token.0,
        })
        .await
        .map(LogoutResponse::from)
        .map(Response::from)
}

#[debug_handler]
pub async fn recover(
    State(state): State<AppState>,
    AppJson(req): AppJson<RecoverRequest>,
) -> impl IntoResponse {
    state
        .account
        .authn
        .reset_password(req.into())
        .await
        .map(RecoverResponse::from)
        .map(Response::from)
}

#[debug_handler]
pub async fn update_password(
    State(state): State<AppState>,
    token: AccessToken,
    AppJson(req): AppJson<UpdatePasswordRequest>,
) -> impl IntoResponse {
    state
        .account
        .authn
        .update_password(UpdatePasswordInput {
            access_token: token.0,
            new_password: req.new_password,
        })
        .await
        .map(UpdatePasswordResponse::from)
        .map(Response::from)
}

#[debug_handler]
pub async fn set_session(
    State(state): State<AppState>,
    AppJson(req): AppJson<SetSessionRequest>,
) -> impl IntoResponse {
    state
        .account
        .authn
        .set_session(req.into())
        .await
        .map(SessionResponse::from)
        .map(Response::from)
}
