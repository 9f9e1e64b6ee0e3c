mod authn_http;
mod authn_model;
mod profile_http;
mod profile_model;
pub mod state;

use crate::account::inbound::authn_http::{login, logout, recover, register, set_session, update_password};
use crate::account::inbound::profile_http::{get_profile, update_profile};
use crate::app::middleware::session;
use crate::app::state::AppState;
use axum::routing::{get, post, put};
use axum::{Router, middleware};

pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        // profile scope
        .route("/me", get(get_profile).patch(update_profile))
        // authentication scope
        .route("/auth/logout", post(logout))
        .route("/auth/password", put(update_password))
        .route_layer(middleware::from_fn(session));

    let public_routes = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/recover", post(recover))
        .route("/auth/session", post(set_session));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
