mod referral_http;
mod referral_model;

use crate::app::middleware::session;
use crate::app::state::AppState;
use crate::referral::inbound::referral_http::{list_tools, share_tool};
use axum::routing::get;
use axum::{Router, middleware};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/tools", get(list_tools))
        .route("/tools/{tool}/share", get(share_tool))
        .route_layer(middleware::from_fn(session))
        .with_state(state)
}
