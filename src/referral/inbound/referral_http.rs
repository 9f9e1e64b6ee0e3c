use crate::app::error::AppError;
use crate::app::extractors::{AppPath, AppQuery};
use crate::app::middleware::AccessToken;
use crate::app::response::Response;
use crate::app::state::AppState;
use crate::referral::inbound::referral_model::{ShareQuery, ShareResponse, ToolBoardResponse};
use crate::referral::tools::Tool;
use crate::referral::usecase::ShareLinkInput;
use axum::{debug_handler, extract::State, response::IntoResponse};

#[debug_handler]
pub async fn list_tools(State(state): State<AppState>, token: AccessToken) -> impl IntoResponse {
    state
        .referral
        .tool_links(token.0)
        .await
        .map(ToolBoardResponse::from)
        .map(Response::from)
}

#[debug_handler]
pub async fn share_tool(
    State(state): State<AppState>,
    token: AccessToken,
    AppPath(tool): AppPath<String>,
    AppQuery(query): AppQuery<ShareQuery>,
) -> impl IntoResponse {
    let tool: Tool = tool
        .parse()
        .map_err(|_| AppError::NotFound(format!("Unknown tool '{tool}'.")))?;

    state
        .referral
        .share_link(ShareLinkInput {
            access_token: token.0,
            tool,
            phone: query.phone,
        })
        .await
        .map(ShareResponse::from)
        .map(Response::from)
}
