use serde::{Deserialize, Serialize};

use crate::referral::usecase::{ShareLinkOutput, ToolBoard, ToolLink};

#[derive(Debug, Deserialize)]
pub struct ShareQuery {
    pub phone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ToolBoardResponse {
    pub greeting: String,
    pub tools: Vec<ToolLinkResponse>,
}

impl From<ToolBoard> for ToolBoardResponse {
    fn from(board: ToolBoard) -> Self {
        Self {
            greeting: board.greeting,
            tools: board.links.into_iter().map(ToolLinkResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ToolLinkResponse {
    pub tool: String,
    pub name: &'static str,
    pub description: &'static str,
    pub url: String,
    pub share_url: String,
}

impl From<ToolLink> for ToolLinkResponse {
    fn from(link: ToolLink) -> Self {
        Self {
            tool: link.tool.to_string(),
            name: link.name,
            description: link.description,
            url: link.url,
            share_url: link.share_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub tool: String,
    pub url: String,
    pub whatsapp_url: String,
    pub targeted: bool,
}

impl From<ShareLinkOutput> for ShareResponse {
    fn from(output: ShareLinkOutput) -> Self {
        Self {
            tool: output.tool.to_string(),
            url: output.url,
            whatsapp_url: output.whatsapp_url,
            targeted: output.targeted,
        }
    }
}
