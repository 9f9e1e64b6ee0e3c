//! Referral link and share orchestration.

use crate::account::domain::inout::profile::GetProfileInput;
use crate::account::usecase::profile::ProfileUseCase;
use crate::app::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use super::link::personalized_tool_url;
use super::tools::{Tool, ToolRegistry};
use super::whatsapp;

/// The tools page payload: a builder greeting plus one personalized link
/// per destination.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolBoard {
    pub greeting: String,
    pub links: Vec<ToolLink>,
}

/// One tool destination personalized for the requesting member.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolLink {
    pub tool: Tool,
    pub name: &'static str,
    pub description: &'static str,
    /// The destination with the member's referral attribution attached.
    pub url: String,
    /// One-tap WhatsApp share of `url` with the greeting message.
    pub share_url: String,
}

#[derive(Debug, Clone, Validate)]
pub struct ShareLinkInput {
    pub access_token: String,
    pub tool: Tool,
    /// Recipient phone number; when present the share targets that contact
    /// through `wa.me`, otherwise WhatsApp opens its contact picker.
    #[validate(custom(function = crate::account::domain::inout::validate_phone))]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShareLinkOutput {
    pub tool: Tool,
    /// The personalized referral link embedded in the message.
    pub url: String,
    pub whatsapp_url: String,
    pub targeted: bool,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReferralUseCase: Send + Sync {
    async fn tool_links(&self, access_token: String) -> Result<ToolBoard, AppError>;
    async fn share_link(&self, input: ShareLinkInput) -> Result<ShareLinkOutput, AppError>;
}

pub struct ReferralService {
    profile: Arc<dyn ProfileUseCase>,
    tools: ToolRegistry,
}

impl ReferralService {
    pub fn new(profile: Arc<dyn ProfileUseCase>, tools: ToolRegistry) -> Self {
        Self { profile, tools }
    }
}

#[async_trait]
impl ReferralUseCase for ReferralService {
    async fn tool_links(&self, access_token: String) -> Result<ToolBoard, AppError> {
        let profile = self
            .profile
            .get_profile(GetProfileInput { access_token })
            .await?
            .ok_or_else(|| AppError::Unauthorized("No active session.".to_string()))?;

        let links = Tool::ALL
            .into_iter()
            .map(|tool| {
                let url = personalized_tool_url(self.tools.base_url(tool), Some(&profile));
                let share_url = whatsapp::share_url(&tool.quick_share_message(), &url);
                ToolLink {
                    tool,
                    name: tool.name(),
                    description: tool.description(),
                    url,
                    share_url,
                }
            })
            .collect();

        Ok(ToolBoard {
            greeting: format!("Hola, {} 👋", profile.builder_name()),
            links,
        })
    }

    async fn share_link(&self, input: ShareLinkInput) -> Result<ShareLinkOutput, AppError> {
        input.validate()?;

        let profile = self
            .profile
            .get_profile(GetProfileInput {
                access_token: input.access_token,
            })
            .await?
            .ok_or_else(|| AppError::Unauthorized("No active session.".to_string()))?;

        let url = personalized_tool_url(self.tools.base_url(input.tool), Some(&profile));
        let message = input.tool.campaign_message();

        let (whatsapp_url, targeted) = match input.phone.as_deref() {
            Some(phone) => (whatsapp::send_url(phone, message, &url), true),
            None => (whatsapp::share_url(message, &url), false),
        };

        Ok(ShareLinkOutput {
            tool: input.tool,
            url,
            whatsapp_url,
            targeted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::domain::profile::UserProfile;
    use crate::account::domain::session::{AuthUser, UserMetadata};
    use crate::account::usecase::profile::MockProfileUseCase;
    use crate::app::config::ToolSettings;
    use chrono::Utc;

    fn profile() -> UserProfile {
        let user = AuthUser {
            id: "u1".to_string(),
            email: "m@x.com".to_string(),
            metadata: UserMetadata {
                full_name: Some("María José Pérez".to_string()),
                whatsapp: None,
            },
            created_at: Utc::now(),
        };
        UserProfile::merge(&user, None)
    }

    fn service(mock: MockProfileUseCase) -> ReferralService {
        ReferralService::new(
            Arc::new(mock),
            ToolRegistry::from_settings(&ToolSettings::default()),
        )
    }

    #[tokio::test]
    async fn tool_links_personalizes_both_destinations() {
        let mut profiles = MockProfileUseCase::new();
        profiles.expect_get_profile().returning(|_| Ok(Some(profile())));

        let board = service(profiles)
            .tool_links("at".to_string())
            .await
            .expect("links build");

        assert_eq!(board.greeting, "Hola, María 👋");
        assert_eq!(board.links.len(), 2);
        assert_eq!(
            board.links[0].url,
            "https://catalogo.4millones.com/?distribuidor=maria-jose"
        );
        assert_eq!(
            board.links[1].url,
            "https://oportunidad.4millones.com/?distribuidor=maria-jose"
        );
        assert!(board.links[0].share_url.starts_with("https://api.whatsapp.com/send?text="));
    }

    #[tokio::test]
    async fn tool_links_without_session_is_unauthorized() {
        let mut profiles = MockProfileUseCase::new();
        profiles.expect_get_profile().returning(|_| Ok(None));

        let err = service(profiles)
            .tool_links("stale".to_string())
            .await
            .expect_err("no session should fail");

        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn share_link_without_phone_opens_contact_picker() {
        let mut profiles = MockProfileUseCase::new();
        profiles.expect_get_profile().returning(|_| Ok(Some(profile())));

        let output = service(profiles)
            .share_link(ShareLinkInput {
                access_token: "at".to_string(),
                tool: Tool::Catalog,
                phone: None,
            })
            .await
            .expect("share builds");

        assert!(!output.targeted);
        assert!(output.whatsapp_url.starts_with("https://api.whatsapp.com/send?text="));
        assert_eq!(output.url, "https://catalogo.4millones.com/?distribuidor=maria-jose");
    }

    #[tokio::test]
    async fn share_link_with_phone_targets_the_contact() {
        let mut profiles = MockProfileUseCase::new();
        profiles.expect_get_profile().returning(|_| Ok(Some(profile())));

        let output = service(profiles)
            .share_link(ShareLinkInput {
                access_token: "at".to_string(),
                tool: Tool::Business,
                phone: Some("300 123 4567".to_string()),
            })
            .await
            .expect("share builds");

        assert!(output.targeted);
        assert!(output.whatsapp_url.starts_with("https://wa.me/573001234567?text="));
    }

    #[tokio::test]
    async fn share_link_validates_phone_before_touching_the_profile() {
        let mut profiles = MockProfileUseCase::new();
        profiles.expect_get_profile().never();

        let err = service(profiles)
            .share_link(ShareLinkInput {
                access_token: "at".to_string(),
                tool: Tool::Catalog,
                phone: Some("12".to_string()),
            })
            .await
            .expect_err("short phone should fail validation");

        assert!(matches!(err, AppError::Validation(_)));
    }
}
