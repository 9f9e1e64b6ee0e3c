//! Profile access layer.
//!
//! `get_profile` produces the canonical merged profile and degrades to
//! identity metadata alone when the extension table is unreadable.
//! `update_profile` writes to both stores; losing the extension-table write
//! is tolerated as long as the metadata write landed.

use crate::account::domain::inout::profile::{GetProfileInput, UpdateProfileInput, UpdateProfileOutput};
use crate::account::domain::profile::{ProfileRow, UserProfile};
use crate::account::domain::session::UserMetadata;
use crate::account::outbound::identity::IdentityProvider;
use crate::account::outbound::profiles::ProfileStore;
use crate::app::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileUseCase: Send + Sync {
    /// Returns the merged profile for the session behind `access_token`, or
    /// `None` when the token no longer resolves to a user. "No session" is
    /// never an error.
    async fn get_profile(&self, input: GetProfileInput) -> Result<Option<UserProfile>, AppError>;
    async fn update_profile(&self, input: UpdateProfileInput) -> Result<UpdateProfileOutput, AppError>;
}

#[derive(Clone)]
pub struct ProfileService {
    identity: Arc<dyn IdentityProvider>,
    profiles: Arc<dyn ProfileStore>,
}

impl ProfileService {
    pub fn new(identity: Arc<dyn IdentityProvider>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self { identity, profiles }
    }
}

#[async_trait]
impl ProfileUseCase for ProfileService {
    async fn get_profile(&self, input: GetProfileInput) -> Result<Option<UserProfile>, AppError> {
        let Some(user) = self.identity.get_user(&input.access_token).await? else {
            return Ok(None);
        };

        let row = match self.profiles.find_by_id(&input.access_token, &user.id).await {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(user_id = %user.id, "profile row read failed, using identity metadata: {err}");
                None
            },
        };

        Ok(Some(UserProfile::merge(&user, row)))
    }

    async fn update_profile(&self, input: UpdateProfileInput) -> Result<UpdateProfileOutput, AppError> {
        input.validate()?;

        let user = self
            .identity
            .get_user(&input.access_token)
            .await?
            .ok_or_else(|| AppError::Unauthorized("No active session.".to_string()))?;

        let metadata = UserMetadata {
            full_name: input.full_name.clone(),
            whatsapp: input.whatsapp.clone(),
        };

        let metadata_write = self.identity.update_metadata(&input.access_token, &metadata).await;
        let user = match &metadata_write {
            Ok(updated) => updated.clone(),
            Err(err) => {
                tracing::warn!(user_id = %user.id, "identity metadata write failed: {err}");
                user
            },
        };

        let row = ProfileRow {
            id: user.id.clone(),
            email: user.email.clone(),
            full_name: input.full_name.clone(),
            whatsapp: input.whatsapp.clone(),
            affiliate_link: input.affiliate_link.clone(),
            updated_at: Utc::now(),
        };

        match self.profiles.upsert(&input.access_token, row).await {
            Ok(stored) => Ok(UpdateProfileOutput {
                profile: UserProfile::merge(&user, Some(stored)),
                warning: None,
            }),
            Err(err) => {
                // Both stores rejected the write: the update did not land
                // anywhere, so the caller has to see the failure.
                if metadata_write.is_err() {
                    return Err(err);
                }

                tracing::warn!(user_id = %user.id, "profile row write failed, metadata write succeeded: {err}");

                // Best effort: the metadata write carried the new values, so
                // the returned profile reflects what the member submitted.
                Ok(UpdateProfileOutput {
                    profile: UserProfile {
                        id: user.id.clone(),
                        email: user.email.clone(),
                        full_name: input.full_name,
                        whatsapp: input.whatsapp,
                        affiliate_link: input.affiliate_link,
                        created_at: user.created_at,
                    },
                    warning: Some("El perfil se guardó parcialmente. Intenta de nuevo más tarde.".to_string()),
                })
            },
        }
    }
}
