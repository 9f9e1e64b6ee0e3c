//! GoTrue-compatible identity provider client.
//!
//! Thin pass-throughs to the external auth backend. Every call attaches the
//! project `apikey`; user-scoped calls additionally send the caller's bearer
//! token. The base endpoint is kept as a raw string and parsed per call so a
//! placeholder or malformed configuration surfaces as a diagnosable error on
//! first use instead of at startup.

use crate::account::domain::session::{AuthSession, AuthUser, UserMetadata};
use crate::app::config::SupabaseSettings;
use crate::app::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use url::Url;

use super::provider_error;

// automock sits above async_trait so it sees the async signatures and the
// mock expectations can return plain values.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Registers a new account. `metadata` is stored as the provider's user
    /// metadata so the name and WhatsApp number survive even without an
    /// extension-table row.
    async fn sign_up(&self, email: &str, password: &str, metadata: &UserMetadata)
    -> Result<AuthUser, AppError>;
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AppError>;
    async fn sign_out(&self, access_token: &str) -> Result<(), AppError>;
    async fn reset_password(&self, email: &str) -> Result<(), AppError>;
    async fn update_password(&self, access_token: &str, new_password: &str) -> Result<AuthUser, AppError>;
    async fn update_metadata(&self, access_token: &str, metadata: &UserMetadata)
    -> Result<AuthUser, AppError>;
    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, AppError>;
    /// Resolves the user behind an access token. Returns `Ok(None)` when the
    /// token is expired or revoked; errors are reserved for transport-level
    /// failures.
    async fn get_user(&self, access_token: &str) -> Result<Option<AuthUser>, AppError>;
}

pub struct SupabaseIdentity {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseIdentity {
    pub fn new(http: reqwest::Client, settings: &SupabaseSettings) -> Self {
        Self {
            http,
            base_url: settings.url.clone(),
            anon_key: settings.anon_key.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        Url::parse(&self.base_url)
            .and_then(|base| base.join(path))
            .map_err(|err| AppError::Config(format!("invalid identity endpoint '{}': {err}", self.base_url)))
    }

    fn request(&self, method: reqwest::Method, url: Url, bearer: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer)
    }

    async fn user_from(response: reqwest::Response) -> Result<AuthUser, AppError> {
        // Sign-up responses nest the user when a session is issued alongside;
        // other endpoints return the user object directly.
        let value: serde_json::Value = response.json().await?;
        let user_value = value.get("user").cloned().unwrap_or(value);
        let payload: UserPayload = serde_json::from_value(user_value)?;
        Ok(payload.into())
    }
}

#[async_trait]
impl IdentityProvider for SupabaseIdentity {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &UserMetadata,
    ) -> Result<AuthUser, AppError> {
        let url = self.endpoint("/auth/v1/signup")?;
        let body = json!({
            "email": email,
            "password": password,
            "data": {
                "full_name": metadata.full_name,
                "whatsapp": metadata.whatsapp,
            },
        });

        let response = self
            .request(reqwest::Method::POST, url, &self.anon_key)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(provider_error(response).await);
        }

        Self::user_from(response).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let url = self.endpoint("/auth/v1/token?grant_type=password")?;
        let body = json!({ "email": email, "password": password });

        let response = self
            .request(reqwest::Method::POST, url, &self.anon_key)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(provider_error(response).await);
        }

        let payload: SessionPayload = response.json().await?;
        Ok(payload.into())
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AppError> {
        let url = self.endpoint("/auth/v1/logout")?;

        let response = self.request(reqwest::Method::POST, url, access_token).send().await?;
        if !response.status().is_success() {
            return Err(provider_error(response).await);
        }

        Ok(())
    }

    async fn reset_password(&self, email: &str) -> Result<(), AppError> {
        let url = self.endpoint("/auth/v1/recover")?;
        let body = json!({ "email": email });

        let response = self
            .request(reqwest::Method::POST, url, &self.anon_key)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(provider_error(response).await);
        }

        Ok(())
    }

    async fn update_password(&self, access_token: &str, new_password: &str) -> Result<AuthUser, AppError> {
        let url = self.endpoint("/auth/v1/user")?;
        let body = json!({ "password": new_password });

        let response = self
            .request(reqwest::Method::PUT, url, access_token)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(provider_error(response).await);
        }

        Self::user_from(response).await
    }

    async fn update_metadata(
        &self,
        access_token: &str,
        metadata: &UserMetadata,
    ) -> Result<AuthUser, AppError> {
        let url = self.endpoint("/auth/v1/user")?;
        let body = json!({
            "data": {
                "full_name": metadata.full_name,
                "whatsapp": metadata.whatsapp,
            },
        });

        let response = self
            .request(reqwest::Method::PUT, url, access_token)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(provider_error(response).await);
        }

        Self::user_from(response).await
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, AppError> {
        let url = self.endpoint("/auth/v1/token?grant_type=refresh_token")?;
        let body = json!({ "refresh_token": refresh_token });

        let response = self
            .request(reqwest::Method::POST, url, &self.anon_key)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(provider_error(response).await);
        }

        let payload: SessionPayload = response.json().await?;
        Ok(payload.into())
    }

    async fn get_user(&self, access_token: &str) -> Result<Option<AuthUser>, AppError> {
        let url = self.endpoint("/auth/v1/user")?;

        let response = self.request(reqwest::Method::GET, url, access_token).send().await?;
        let status = response.status();

        // An unusable token is "no session", not a failure.
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(provider_error(response).await);
        }

        Ok(Some(Self::user_from(response).await?))
    }
}

// --- Wire payloads ---

#[derive(Deserialize)]
struct MetadataPayload {
    full_name: Option<String>,
    whatsapp: Option<String>,
}

#[derive(Deserialize)]
struct UserPayload {
    id: String,
    email: Option<String>,
    user_metadata: Option<MetadataPayload>,
    created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct SessionPayload {
    access_token: String,
    refresh_token: String,
    expires_in: Option<u64>,
    user: UserPayload,
}

impl From<UserPayload> for AuthUser {
    fn from(payload: UserPayload) -> Self {
        let metadata = payload.user_metadata.map_or_else(UserMetadata::default, |m| UserMetadata {
            full_name: m.full_name,
            whatsapp: m.whatsapp,
        });

        Self {
            id: payload.id,
            email: payload.email.unwrap_or_default(),
            metadata,
            created_at: payload.created_at,
        }
    }
}

impl From<SessionPayload> for AuthSession {
    fn from(payload: SessionPayload) -> Self {
        Self {
            access_token: payload.access_token,
            refresh_token: payload.refresh_token,
            expires_in: payload.expires_in,
            user: payload.user.into(),
        }
    }
}
