//! PostgREST-backed store for the `profiles` extension table.
//!
//! Single-row lookups by primary key and an idempotent upsert. Writes go
//! through the caller's own bearer token so the table's row-level security
//! applies to the member, not to the service.

use crate::account::domain::profile::ProfileRow;
use crate::app::config::SupabaseSettings;
use crate::app::error::AppError;
use async_trait::async_trait;
use url::Url;

use super::provider_error;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_by_id(&self, access_token: &str, id: &str) -> Result<Option<ProfileRow>, AppError>;
    /// Upserts on the `id` primary key; last write wins. Returns the stored
    /// representation.
    async fn upsert(&self, access_token: &str, row: ProfileRow) -> Result<ProfileRow, AppError>;
}

pub struct SupabaseProfileTable {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseProfileTable {
    pub fn new(http: reqwest::Client, settings: &SupabaseSettings) -> Self {
        Self {
            http,
            base_url: settings.url.clone(),
            anon_key: settings.anon_key.clone(),
        }
    }

    fn table_url(&self) -> Result<Url, AppError> {
        Url::parse(&self.base_url)
            .and_then(|base| base.join("/rest/v1/profiles"))
            .map_err(|err| AppError::Config(format!("invalid table endpoint '{}': {err}", self.base_url)))
    }
}

#[async_trait]
impl ProfileStore for SupabaseProfileTable {
    async fn find_by_id(&self, access_token: &str, id: &str) -> Result<Option<ProfileRow>, AppError> {
        let mut url = self.table_url()?;
        url.query_pairs_mut()
            .append_pair("id", &format!("eq.{id}"))
            .append_pair("select", "*")
            .append_pair("limit", "1");

        let response = self
            .http
            .get(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(provider_error(response).await);
        }

        let mut rows: Vec<ProfileRow> = response.json().await?;
        Ok(if rows.is_empty() { None } else { Some(rows.remove(0)) })
    }

    async fn upsert(&self, access_token: &str, row: ProfileRow) -> Result<ProfileRow, AppError> {
        let mut url = self.table_url()?;
        url.query_pairs_mut().append_pair("on_conflict", "id");

        let response = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .json(&[&row])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(provider_error(response).await);
        }

        let mut rows: Vec<ProfileRow> = response.json().await?;
        if rows.is_empty() {
            // return=representation always echoes the written row; an empty
            // body means the backend did not apply the write.
            return Err(AppError::Internal);
        }
        Ok(rows.remove(0))
    }
}
