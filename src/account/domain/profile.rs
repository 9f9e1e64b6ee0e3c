//! The canonical member profile.
//!
//! A profile is a merged view of two stores: the identity provider's user
//! metadata and a supplementary `profiles` table row. The merge is
//! right-biased, the table row wins wherever it holds a non-empty value.
//! This is the single place that merge happens; everything downstream
//! consumes the canonical `UserProfile`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::session::AuthUser;

/// Fallback label for member-facing name derivations when no usable name or
/// email exists.
pub const DEFAULT_DISPLAY_NAME: &str = "Usuario";

/// Fallback label used where the portal addresses the member as a business
/// builder rather than a plain user.
pub const BUILDER_FALLBACK_NAME: &str = "Constructor";

/// A row of the supplementary `profiles` table, keyed by the provider user
/// id. Created lazily on first profile update; absent for accounts that
/// never edited their profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileRow {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub whatsapp: Option<String>,
    pub affiliate_link: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// The merged member profile. `id` and `email` come from the identity
/// provider and are immutable here.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub whatsapp: Option<String>,
    pub affiliate_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Builds the canonical profile from identity data and the optional
    /// extension row. Row values take precedence when present and non-empty.
    pub fn merge(user: &AuthUser, row: Option<ProfileRow>) -> Self {
        let (row_full_name, row_whatsapp, row_affiliate_link) = match row {
            Some(row) => (row.full_name, row.whatsapp, row.affiliate_link),
            None => (None, None, None),
        };

        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            full_name: non_empty(row_full_name).or_else(|| non_empty(user.metadata.full_name.clone())),
            whatsapp: non_empty(row_whatsapp).or_else(|| non_empty(user.metadata.whatsapp.clone())),
            affiliate_link: non_empty(row_affiliate_link),
            created_at: user.created_at,
        }
    }

    /// Member-facing display name with a fixed precedence:
    /// full name, then email, then [`DEFAULT_DISPLAY_NAME`].
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ if !self.email.trim().is_empty() => &self.email,
            _ => DEFAULT_DISPLAY_NAME,
        }
    }

    /// First name only, for greetings that address the member as a business
    /// builder. Falls back to [`BUILDER_FALLBACK_NAME`].
    pub fn builder_name(&self) -> &str {
        self.full_name
            .as_deref()
            .and_then(|name| name.split_whitespace().next())
            .unwrap_or(BUILDER_FALLBACK_NAME)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::domain::session::UserMetadata;

    fn auth_user() -> AuthUser {
        AuthUser {
            id: "u1".to_string(),
            email: "m@x.com".to_string(),
            metadata: UserMetadata {
                full_name: Some("Meta Name".to_string()),
                whatsapp: Some("3001112233".to_string()),
            },
            created_at: Utc::now(),
        }
    }

    fn row() -> ProfileRow {
        ProfileRow {
            id: "u1".to_string(),
            email: "m@x.com".to_string(),
            full_name: Some("Row Name".to_string()),
            whatsapp: None,
            affiliate_link: Some("https://ref.example.com/u1".to_string()),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn merge_prefers_row_values_when_non_empty() {
        let profile = UserProfile::merge(&auth_user(), Some(row()));

        assert_eq!(profile.full_name.as_deref(), Some("Row Name"));
        // Row has no whatsapp, metadata fills the gap.
        assert_eq!(profile.whatsapp.as_deref(), Some("3001112233"));
        assert_eq!(profile.affiliate_link.as_deref(), Some("https://ref.example.com/u1"));
    }

    #[test]
    fn merge_treats_empty_row_values_as_absent() {
        let mut r = row();
        r.full_name = Some("   ".to_string());

        let profile = UserProfile::merge(&auth_user(), Some(r));

        assert_eq!(profile.full_name.as_deref(), Some("Meta Name"));
    }

    #[test]
    fn merge_without_row_uses_metadata_only() {
        let profile = UserProfile::merge(&auth_user(), None);

        assert_eq!(profile.full_name.as_deref(), Some("Meta Name"));
        assert_eq!(profile.affiliate_link, None);
    }

    #[test]
    fn display_name_falls_back_from_name_to_email_to_default() {
        let mut profile = UserProfile::merge(&auth_user(), None);
        assert_eq!(profile.display_name(), "Meta Name");

        profile.full_name = None;
        assert_eq!(profile.display_name(), "m@x.com");

        profile.email = String::new();
        assert_eq!(profile.display_name(), DEFAULT_DISPLAY_NAME);
    }

    #[test]
    fn builder_name_takes_the_first_name_token() {
        let mut profile = UserProfile::merge(&auth_user(), None);
        profile.full_name = Some("María José Pérez".to_string());
        assert_eq!(profile.builder_name(), "María");

        profile.full_name = Some("   ".to_string());
        assert_eq!(profile.builder_name(), BUILDER_FALLBACK_NAME);

        profile.full_name = None;
        assert_eq!(profile.builder_name(), BUILDER_FALLBACK_NAME);
    }
}
