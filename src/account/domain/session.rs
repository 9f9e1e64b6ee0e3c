//! Session and identity objects as seen from the external provider.

use chrono::{DateTime, Utc};

/// The mutable metadata blob the identity provider stores alongside an
/// account. Only the fields the portal writes are modeled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserMetadata {
    pub full_name: Option<String>,
    pub whatsapp: Option<String>,
}

/// An authenticated user as reported by the identity provider.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub metadata: UserMetadata,
    pub created_at: DateTime<Utc>,
}

/// A provider session: token pair plus the user it belongs to.
///
/// `expires_in` is absent when the session was revalidated from an existing
/// access token rather than issued fresh.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: Option<u64>,
    pub user: AuthUser,
}
