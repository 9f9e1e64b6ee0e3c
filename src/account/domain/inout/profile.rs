use crate::account::domain::profile::UserProfile;
use validator::Validate;

use super::validate_phone;

#[derive(Debug)]
pub struct GetProfileInput {
    pub access_token: String,
}

// Unlike registration, updates carry no name-length rule: the stored name
// may be anything the member typed, including a single character.
#[derive(Debug, Validate)]
pub struct UpdateProfileInput {
    pub access_token: String,
    pub full_name: Option<String>,
    #[validate(custom(function = validate_phone))]
    pub whatsapp: Option<String>,
    #[validate(url)]
    pub affiliate_link: Option<String>,
}

#[derive(Debug)]
pub struct UpdateProfileOutput {
    pub profile: UserProfile,
    /// Set when the extension-table write failed but the identity-metadata
    /// write succeeded. The update is considered applied; the caller may
    /// surface this as a non-fatal notice.
    pub warning: Option<String>,
}
