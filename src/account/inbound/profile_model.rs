use crate::account::domain::inout::profile::{UpdateProfileInput, UpdateProfileOutput};
use crate::account::domain::profile::UserProfile;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub whatsapp: Option<String>,
    pub affiliate_link: Option<String>,
    pub display_name: String,
    pub created_at: String,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        let display_name = profile.display_name().to_string();
        Self {
            id: profile.id,
            email: profile.email,
            full_name: profile.full_name,
            whatsapp: profile.whatsapp,
            affiliate_link: profile.affiliate_link,
            display_name,
            created_at: profile.created_at.to_rfc3339(),
        }
    }
}

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub whatsapp: Option<String>,
    pub affiliate_link: Option<String>,
}

impl UpdateProfileRequest {
    pub fn into_input(self, access_token: String) -> UpdateProfileInput {
        UpdateProfileInput {
            access_token,
            full_name: self.full_name,
            whatsapp: self.whatsapp,
            affiliate_link: self.affiliate_link,
        }
    }
}

#[derive(Serialize)]
pub struct UpdateProfileResponse {
    pub profile: ProfileResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<UpdateProfileOutput> for UpdateProfileResponse {
    fn from(output: UpdateProfileOutput) -> Self {
        Self {
            profile: output.profile.into(),
            warning: output.warning,
        }
    }
}
