use crate::account::domain::session::AuthSession;
use validator::Validate;

use super::validate_phone;

// Validation limits mirror the portal's registration form: passwords of at
// least six characters and names of at least two.

#[derive(Debug, Validate)]
pub struct LoginInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

#[derive(Debug)]
pub struct LoginOutput {
    pub session: AuthSession,
}

#[derive(Debug, Validate)]
pub struct RegisterInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    #[validate(length(min = 2))]
    pub full_name: String,
    #[validate(custom(function = validate_phone))]
    pub whatsapp: Option<String>,
}

#[derive(Debug)]
pub struct RegisterOutput {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Validate)]
pub struct LogoutInput {
    #[validate(length(min = 1))]
    pub access_token: String,
}

#[derive(Debug)]
pub struct LogoutOutput {
    pub success: bool,
}

#[derive(Debug, Validate)]
pub struct ResetPasswordInput {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug)]
pub struct ResetPasswordOutput {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Validate)]
pub struct UpdatePasswordInput {
    #[validate(length(min = 1))]
    pub access_token: String,
    #[validate(length(min = 6))]
    pub new_password: String,
}

#[derive(Debug)]
pub struct UpdatePasswordOutput {
    pub success: bool,
}

#[derive(Debug, Validate)]
pub struct SetSessionInput {
    #[validate(length(min = 1))]
    pub access_token: String,
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

#[derive(Debug)]
pub struct SetSessionOutput {
    pub session: AuthSession,
}
