use crate::account::domain::inout::authn::{
    LoginInput, LoginOutput, LogoutOutput, RegisterInput, RegisterOutput, ResetPasswordInput,
    ResetPasswordOutput, SetSessionInput, SetSessionOutput, UpdatePasswordOutput,
};
use crate::account::domain::session::{AuthSession, AuthUser};
use serde::{Deserialize, Serialize};

// --- Login ---

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<LoginRequest> for LoginInput {
    fn from(req: LoginRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub created_at: String,
}

impl From<AuthUser> for UserResponse {
    fn from(user: AuthUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.metadata.full_name,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    pub user: UserResponse,
}

impl From<AuthSession> for SessionResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            expires_in: session.expires_in,
            user: session.user.into(),
        }
    }
}

impl From<LoginOutput> for SessionResponse {
    fn from(output: LoginOutput) -> Self {
        output.session.into()
    }
}

impl From<SetSessionOutput> for SessionResponse {
    fn from(output: SetSessionOutput) -> Self {
        output.session.into()
    }
}

// --- Register ---

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub whatsapp: Option<String>,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(req: RegisterRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            full_name: req.full_name,
            whatsapp: req.whatsapp,
        }
    }
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
}

impl From<RegisterOutput> for RegisterResponse {
    fn from(output: RegisterOutput) -> Self {
        Self {
            success: output.success,
            message: output.message,
        }
    }
}

// --- Recover / password ---

#[derive(Deserialize)]
pub struct RecoverRequest {
    pub email: String,
}

impl From<RecoverRequest> for ResetPasswordInput {
    fn from(req: RecoverRequest) -> Self {
        Self { email: req.email }
    }
}

#[derive(Serialize)]
pub struct RecoverResponse {
    pub success: bool,
    pub message: String,
}

impl From<ResetPasswordOutput> for RecoverResponse {
    fn from(output: ResetPasswordOutput) -> Self {
        Self {
            success: output.success,
            message: output.message,
        }
    }
}

#[derive(Deserialize)]
pub struct UpdatePasswordRequest {
    pub new_password: String,
}

#[derive(Serialize)]
pub struct UpdatePasswordResponse {
    pub success: bool,
}

impl From<UpdatePasswordOutput> for UpdatePasswordResponse {
    fn from(output: UpdatePasswordOutput) -> Self {
        Self {
            success: output.success,
        }
    }
}

// --- Session ---

#[derive(Deserialize)]
pub struct SetSessionRequest {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<SetSessionRequest> for SetSessionInput {
    fn from(req: SetSessionRequest) -> Self {
        Self {
            access_token: req.access_token,
            refresh_token: req.refresh_token,
        }
    }
}

#[derive(Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

impl From<LogoutOutput> for LogoutResponse {
    fn from(output: LogoutOutput) -> Self {
        Self {
            success: output.success,
        }
    }
}
