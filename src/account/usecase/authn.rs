//! Authentication usecases: thin, validated pass-throughs to the external
//! identity provider. Provider errors surface verbatim so the member sees
//! the real reason (bad credentials, unconfirmed account, duplicate email).

use crate::account::domain::inout::authn::{
    LoginInput, LoginOutput, LogoutInput, LogoutOutput, RegisterInput, RegisterOutput, ResetPasswordInput,
    ResetPasswordOutput, SetSessionInput, SetSessionOutput, UpdatePasswordInput, UpdatePasswordOutput,
};
use crate::account::domain::session::{AuthSession, UserMetadata};
use crate::account::outbound::identity::IdentityProvider;
use crate::app::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthnUseCase: Send + Sync {
    async fn login(&self, input: LoginInput) -> Result<LoginOutput, AppError>;
    async fn register(&self, input: RegisterInput) -> Result<RegisterOutput, AppError>;
    async fn logout(&self, input: LogoutInput) -> Result<LogoutOutput, AppError>;
    async fn reset_password(&self, input: ResetPasswordInput) -> Result<ResetPasswordOutput, AppError>;
    async fn update_password(&self, input: UpdatePasswordInput) -> Result<UpdatePasswordOutput, AppError>;
    async fn set_session(&self, input: SetSessionInput) -> Result<SetSessionOutput, AppError>;
}

#[derive(Clone)]
pub struct AuthnService {
    identity: Arc<dyn IdentityProvider>,
}

impl AuthnService {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }
}

#[async_trait]
impl AuthnUseCase for AuthnService {
    async fn login(&self, input: LoginInput) -> Result<LoginOutput, AppError> {
        input.validate()?;

        let session = self.identity.sign_in(&input.email, &input.password).await?;

        Ok(LoginOutput { session })
    }

    async fn register(&self, input: RegisterInput) -> Result<RegisterOutput, AppError> {
        input.validate()?;

        let metadata = UserMetadata {
            full_name: Some(input.full_name.clone()),
            whatsapp: input.whatsapp.clone(),
        };

        let user = self.identity.sign_up(&input.email, &input.password, &metadata).await?;

        // Admin notification for new registrations. A log entry is the whole
        // mechanism for now; it must never fail the registration itself.
        tracing::info!(
            user_id = %user.id,
            email = %input.email,
            full_name = %input.full_name,
            "new member registered"
        );

        Ok(RegisterOutput {
            success: true,
            message: "¡Registro exitoso! Revisa tu correo electrónico para confirmar tu cuenta.".to_string(),
        })
    }

    async fn logout(&self, input: LogoutInput) -> Result<LogoutOutput, AppError> {
        input.validate()?;

        self.identity.sign_out(&input.access_token).await?;

        Ok(LogoutOutput { success: true })
    }

    async fn reset_password(&self, input: ResetPasswordInput) -> Result<ResetPasswordOutput, AppError> {
        input.validate()?;

        self.identity.reset_password(&input.email).await?;

        Ok(ResetPasswordOutput {
            success: true,
            message: "Revisa tu correo electrónico para restablecer tu contraseña.".to_string(),
        })
    }

    async fn update_password(&self, input: UpdatePasswordInput) -> Result<UpdatePasswordOutput, AppError> {
        input.validate()?;

        self.identity
            .update_password(&input.access_token, &input.new_password)
            .await?;

        Ok(UpdatePasswordOutput { success: true })
    }

    async fn set_session(&self, input: SetSessionInput) -> Result<SetSessionOutput, AppError> {
        input.validate()?;

        // Prefer the access token while it is still valid; fall back to the
        // refresh grant once it has expired (the password-reset flow arrives
        // here with tokens of unknown age).
        if let Some(user) = self.identity.get_user(&input.access_token).await? {
            return Ok(SetSessionOutput {
                session: AuthSession {
                    access_token: input.access_token,
                    refresh_token: input.refresh_token,
                    expires_in: None,
                    user,
                },
            });
        }

        let session = self.identity.refresh_session(&input.refresh_token).await?;
        Ok(SetSessionOutput { session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::domain::session::AuthUser;
    use crate::account::outbound::identity::MockIdentityProvider;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn user() -> AuthUser {
        AuthUser {
            id: "u1".to_string(),
            email: "m@x.com".to_string(),
            metadata: UserMetadata::default(),
            created_at: Utc::now(),
        }
    }

    fn session() -> AuthSession {
        AuthSession {
            access_token: "at".to_string(),
            refresh_token: "rt".to_string(),
            expires_in: Some(3600),
            user: user(),
        }
    }

    #[tokio::test]
    async fn login_passes_provider_error_through_verbatim() {
        let mut identity = MockIdentityProvider::new();
        identity.expect_sign_in().returning(|_, _| {
            Err(AppError::Auth {
                status: 400,
                message: "Invalid login credentials".to_string(),
            })
        });

        let service = AuthnService::new(Arc::new(identity));
        let err = service
            .login(LoginInput {
                email: "m@x.com".to_string(),
                password: "secret99".to_string(),
            })
            .await
            .expect_err("login should fail");

        match err {
            AppError::Auth { message, .. } => assert_eq!(message, "Invalid login credentials"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn login_rejects_short_password_before_calling_provider() {
        let mut identity = MockIdentityProvider::new();
        identity.expect_sign_in().never();

        let service = AuthnService::new(Arc::new(identity));
        let err = service
            .login(LoginInput {
                email: "m@x.com".to_string(),
                password: "abc".to_string(),
            })
            .await
            .expect_err("validation should fail");

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn register_sends_metadata_to_provider() {
        let mut identity = MockIdentityProvider::new();
        identity
            .expect_sign_up()
            .with(
                eq("m@x.com"),
                eq("secret99"),
                eq(UserMetadata {
                    full_name: Some("María José".to_string()),
                    whatsapp: Some("3001234567".to_string()),
                }),
            )
            .returning(|_, _, _| Ok(user()));

        let service = AuthnService::new(Arc::new(identity));
        let output = service
            .register(RegisterInput {
                email: "m@x.com".to_string(),
                password: "secret99".to_string(),
                full_name: "María José".to_string(),
                whatsapp: Some("3001234567".to_string()),
            })
            .await
            .expect("register succeeds");

        assert!(output.success);
    }

    #[tokio::test]
    async fn set_session_uses_access_token_while_valid() {
        let mut identity = MockIdentityProvider::new();
        identity.expect_get_user().returning(|_| Ok(Some(user())));
        identity.expect_refresh_session().never();

        let service = AuthnService::new(Arc::new(identity));
        let output = service
            .set_session(SetSessionInput {
                access_token: "at".to_string(),
                refresh_token: "rt".to_string(),
            })
            .await
            .expect("set_session succeeds");

        assert_eq!(output.session.access_token, "at");
        assert_eq!(output.session.refresh_token, "rt");
    }

    #[tokio::test]
    async fn set_session_falls_back_to_refresh_grant() {
        let mut identity = MockIdentityProvider::new();
        identity.expect_get_user().returning(|_| Ok(None));
        identity
            .expect_refresh_session()
            .with(eq("rt"))
            .returning(|_| Ok(session()));

        let service = AuthnService::new(Arc::new(identity));
        let output = service
            .set_session(SetSessionInput {
                access_token: "stale".to_string(),
                refresh_token: "rt".to_string(),
            })
            .await
            .expect("set_session succeeds");

        assert_eq!(output.session.expires_in, Some(3600));
    }
}
