// ABOUTME: Development-only authentication bypass
// ABOUTME: Accepts any credentials and yields a fixed dev identity

use async_trait::async_trait;
use peachy_core::User;
use tracing::warn;

use crate::error::{AuthError, AuthResult};
use crate::Authenticator;

/// Fixed identity used by the development bypass
pub const DEV_USER_ID: &str = "dev-user-1";
pub const DEV_USER_NAME: &str = "John Developer";
pub const DEV_USER_EMAIL: &str = "john@example.com";

/// Development bypass: any credentials sign in as the dev user. Only
/// constructible when dev mode is enabled.
pub struct DevAuthenticator {
    user: Option<User>,
}

impl DevAuthenticator {
    pub fn new(dev_mode: bool) -> AuthResult<Self> {
        if !dev_mode {
            return Err(AuthError::DevModeDisabled);
        }
        warn!("Development auth bypass enabled; all credentials are accepted");
        Ok(Self { user: None })
    }
}

#[async_trait]
impl Authenticator for DevAuthenticator {
    async fn login(&mut self, email: &str, _password: &str) -> AuthResult<User> {
        if email.trim().is_empty() {
            return Err(AuthError::InvalidCredentials("Email is required".to_string()));
        }
        let user = User {
            id: DEV_USER_ID.to_string(),
            email: email.to_string(),
            name: Some(DEV_USER_NAME.to_string()),
        };
        self.user = Some(user.clone());
        Ok(user)
    }

    async fn signup(
        &mut self,
        _email: &str,
        _password: &str,
        _name: Option<&str>,
    ) -> AuthResult<User> {
        let user = User {
            id: DEV_USER_ID.to_string(),
            email: DEV_USER_EMAIL.to_string(),
            name: Some(DEV_USER_NAME.to_string()),
        };
        self.user = Some(user.clone());
        Ok(user)
    }

    async fn logout(&mut self) {
        self.user = None;
    }

    fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_outside_dev_mode() {
        assert!(matches!(
            DevAuthenticator::new(false),
            Err(AuthError::DevModeDisabled)
        ));
    }

    #[tokio::test]
    async fn test_login_logout_lifecycle() {
        let mut auth = DevAuthenticator::new(true).unwrap();
        assert!(!auth.is_authenticated());

        let user = auth.login("dev@peachy.task", "hunter2").await.unwrap();
        assert_eq!(user.id, DEV_USER_ID);
        assert_eq!(user.email, "dev@peachy.task");
        assert_eq!(auth.current_user(), Some(&user));

        auth.logout().await;
        assert!(auth.current_user().is_none());
    }

    #[tokio::test]
    async fn test_login_requires_email() {
        let mut auth = DevAuthenticator::new(true).unwrap();
        assert!(auth.login("  ", "pw").await.is_err());
    }

    #[tokio::test]
    async fn test_signup_signs_in_dev_user() {
        let mut auth = DevAuthenticator::new(true).unwrap();
        let user = auth.signup("new@example.com", "pw", None).await.unwrap();
        assert_eq!(user.email, DEV_USER_EMAIL);
        assert!(auth.is_authenticated());
    }
}
