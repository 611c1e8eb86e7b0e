// ABOUTME: Authentication capability for Peachy Task
// ABOUTME: Session identity trait with a swappable development implementation

pub mod dev;
pub mod error;

use async_trait::async_trait;
use peachy_core::User;

pub use dev::DevAuthenticator;
pub use error::{AuthError, AuthResult};

/// Identity capability consumed by the application shell. Real
/// authentication arrives by implementing this trait; the dev bypass is one
/// swappable implementation, not a permanent code path.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Authenticate and remember the session user
    async fn login(&mut self, email: &str, password: &str) -> AuthResult<User>;

    /// Register a new account and sign it in
    async fn signup(&mut self, email: &str, password: &str, name: Option<&str>)
        -> AuthResult<User>;

    /// Forget the session user
    async fn logout(&mut self);

    /// The signed-in user, if any
    fn current_user(&self) -> Option<&User>;

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}
