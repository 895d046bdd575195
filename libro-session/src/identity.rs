use async_trait::async_trait;

use libro_types::UserId;

/// Boundary to the auth provider. Resolving yields the signed-in user's
/// stable identifier, or `None` for a guest session. Providers may report
/// again later (token refresh, re-login); the session treats a repeat of
/// the same id as a no-op.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn resolve(&self) -> Option<UserId>;
}

/// Fixed identity for tests and local development, standing in for a real
/// auth backend.
pub struct StaticIdentity {
    user: Option<UserId>,
}

impl StaticIdentity {
    pub fn signed_in(id: impl Into<String>) -> Self {
        Self {
            user: Some(UserId::new(id)),
        }
    }

    pub fn guest() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn resolve(&self) -> Option<UserId> {
        self.user.clone()
    }
}
