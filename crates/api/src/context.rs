use coinshop_core::UserId;

/// Authenticated identity for a request, derived from the bearer token.
///
/// Immutable and present on all protected routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthedUser {
    user_id: UserId,
    username: String,
}

impl AuthedUser {
    pub fn new(user_id: UserId, username: String) -> Self {
        Self { user_id, username }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
