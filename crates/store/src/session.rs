//! Zero-or-one authenticated user.

use playbill_core::User;
use tokio::sync::RwLock;

/// Holder for the current session's user.
///
/// Anonymous at boot. Login and signup success set it, logout success
/// clears it, and a session probe either confirms or clears it; nothing
/// else writes.
pub struct CurrentUser {
    user: RwLock<Option<User>>,
}

impl CurrentUser {
    pub fn new() -> Self {
        Self {
            user: RwLock::new(None),
        }
    }

    /// Snapshot of the signed-in user, if any.
    pub async fn get(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.user.read().await.is_some()
    }

    /// Install the user after a server-confirmed login, signup, or probe.
    pub async fn set(&self, user: User) {
        *self.user.write().await = Some(user);
    }

    /// Drop to the anonymous state.
    pub async fn clear(&self) {
        *self.user.write().await = None;
    }
}

impl Default for CurrentUser {
    fn default() -> Self {
        Self::new()
    }
}
