//! Session gate - the tab-scoped "logged in" flag
//!
//! A single boolean under [`storage_keys::IS_AUTHENTICATED`]. It has no expiry
//! and is never checked against the server; it only decides whether the
//! character management route renders or redirects.

use crate::ports::outbound::{storage_keys, StorageProvider};

const AUTHENTICATED_VALUE: &str = "true";

/// Where a guarded navigation must go instead of rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardTarget {
    Login,
    Cadastro,
}

/// Outcome of checking the session flag at route entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the requested page
    Render,
    /// Replace the current history entry with another route
    Redirect(GuardTarget),
}

#[derive(Clone)]
pub struct SessionGate<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> SessionGate<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn is_authenticated(&self) -> bool {
        self.storage.load(storage_keys::IS_AUTHENTICATED).as_deref() == Some(AUTHENTICATED_VALUE)
    }

    /// Record the result of a login response.
    pub fn set_authenticated(&self, authenticated: bool) {
        if authenticated {
            self.storage
                .save(storage_keys::IS_AUTHENTICATED, AUTHENTICATED_VALUE);
        } else {
            self.storage.remove(storage_keys::IS_AUTHENTICATED);
        }
    }

    /// Clear the flag. The caller navigates to the login view.
    pub fn logout(&self) {
        self.storage.remove(storage_keys::IS_AUTHENTICATED);
        tracing::info!("Session cleared");
    }

    /// Decision for the protected `/cadastro` route
    pub fn guard_protected(&self) -> GuardDecision {
        if self.is_authenticated() {
            GuardDecision::Render
        } else {
            GuardDecision::Redirect(GuardTarget::Login)
        }
    }

    /// Decision for `/login`: an authenticated tab skips straight to `/cadastro`
    pub fn guard_login_page(&self) -> GuardDecision {
        if self.is_authenticated() {
            GuardDecision::Redirect(GuardTarget::Cadastro)
        } else {
            GuardDecision::Render
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::MemoryStorageProvider;

    #[test]
    fn defaults_to_unauthenticated() {
        let gate = SessionGate::new(MemoryStorageProvider::new());
        assert!(!gate.is_authenticated());
        assert_eq!(
            gate.guard_protected(),
            GuardDecision::Redirect(GuardTarget::Login)
        );
        assert_eq!(gate.guard_login_page(), GuardDecision::Render);
    }

    #[test]
    fn login_then_logout() {
        let storage = MemoryStorageProvider::new();
        let gate = SessionGate::new(storage.clone());

        gate.set_authenticated(true);
        assert_eq!(
            storage.load(storage_keys::IS_AUTHENTICATED).as_deref(),
            Some("true")
        );
        assert_eq!(gate.guard_protected(), GuardDecision::Render);
        assert_eq!(
            gate.guard_login_page(),
            GuardDecision::Redirect(GuardTarget::Cadastro)
        );

        gate.logout();
        assert!(!gate.is_authenticated());
        assert_eq!(storage.load(storage_keys::IS_AUTHENTICATED), None);
    }

    #[test]
    fn only_the_exact_true_string_counts() {
        let storage = MemoryStorageProvider::new();
        storage.save(storage_keys::IS_AUTHENTICATED, "yes");
        let gate = SessionGate::new(storage);
        assert!(!gate.is_authenticated());
    }
}
