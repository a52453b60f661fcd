//! # Session Gate
//!
//! Binary admin authorization state for a single-operator process: one
//! logical session, two states (logged out / logged in), no expiry and no
//! per-action re-authorization. Any request made while logged in is treated
//! as the admin.

use crate::models::Credential;
use crate::traits::AuthProvider;
use std::sync::atomic::{AtomicBool, Ordering};

pub struct SessionGate {
    logged_in: AtomicBool,
}

impl SessionGate {
    /// Starts in the logged-out state.
    pub fn new() -> Self {
        Self {
            logged_in: AtomicBool::new(false),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in.load(Ordering::SeqCst)
    }

    /// Attempts the LOGGED_OUT -> LOGGED_IN transition.
    ///
    /// The transition happens only when both fields are non-empty, a stored
    /// credential was found for the username, and the password verifies
    /// against its hash. Anything else leaves the state untouched and
    /// returns `false`; a failed login is not an error.
    pub fn login(
        &self,
        username: &str,
        password: &str,
        credential: Option<&Credential>,
        auth: &dyn AuthProvider,
    ) -> bool {
        if username.trim().is_empty() || password.is_empty() {
            return false;
        }
        let Some(credential) = credential else {
            return false;
        };
        if credential.username != username {
            return false;
        }
        let ok = auth.verify_password(password, &credential.password_hash);
        if ok {
            self.logged_in.store(true, Ordering::SeqCst);
        }
        ok
    }

    /// LOGGED_IN -> LOGGED_OUT. Always succeeds; idempotent.
    pub fn logout(&self) {
        self.logged_in.store(false, Ordering::SeqCst);
    }
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain-text "hashing" so the state machine can be tested without a
    /// real digest implementation.
    struct PlainAuth;

    impl AuthProvider for PlainAuth {
        fn hash_password(&self, password: &str) -> anyhow::Result<String> {
            Ok(password.to_string())
        }
        fn verify_password(&self, password: &str, hash: &str) -> bool {
            password == hash
        }
    }

    fn admin_credential() -> Credential {
        Credential {
            id: 1,
            username: "admin".into(),
            password_hash: "admin123".into(),
        }
    }

    #[test]
    fn successful_login_flips_state() {
        let gate = SessionGate::new();
        assert!(!gate.is_logged_in());
        assert!(gate.login("admin", "admin123", Some(&admin_credential()), &PlainAuth));
        assert!(gate.is_logged_in());
    }

    #[test]
    fn empty_fields_never_log_in() {
        let gate = SessionGate::new();
        let cred = admin_credential();
        assert!(!gate.login("", "admin123", Some(&cred), &PlainAuth));
        assert!(!gate.login("admin", "", Some(&cred), &PlainAuth));
        assert!(!gate.is_logged_in());
    }

    #[test]
    fn wrong_password_or_missing_user_stays_logged_out() {
        let gate = SessionGate::new();
        assert!(!gate.login("admin", "wrong", Some(&admin_credential()), &PlainAuth));
        assert!(!gate.login("nouser", "x", None, &PlainAuth));
        assert!(!gate.is_logged_in());
    }

    #[test]
    fn logout_returns_to_initial_state() {
        let gate = SessionGate::new();
        assert!(gate.login("admin", "admin123", Some(&admin_credential()), &PlainAuth));
        gate.logout();
        assert!(!gate.is_logged_in());
        // Idempotent from either state.
        gate.logout();
        assert!(!gate.is_logged_in());
    }
}
