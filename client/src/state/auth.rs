//! Login gate: attempt counting, lockout, and session expiry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard route sits behind this gate. The gate keeps no state of
//! its own: attempt counters, the lock instant, and the session live in the
//! injected `KeyValueStore` under the `isLoggedIn`, `loginTime`,
//! `loginAttempts`, and `lockTime` keys, so a reload resumes exactly where
//! the previous page left off.
//!
//! DESIGN
//! ======
//! A failed attempt increments the persisted counter. Reaching
//! `max_attempts` stamps `lockTime`, logs a security alert, and refuses all
//! attempts until `lock_duration` has passed; the counter resets when the
//! lock expires or a login succeeds. Sessions last `session_duration` from
//! the login instant.
//!
//! There is no server-side check and nothing is encrypted. This is a demo
//! gate, not authentication.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::time::Duration;

use crate::config::{AuthConfig, duration_ms, ms_duration};
use crate::util::clock::Clock;
use crate::util::storage::{KeyValueStore, StorageKey, get_i64};

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Why a login attempt was refused. `Display` is the message shown on the form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid credentials. {remaining_attempts} attempts remaining.")]
    InvalidCredentials { remaining_attempts: u32 },
    /// Names the configured lock length, not the time left.
    #[error("Authentication locked. Please try again in {}.", span_label(*lock_duration))]
    Locked { remaining: Duration, lock_duration: Duration },
}

/// Whole hours when the span divides evenly, otherwise whole minutes.
fn span_label(span: Duration) -> String {
    let secs = span.as_secs();
    let (count, unit) = if secs >= 3_600 && secs % 3_600 == 0 {
        (secs / 3_600, "hour")
    } else {
        (secs / 60, "minute")
    };
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

// =============================================================================
// STATUS TYPES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockStatus {
    Locked { remaining: Duration },
    Unlocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Valid,
    /// A session existed but outlived `session_duration`; it has been cleared.
    Expired,
    /// No session is stored.
    SignedOut,
}

/// A started session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Session {
    pub logged_in_at: i64,
}

/// Authentication view state shared through Leptos context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub signed_in: bool,
    /// True until the gate has been consulted on the client.
    pub loading: bool,
    /// Message for the login form (invalid credentials, lockout, expiry).
    pub message: Option<String>,
}

impl AuthState {
    /// State before browser storage has been read.
    #[must_use]
    pub fn pending() -> Self {
        Self { signed_in: false, loading: true, message: None }
    }

    #[must_use]
    pub fn signed_in() -> Self {
        Self { signed_in: true, loading: false, message: None }
    }

    #[must_use]
    pub fn signed_out(message: Option<String>) -> Self {
        Self { signed_in: false, loading: false, message }
    }
}

// =============================================================================
// AUTH GATE
// =============================================================================

/// Login gate over injected storage and clock.
#[derive(Clone)]
pub struct AuthGate {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    config: AuthConfig,
}

impl AuthGate {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>, config: AuthConfig) -> Self {
        Self { store, clock, config }
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    #[must_use]
    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    /// Consecutive failed attempts recorded so far.
    #[must_use]
    pub fn attempt_count(&self) -> u32 {
        get_i64(self.store.as_ref(), StorageKey::LoginAttempts)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0)
    }

    /// Try the credential pair.
    ///
    /// # Errors
    ///
    /// `Locked` while a lock is active (regardless of credentials) and on the
    /// failure that reaches `max_attempts`; `InvalidCredentials` otherwise.
    pub fn attempt_login(&self, admin_id: &str, password: &str) -> Result<Session, LoginError> {
        if let LockStatus::Locked { remaining } = self.check_lock() {
            log::warn!("login attempt refused: gate locked for {}s", remaining.as_secs());
            return Err(self.locked(remaining));
        }

        let now = self.clock.now_ms();
        if admin_id == self.config.admin_id && password == self.config.password {
            self.clear_lockout();
            self.store.set(StorageKey::IsLoggedIn, "true");
            self.store.set(StorageKey::LoginTime, &now.to_string());
            log::info!("admin signed in");
            return Ok(Session { logged_in_at: now });
        }

        let attempts = self.attempt_count().saturating_add(1);
        self.store.set(StorageKey::LoginAttempts, &attempts.to_string());

        if attempts >= self.config.max_attempts {
            self.store.set(StorageKey::LockTime, &now.to_string());
            send_security_alert(attempts);
            return Err(self.locked(self.config.lock_duration));
        }

        log::info!("invalid credentials (attempt {attempts} of {})", self.config.max_attempts);
        Err(LoginError::InvalidCredentials {
            remaining_attempts: self.config.max_attempts - attempts,
        })
    }

    /// Whether a lock is active. An expired lock is cleared along with the
    /// attempt counter.
    pub fn check_lock(&self) -> LockStatus {
        let Some(locked_at) = get_i64(self.store.as_ref(), StorageKey::LockTime) else {
            return LockStatus::Unlocked;
        };
        let lock_ms = duration_ms(self.config.lock_duration);
        let elapsed = self.clock.now_ms().saturating_sub(locked_at);
        if elapsed < lock_ms {
            let remaining = lock_ms.saturating_sub(elapsed).min(lock_ms);
            return LockStatus::Locked { remaining: ms_duration(remaining) };
        }
        self.clear_lockout();
        log::info!("login lock expired; attempt counter reset");
        LockStatus::Unlocked
    }

    /// Whether the stored session is still within `session_duration`. An
    /// expired session is cleared.
    pub fn check_session(&self) -> SessionStatus {
        let Some(session) = self.session() else {
            return SessionStatus::SignedOut;
        };
        let elapsed = self.clock.now_ms().saturating_sub(session.logged_in_at);
        if elapsed < duration_ms(self.config.session_duration) {
            return SessionStatus::Valid;
        }
        self.clear_session();
        log::info!("session expired after {}s", elapsed / 1_000);
        SessionStatus::Expired
    }

    /// The stored session, if one exists (expired or not).
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        if self.store.get(StorageKey::IsLoggedIn).as_deref() != Some("true") {
            return None;
        }
        get_i64(self.store.as_ref(), StorageKey::LoginTime).map(|logged_in_at| Session { logged_in_at })
    }

    /// End the session. Attempt and lock state are left alone.
    pub fn logout(&self) {
        self.clear_session();
        log::info!("admin signed out");
    }

    /// Evaluate stored state on page load.
    pub fn restore(&self) -> AuthState {
        let session = self.check_session();
        let lock = self.check_lock();
        match (session, lock) {
            (SessionStatus::Valid, _) => AuthState::signed_in(),
            (_, LockStatus::Locked { remaining }) => {
                AuthState::signed_out(Some(self.locked(remaining).to_string()))
            }
            (SessionStatus::Expired, LockStatus::Unlocked) => {
                AuthState::signed_out(Some(SESSION_EXPIRED_MESSAGE.to_owned()))
            }
            (SessionStatus::SignedOut, LockStatus::Unlocked) => AuthState::signed_out(None),
        }
    }

    fn locked(&self, remaining: Duration) -> LoginError {
        LoginError::Locked { remaining, lock_duration: self.config.lock_duration }
    }

    fn clear_session(&self) {
        self.store.remove(StorageKey::IsLoggedIn);
        self.store.remove(StorageKey::LoginTime);
    }

    fn clear_lockout(&self) {
        self.store.remove(StorageKey::LoginAttempts);
        self.store.remove(StorageKey::LockTime);
    }
}

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please sign in again.";

/// Stand-in for notifying an operator; only logged.
fn send_security_alert(attempts: u32) {
    log::warn!("security alert: {attempts} consecutive failed login attempts, authentication locked");
}
