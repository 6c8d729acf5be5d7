//! Tunables for the login gate and the dashboard refresh cycle.
//!
//! DESIGN
//! ======
//! Constants live in plain structs with `Default` impls so tests can shrink
//! windows (or swap credentials) without touching browser state.

use std::time::Duration;

const DEFAULT_ADMIN_ID: &str = "admin";
const DEFAULT_PASSWORD: &str = "admin123";
const DEFAULT_MAX_ATTEMPTS: u32 = 3;
const DEFAULT_LOCK_SECS: u64 = 2 * 60 * 60;
const DEFAULT_SESSION_SECS: u64 = 8 * 60 * 60;

const DEFAULT_MIGRATION_DELAY_MS: u64 = 1_000;
const DEFAULT_SESSION_WATCH_SECS: u64 = 60;

/// Login gate settings.
///
/// The credential pair is a demo placeholder; nothing here is verified
/// anywhere but the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    pub admin_id: String,
    pub password: String,
    /// Consecutive failures that trigger a lockout.
    pub max_attempts: u32,
    pub lock_duration: Duration,
    pub session_duration: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_id: DEFAULT_ADMIN_ID.to_owned(),
            password: DEFAULT_PASSWORD.to_owned(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            lock_duration: Duration::from_secs(DEFAULT_LOCK_SECS),
            session_duration: Duration::from_secs(DEFAULT_SESSION_SECS),
        }
    }
}

/// Dashboard timing settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Delay between resolving a request and dropping it from the pending table.
    pub migration_delay: Duration,
    /// How often the dashboard re-checks session expiry.
    pub session_watch_interval: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            migration_delay: Duration::from_millis(DEFAULT_MIGRATION_DELAY_MS),
            session_watch_interval: Duration::from_secs(DEFAULT_SESSION_WATCH_SECS),
        }
    }
}

/// Convert a duration to whole milliseconds, saturating at `i64::MAX`.
pub(crate) fn duration_ms(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

/// Convert a non-negative millisecond span back into a `Duration`.
pub(crate) fn ms_duration(ms: i64) -> Duration {
    Duration::from_millis(u64::try_from(ms).unwrap_or(0))
}
