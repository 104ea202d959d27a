//! PIN authentication with a bounded-attempt lockout.
//!
//! The session gates entry to the menu; it never touches ledger state beyond
//! calling [`AccountLedger::validate_pin`]. Lockout is terminal for the
//! process run: once locked, a session accepts no further submissions and a
//! fresh process is required.

use thiserror::Error;
use tracing::{info, warn};

use crate::AccountLedger;

/// Attempts granted before the session locks.
pub const MAX_ATTEMPTS: u8 = 3;

/// Where the session stands in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStatus {
    /// Awaiting a correct PIN.
    #[default]
    Unauthenticated,
    /// PIN accepted; the menu is open. Terminal for the session.
    Authenticated,
    /// All attempts exhausted. Terminal for the process run.
    Locked,
}

/// Error returned by [`AuthSession::submit_pin`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The PIN did not match; `remaining` is 0 exactly when this failure
    /// locked the session.
    #[error("invalid PIN, {remaining} attempts remaining")]
    InvalidPin { remaining: u8 },

    /// The session is locked; submitting here is a caller bug.
    #[error("session is locked")]
    Locked,

    /// The session already authenticated; submitting here is a caller bug.
    #[error("session is already authenticated")]
    AlreadyAuthenticated,
}

/// One authentication lifecycle: 3 attempts, then lockout.
#[derive(Debug)]
pub struct AuthSession {
    attempts_remaining: u8,
    status: AuthStatus,
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSession {
    pub fn new() -> Self {
        Self {
            attempts_remaining: MAX_ATTEMPTS,
            status: AuthStatus::Unauthenticated,
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.status
    }

    pub fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    /// Submit a PIN candidate while `Unauthenticated`.
    ///
    /// A match authenticates the session. A mismatch burns one attempt; the
    /// third consecutive mismatch locks the session permanently. Submitting
    /// in any other state is rejected with a distinct error rather than
    /// silently ignored.
    pub fn submit_pin(&mut self, ledger: &AccountLedger, candidate: &str) -> Result<(), AuthError> {
        match self.status {
            AuthStatus::Locked => return Err(AuthError::Locked),
            AuthStatus::Authenticated => return Err(AuthError::AlreadyAuthenticated),
            AuthStatus::Unauthenticated => {}
        }

        if ledger.validate_pin(candidate) {
            self.status = AuthStatus::Authenticated;
            info!("authentication succeeded");
            return Ok(());
        }

        self.attempts_remaining -= 1;
        if self.attempts_remaining == 0 {
            self.status = AuthStatus::Locked;
            warn!("attempts exhausted, session locked");
        } else {
            info!(remaining = self.attempts_remaining, "invalid PIN");
        }
        Err(AuthError::InvalidPin {
            remaining: self.attempts_remaining,
        })
    }
}
