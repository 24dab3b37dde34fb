//! Write-access gate
//!
//! A session starts locked. Submitting the configured pass-value flips the
//! gate to unlocked, once, for the rest of the session. Wrong secrets are
//! ignored without an error value; there is no lockout, attempt counter or
//! timeout.
//!
//! The comparison itself sits behind the [`Authenticator`] capability so a
//! hardened check (hashed storage, rate limiting) is a substitution, not a
//! rewrite of the gate.

use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

/// Secret-checking capability
pub trait Authenticator {
    /// Whether the submitted secret grants write access
    fn check(&self, secret: &str) -> bool;
}

/// Shared-secret authenticator
///
/// Holds the configured pass-value and compares submissions against it in
/// constant time.
pub struct SharedSecret {
    pass_value: SecretString,
}

impl SharedSecret {
    /// Create an authenticator for the given pass-value
    #[inline]
    #[must_use]
    pub fn new(pass_value: impl Into<String>) -> Self {
        Self {
            pass_value: SecretString::new(pass_value.into()),
        }
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecret").finish_non_exhaustive()
    }
}

impl Authenticator for SharedSecret {
    fn check(&self, secret: &str) -> bool {
        let expected = self.pass_value.expose_secret().as_bytes();
        let given = secret.as_bytes();
        expected.len() == given.len() && bool::from(expected.ct_eq(given))
    }
}

/// Locked/unlocked write-permission flag
///
/// The transition is one-way: once unlocked, further submissions are no-ops
/// and the gate never re-locks.
#[derive(Debug)]
pub struct AccessGate<A = SharedSecret> {
    authenticator: A,
    unlocked: bool,
}

impl<A: Authenticator> AccessGate<A> {
    /// Create a locked gate over the given authenticator
    #[inline]
    #[must_use]
    pub fn new(authenticator: A) -> Self {
        Self {
            authenticator,
            unlocked: false,
        }
    }

    /// Submit a secret; returns the unlocked state afterwards
    ///
    /// A correct secret unlocks the gate. Resubmitting once unlocked changes
    /// nothing; a wrong secret leaves the gate locked with no error raised.
    pub fn submit(&mut self, secret: &str) -> bool {
        if self.unlocked {
            return true;
        }
        if self.authenticator.check(secret) {
            self.unlocked = true;
            tracing::info!("gate unlocked");
        } else {
            tracing::debug!("gate rejected secret");
        }
        self.unlocked
    }

    /// Whether write access has been granted
    #[inline]
    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }
}
