use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use concierge_core::error::{ConsoleError, Result, ValidationError};
use concierge_core::operator::{AuthProvider, Operator};

/// Inline message shown under the sign-in form after a failed attempt.
pub const AUTH_FAILURE_MESSAGE: &str = "Invalid email or password. Please try again.";

/// Local session generation, bumped by every sign-out.
///
/// A sign-in records the epoch before calling the provider and installs its
/// operator only if the epoch is still current afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionEpoch(u64);

/// Talks to the auth provider on behalf of the console.
///
/// `SessionManager` holds no operator itself; the operator it produces is
/// installed by `ConsoleState` so that sign-in is a single atomic update. It
/// does own the single sign-in slot and the session epoch.
pub struct SessionManager {
    auth: Arc<dyn AuthProvider>,
    epoch: AtomicU64,
    signing_in: Arc<AtomicBool>,
}

impl SessionManager {
    pub fn new(auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            auth,
            epoch: AtomicU64::new(0),
            signing_in: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Claims the single sign-in slot. The slot frees when the guard drops.
    ///
    /// # Errors
    ///
    /// `ConsoleError::Auth` while another sign-in is waiting on the provider.
    pub fn begin(&self) -> Result<SignInGuard> {
        self.signing_in
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| ConsoleError::auth("a sign-in is already in progress"))?;
        Ok(SignInGuard {
            signing_in: Arc::clone(&self.signing_in),
        })
    }

    pub fn is_signing_in(&self) -> bool {
        self.signing_in.load(Ordering::SeqCst)
    }

    pub fn epoch(&self) -> SessionEpoch {
        SessionEpoch(self.epoch.load(Ordering::SeqCst))
    }

    /// Starts a new epoch; sign-ins begun earlier can no longer install.
    pub fn invalidate(&self) -> SessionEpoch {
        SessionEpoch(self.epoch.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, epoch: SessionEpoch) -> bool {
        self.epoch() == epoch
    }

    /// Rejects empty credentials before any provider call.
    pub fn check_credentials(email: &str, password: &str) -> Result<()> {
        if email.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingCredentials.into());
        }
        Ok(())
    }

    /// Exchanges a password for an operator profile.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Auth` for rejected credentials and for an
    /// unreachable provider alike.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Operator> {
        Self::check_credentials(email, password)?;

        let identity = self
            .auth
            .sign_in_with_password(email, password)
            .await
            .map_err(|e| match e {
                ConsoleError::Auth(_) => e,
                other => ConsoleError::auth(other.to_string()),
            })?;

        Ok(identity.into_operator(chrono::Utc::now()))
    }

    /// Ends the provider-side session.
    pub async fn end(&self) -> Result<()> {
        self.auth.sign_out().await
    }
}

#[derive(Debug)]
#[must_use = "the sign-in slot frees as soon as the guard is dropped"]
pub struct SignInGuard {
    signing_in: Arc<AtomicBool>,
}

impl Drop for SignInGuard {
    fn drop(&mut self) {
        self.signing_in.store(false, Ordering::SeqCst);
    }
}
