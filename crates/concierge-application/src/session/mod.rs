//! Session lifecycle: sign-in, sign-out and the current operator.

mod manager;
mod state;

pub use manager::{AUTH_FAILURE_MESSAGE, SessionEpoch, SessionManager, SignInGuard};
pub use state::SessionState;
