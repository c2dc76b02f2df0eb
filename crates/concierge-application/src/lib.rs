//! Application layer for the Concierge console.
//!
//! This crate holds the console's state container and the use cases that
//! coordinate the auth, data and transport collaborators defined in
//! `concierge-core`.

pub mod busy;
pub mod console;
pub mod dashboard;
pub mod dispatch;
pub mod recipient;
pub mod session;

pub use busy::{BusyGuard, BusyIndicator};
pub use console::{ConsoleState, ConsoleViewModel};
pub use recipient::{DestinationFilter, RecipientSelector};
pub use session::{AUTH_FAILURE_MESSAGE, SessionState};
