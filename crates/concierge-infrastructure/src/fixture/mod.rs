//! In-memory collaborators for demos and tests.
//!
//! - `auth`: a credential table, seeded with the demo operator
//! - `data`: the demo dashboard snapshot
//! - `transport`: an outbox that records every accepted message

mod auth;
mod data;
mod transport;

pub use auth::{DEMO_EMAIL, DEMO_PASSWORD, FixtureAuthProvider};
pub use data::{FixtureDataProvider, demo_snapshot};
pub use transport::{InMemoryTransport, OutboxEntry};
