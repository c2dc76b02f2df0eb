//! Infrastructure layer for the Concierge console.
//!
//! Concrete collaborators (fixture and Supabase-backed), configuration
//! loading and path resolution.

pub mod config_service;
pub mod fixture;
pub mod paths;
pub mod supabase;

pub use crate::config_service::ConfigService;
pub use crate::fixture::{FixtureAuthProvider, FixtureDataProvider, InMemoryTransport};
pub use crate::paths::ConciergePaths;
pub use crate::supabase::SupabaseClient;
