//! Wires collaborators into a `ConsoleState` according to the configuration.

use std::sync::Arc;

use concierge_application::ConsoleState;
use concierge_core::config::{BackendKind, ConsoleConfig};
use concierge_core::error::Result;
use concierge_infrastructure::{
    FixtureAuthProvider, FixtureDataProvider, InMemoryTransport, SupabaseClient,
};

pub fn build_console(config: &ConsoleConfig) -> Result<ConsoleState> {
    match config.backend.kind {
        BackendKind::Fixture => {
            tracing::info!("Using fixture backend (demo data)");
            Ok(ConsoleState::new(
                Arc::new(FixtureAuthProvider::default()),
                Arc::new(FixtureDataProvider::default()),
            )
            .with_transport(Arc::new(InMemoryTransport::new())))
        }
        BackendKind::Supabase => {
            let client = Arc::new(SupabaseClient::from_config(&config.backend)?);
            tracing::info!("Using Supabase backend at {}", client.base_url());
            Ok(ConsoleState::new(client.clone(), client.clone()).with_transport(client))
        }
    }
}
