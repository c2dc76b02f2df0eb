//! Dashboard snapshot model and its data provider trait.

mod provider;
mod snapshot;

pub use provider::DataProvider;
pub use snapshot::{ConversationSummary, DashboardSnapshot};
