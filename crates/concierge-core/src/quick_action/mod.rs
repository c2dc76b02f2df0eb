//! Quick actions: canned drafts routed through the normal dispatch contract.

mod model;

pub use model::QuickAction;
