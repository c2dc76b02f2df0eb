//! Dashboard data cache and load ordering.

mod cache;

pub use cache::{ApplyOutcome, DashboardCache, LoadSequencer, LoadTicket};
