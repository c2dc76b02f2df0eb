//! Data provider trait.

use async_trait::async_trait;

use super::snapshot::DashboardSnapshot;
use crate::error::Result;

/// External source of dashboard data.
///
/// However many requests an implementation makes, a call either returns a
/// complete snapshot or fails as a whole.
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot>;
}
