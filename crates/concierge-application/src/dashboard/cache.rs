use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use concierge_core::conversation::Conversation;
use concierge_core::dashboard::DashboardSnapshot;
use concierge_core::error::ConsoleError;
use concierge_core::feedback::FeedbackItem;
use concierge_core::metrics::Metrics;
use concierge_core::traveler::Traveler;

/// Position of a `load()` call in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Hands out load tickets at invocation time.
///
/// Tickets are issued synchronously, before the data provider is polled, so
/// the order of tickets is the order in which loads were requested.
#[derive(Debug, Default)]
pub struct LoadSequencer {
    issued: AtomicU64,
}

impl LoadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> LoadTicket {
        LoadTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// A load issued later has already been applied.
    Stale,
}

/// Last successfully applied dashboard snapshot.
///
/// Mutated only through [`DashboardCache::apply`] and
/// [`DashboardCache::record_failure`]; readers get shared references.
#[derive(Debug, Default)]
pub struct DashboardCache {
    snapshot: Option<DashboardSnapshot>,
    applied: Option<LoadTicket>,
    loaded_at: Option<DateTime<Utc>>,
    last_error: Option<ConsoleError>,
}

impl DashboardCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the snapshot unless a newer load already landed.
    pub fn apply(&mut self, ticket: LoadTicket, snapshot: DashboardSnapshot) -> ApplyOutcome {
        if self.is_stale(ticket) {
            return ApplyOutcome::Stale;
        }
        self.snapshot = Some(snapshot);
        self.applied = Some(ticket);
        self.loaded_at = Some(Utc::now());
        self.last_error = None;
        ApplyOutcome::Applied
    }

    /// Records a failed load. The current snapshot is left untouched, and a
    /// failure older than the applied snapshot is ignored.
    pub fn record_failure(&mut self, ticket: LoadTicket, error: ConsoleError) -> ApplyOutcome {
        if self.is_stale(ticket) {
            return ApplyOutcome::Stale;
        }
        self.last_error = Some(error);
        ApplyOutcome::Applied
    }

    fn is_stale(&self, ticket: LoadTicket) -> bool {
        self.applied.is_some_and(|applied| ticket <= applied)
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn metrics(&self) -> Option<&Metrics> {
        self.snapshot.as_ref().map(|s| &s.metrics)
    }

    pub fn conversations(&self) -> &[Conversation] {
        self.snapshot
            .as_ref()
            .map(|s| s.conversations.as_slice())
            .unwrap_or_default()
    }

    pub fn travelers(&self) -> &[Traveler] {
        self.snapshot
            .as_ref()
            .map(|s| s.travelers.as_slice())
            .unwrap_or_default()
    }

    pub fn feedback(&self) -> &[FeedbackItem] {
        self.snapshot
            .as_ref()
            .map(|s| s.feedback.as_slice())
            .unwrap_or_default()
    }

    pub fn contains_traveler(&self, id: &str) -> bool {
        self.travelers().iter().any(|t| t.id == id)
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn last_error(&self) -> Option<&ConsoleError> {
        self.last_error.as_ref()
    }
}
