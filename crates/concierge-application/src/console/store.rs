use std::collections::HashSet;

use concierge_core::message::{DraftMessage, MessageMode, OutgoingMessage};
use concierge_core::view::ActiveView;

use crate::dashboard::DashboardCache;
use crate::recipient::RecipientSelector;
use crate::session::SessionState;

/// Everything the console owns, behind the container's lock.
#[derive(Debug)]
pub(crate) struct ConsoleStore {
    pub(crate) session: SessionState,
    pub(crate) last_auth_error: Option<String>,
    pub(crate) cache: DashboardCache,
    pub(crate) selector: RecipientSelector,
    pub(crate) draft: DraftMessage,
    pub(crate) active_view: ActiveView,
    pub(crate) sidebar_open: bool,
}

impl Default for ConsoleStore {
    fn default() -> Self {
        Self {
            session: SessionState::default(),
            last_auth_error: None,
            cache: DashboardCache::new(),
            selector: RecipientSelector::new(),
            draft: DraftMessage::default(),
            active_view: ActiveView::default(),
            sidebar_open: true,
        }
    }
}

impl ConsoleStore {
    /// Drops selected ids the cache no longer knows about.
    pub(crate) fn prune_selection(&mut self) -> usize {
        let known: HashSet<&str> = self
            .cache
            .travelers()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        self.selector.retain_known(&known)
    }

    /// Clears session-scoped state. Returns the session that was active.
    pub(crate) fn end_session(&mut self) -> SessionState {
        self.selector.clear_selection();
        self.draft = DraftMessage::default();
        self.last_auth_error = None;
        std::mem::take(&mut self.session)
    }

    /// Resets the composer after an acknowledged dispatch.
    ///
    /// Only what was actually sent is cleared: a body edited or a traveler
    /// selected while the transport call was pending survives.
    pub(crate) fn settle_dispatch(&mut self, sent: &OutgoingMessage) {
        if self.draft.body == sent.body {
            self.draft.body.clear();
        }
        match sent.mode {
            MessageMode::Manual => {
                if self.draft.recipient.as_deref() == sent.recipients.first().map(String::as_str) {
                    self.draft.recipient = None;
                }
            }
            MessageMode::Bulk => self.selector.deselect(&sent.recipients),
        }
    }
}
