//! The console's single state container.
//!
//! `ConsoleState` owns the session, the dashboard cache, the recipient
//! selection and the message draft, and is the only place any of them is
//! mutated. Presentation code reads through the accessors (or one
//! [`ConsoleViewModel`]) and writes only through the operations below.

use std::collections::BTreeSet;
use std::future::Future;
use std::sync::Arc;

use concierge_core::conversation::Conversation;
use concierge_core::dashboard::{ConversationSummary, DataProvider, DashboardSnapshot};
use concierge_core::error::{ConsoleError, Result};
use concierge_core::feedback::{FeedbackItem, FeedbackStats};
use concierge_core::message::{
    DispatchReceipt, DraftMessage, MessageMode, MessageTransport,
};
use concierge_core::metrics::Metrics;
use concierge_core::operator::{AuthProvider, Operator};
use concierge_core::quick_action::QuickAction;
use concierge_core::traveler::Traveler;
use concierge_core::view::ActiveView;
use tokio::sync::RwLock;

use super::store::ConsoleStore;
use super::view_model::ConsoleViewModel;
use crate::busy::BusyIndicator;
use crate::dashboard::{ApplyOutcome, LoadSequencer};
use crate::dispatch::{self, MessageDispatcher};
use crate::recipient::{self, DestinationFilter};
use crate::session::{AUTH_FAILURE_MESSAGE, SessionManager, SessionState};

/// Application state for the operator console.
///
/// # Thread Safety
///
/// All mutable state sits behind one `tokio::sync::RwLock`. The lock is never
/// held across a collaborator call, so a slow provider does not block readers.
pub struct ConsoleState {
    store: RwLock<ConsoleStore>,
    session: SessionManager,
    data: Arc<dyn DataProvider>,
    loads: LoadSequencer,
    dispatcher: MessageDispatcher,
    busy: BusyIndicator,
}

impl ConsoleState {
    /// Creates a signed-out console with an empty cache.
    ///
    /// Messages are acknowledged locally until a transport is attached with
    /// [`ConsoleState::with_transport`].
    pub fn new(auth: Arc<dyn AuthProvider>, data: Arc<dyn DataProvider>) -> Self {
        Self {
            store: RwLock::new(ConsoleStore::default()),
            session: SessionManager::new(auth),
            data,
            loads: LoadSequencer::new(),
            dispatcher: MessageDispatcher::without_transport(),
            busy: BusyIndicator::new(),
        }
    }

    /// Sends dispatched messages through `transport`.
    pub fn with_transport(mut self, transport: Arc<dyn MessageTransport>) -> Self {
        self.dispatcher = MessageDispatcher::new(transport);
        self
    }

    // ============================================================================
    // Session
    // ============================================================================

    /// Signs an operator in. Returns whether a session was established.
    ///
    /// On failure the inline auth message is set; see [`Self::last_auth_error`].
    pub async fn sign_in(&self, email: &str, password: &str) -> bool {
        self.try_sign_in(email, password).await.is_ok()
    }

    /// Like [`Self::sign_in`], but returns the operator or the failure.
    ///
    /// Only one sign-in may wait on the provider at a time. A sign-out
    /// issued while it waits wins: the provider session it produced is ended
    /// and no operator is installed.
    ///
    /// # Errors
    ///
    /// - `Validation(MissingCredentials)` for an empty email or password; the
    ///   provider is not called and the busy flag is not raised.
    /// - `Auth` when the provider rejects the credentials or is unreachable,
    ///   when an operator is already signed in or another sign-in is pending,
    ///   and when a sign-out arrived before the provider answered.
    pub async fn try_sign_in(&self, email: &str, password: &str) -> Result<Operator> {
        SessionManager::check_credentials(email, password)?;
        let _slot = self.session.begin()?;

        let epoch = {
            let mut store = self.store.write().await;
            if store.session.is_signed_in() {
                return Err(ConsoleError::auth("an operator is already signed in"));
            }
            store.last_auth_error = None;
            self.session.epoch()
        };

        let _busy = self.busy.enter();
        tracing::debug!(email, "Signing in");
        let result = self.session.authenticate(email, password).await;

        {
            let mut store = self.store.write().await;
            if self.session.is_current(epoch) {
                return match result {
                    Ok(operator) => {
                        tracing::info!(
                            operator_id = %operator.id,
                            role = %operator.role,
                            "Operator signed in"
                        );
                        store.session = SessionState::SignedIn(operator.clone());
                        Ok(operator)
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "Sign-in failed");
                        store.last_auth_error = Some(AUTH_FAILURE_MESSAGE.to_string());
                        Err(err)
                    }
                };
            }
        }

        tracing::info!("Sign-in superseded by sign-out, discarding result");
        if result.is_ok() {
            if let Err(err) = self.session.end().await {
                tracing::warn!(error = %err, "Auth provider sign-out failed");
            }
        }
        Err(ConsoleError::auth("sign-in was cancelled by sign-out"))
    }

    /// Ends the session and discards the selection and the draft.
    ///
    /// Local state is cleared before the provider is told, so a provider
    /// failure never leaves a half-signed-out console. Such a failure is
    /// logged and otherwise ignored. A sign-in still waiting on the provider
    /// is cancelled.
    pub async fn sign_out(&self) {
        let previous = {
            let mut store = self.store.write().await;
            self.session.invalidate();
            store.end_session()
        };

        let Some(operator) = previous.operator() else {
            tracing::debug!("sign_out called while signed out");
            return;
        };

        if let Err(err) = self.session.end().await {
            tracing::warn!(error = %err, "Auth provider sign-out failed");
        }
        tracing::info!(operator_id = %operator.id, "Operator signed out");
    }

    // ============================================================================
    // Dashboard data
    // ============================================================================

    /// Fetches a fresh snapshot and replaces the cache with it.
    ///
    /// The load ticket is taken when `load` is called, not when the returned
    /// future is first polled. Of several overlapping loads the one called
    /// last determines the cache, whatever order the fetches finish in.
    ///
    /// # Errors
    ///
    /// `DataLoad` or `InvalidSnapshot`. The previous snapshot stays in place
    /// and the failure is kept for [`Self::last_load_error`].
    pub fn load(&self) -> impl Future<Output = Result<()>> + Send + '_ {
        let ticket = self.loads.issue();
        let busy = self.busy.enter();

        async move {
            let _busy = busy;
            tracing::debug!(ticket = ticket.sequence(), "Loading dashboard data");

            let fetched = self
                .data
                .fetch_snapshot()
                .await
                .and_then(|snapshot: DashboardSnapshot| {
                    snapshot.validate()?;
                    Ok(snapshot)
                });

            let mut store = self.store.write().await;
            match fetched {
                Ok(snapshot) => {
                    let travelers = snapshot.travelers.len();
                    let conversations = snapshot.conversations.len();
                    match store.cache.apply(ticket, snapshot) {
                        ApplyOutcome::Applied => {
                            let pruned = store.prune_selection();
                            tracing::info!(
                                ticket = ticket.sequence(),
                                travelers,
                                conversations,
                                pruned,
                                "Dashboard snapshot applied"
                            );
                        }
                        ApplyOutcome::Stale => {
                            tracing::debug!(
                                ticket = ticket.sequence(),
                                "Discarded snapshot from superseded load"
                            );
                        }
                    }
                    Ok(())
                }
                Err(err) => {
                    let err = if err.is_data_load() {
                        err
                    } else {
                        ConsoleError::data_load(err.to_string())
                    };
                    tracing::warn!(ticket = ticket.sequence(), error = %err, "Dashboard load failed");
                    store.cache.record_failure(ticket, err.clone());
                    Err(err)
                }
            }
        }
    }

    pub async fn set_search(&self, search: impl Into<String>) {
        self.store.write().await.selector.set_search(search);
    }

    pub async fn set_destination_filter(&self, filter: DestinationFilter) {
        self.store.write().await.selector.set_destination(filter);
    }

    // ============================================================================
    // Selection and draft
    // ============================================================================

    /// Flips a traveler's membership in the bulk selection.
    ///
    /// Returns whether the traveler is selected afterwards. Ids missing from
    /// the current snapshot can be deselected but never selected.
    pub async fn toggle_selection(&self, traveler_id: &str) -> bool {
        let mut store = self.store.write().await;
        if !store.selector.is_selected(traveler_id) && !store.cache.contains_traveler(traveler_id)
        {
            tracing::warn!(traveler_id, "Ignoring selection of unknown traveler");
            return false;
        }
        store.selector.toggle(traveler_id)
    }

    pub async fn clear_selection(&self) {
        self.store.write().await.selector.clear_selection();
    }

    pub async fn set_message_mode(&self, mode: MessageMode) {
        self.store.write().await.draft.mode = mode;
    }

    pub async fn set_body(&self, body: impl Into<String>) {
        self.store.write().await.draft.body = body.into();
    }

    /// Chooses the manual-mode recipient. `None` clears it.
    pub async fn set_recipient(&self, traveler_id: Option<String>) {
        self.store.write().await.draft.recipient = traveler_id;
    }

    /// Prefills the draft from a template and returns the new draft.
    pub async fn apply_quick_action(&self, action: QuickAction) -> DraftMessage {
        let mut store = self.store.write().await;
        store.draft = action.apply_to(&store.draft);
        tracing::debug!(action = action.label(), mode = %store.draft.mode, "Applied quick action");
        store.draft.clone()
    }

    // ============================================================================
    // Dispatch
    // ============================================================================

    /// Sends the draft in `mode`.
    ///
    /// Manual mode goes to the draft's recipient, bulk mode to every selected
    /// traveler. Once the transport acknowledges, the sent body is cleared and
    /// so is the recipient (manual) or the sent part of the selection (bulk).
    ///
    /// # Errors
    ///
    /// - `Validation` when the body is empty, the recipient or selection is
    ///   missing, or another dispatch is still in flight. The transport is
    ///   not called.
    /// - `DispatchTransport` when the transport fails. The draft is kept.
    pub async fn dispatch(&self, mode: MessageMode) -> Result<DispatchReceipt> {
        let (message, _slot) = {
            let store = self.store.read().await;
            let slot = self.dispatcher.begin()?;
            let message = dispatch::prepare(mode, &store.draft, store.selector.selection())
                .inspect_err(|reason| tracing::debug!(%reason, %mode, "Dispatch rejected"))?;
            (message, slot)
        };

        tracing::debug!(%mode, recipients = message.recipients.len(), "Dispatching message");
        match self.dispatcher.submit(&message).await {
            Ok(receipt) => {
                self.store.write().await.settle_dispatch(&message);
                tracing::info!(
                    %mode,
                    recipients = receipt.recipient_count,
                    message_id = receipt.message_id.as_deref().unwrap_or("-"),
                    "Message dispatched"
                );
                Ok(receipt)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Message dispatch failed, draft kept");
                Err(err)
            }
        }
    }

    /// Dispatches in whatever mode the draft is currently in.
    pub async fn send_draft(&self) -> Result<DispatchReceipt> {
        let mode = self.store.read().await.draft.mode;
        self.dispatch(mode).await
    }

    // ============================================================================
    // Layout
    // ============================================================================

    pub async fn set_active_view(&self, view: ActiveView) {
        self.store.write().await.active_view = view;
    }

    /// Returns whether the sidebar is open afterwards.
    pub async fn toggle_sidebar(&self) -> bool {
        let mut store = self.store.write().await;
        store.sidebar_open = !store.sidebar_open;
        store.sidebar_open
    }

    pub async fn set_sidebar_open(&self, open: bool) {
        self.store.write().await.sidebar_open = open;
    }

    // ============================================================================
    // Reads
    // ============================================================================

    pub async fn operator(&self) -> Option<Operator> {
        self.store.read().await.session.operator().cloned()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.store.read().await.session.is_signed_in()
    }

    /// True while any sign-in or load is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn is_sending(&self) -> bool {
        self.dispatcher.is_sending()
    }

    pub async fn last_auth_error(&self) -> Option<String> {
        self.store.read().await.last_auth_error.clone()
    }

    pub async fn last_load_error(&self) -> Option<ConsoleError> {
        self.store.read().await.cache.last_error().cloned()
    }

    pub async fn is_loaded(&self) -> bool {
        self.store.read().await.cache.is_loaded()
    }

    pub async fn metrics(&self) -> Option<Metrics> {
        self.store.read().await.cache.metrics().cloned()
    }

    pub async fn conversations(&self) -> Vec<Conversation> {
        self.store.read().await.cache.conversations().to_vec()
    }

    pub async fn travelers(&self) -> Vec<Traveler> {
        self.store.read().await.cache.travelers().to_vec()
    }

    pub async fn feedback(&self) -> Vec<FeedbackItem> {
        self.store.read().await.cache.feedback().to_vec()
    }

    /// Travelers matching the current search text and destination filter.
    pub async fn filtered_travelers(&self) -> Vec<Traveler> {
        let store = self.store.read().await;
        store
            .selector
            .filter(store.cache.travelers())
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn destinations(&self) -> BTreeSet<String> {
        recipient::destinations(self.store.read().await.cache.travelers())
    }

    pub async fn is_selected(&self, traveler_id: &str) -> bool {
        self.store.read().await.selector.is_selected(traveler_id)
    }

    pub async fn selection(&self) -> BTreeSet<String> {
        self.store.read().await.selector.selection().clone()
    }

    pub async fn draft(&self) -> DraftMessage {
        self.store.read().await.draft.clone()
    }

    pub async fn active_view(&self) -> ActiveView {
        self.store.read().await.active_view
    }

    pub async fn is_sidebar_open(&self) -> bool {
        self.store.read().await.sidebar_open
    }

    pub async fn feedback_stats(&self) -> FeedbackStats {
        FeedbackStats::from_items(self.store.read().await.cache.feedback())
    }

    pub async fn conversation_summary(&self) -> ConversationSummary {
        self.store
            .read()
            .await
            .cache
            .snapshot()
            .map(DashboardSnapshot::conversation_summary)
            .unwrap_or_default()
    }

    /// Everything a renderer needs, copied under a single read lock.
    pub async fn view_model(&self) -> ConsoleViewModel {
        let store = self.store.read().await;
        let travelers = store.cache.travelers();

        ConsoleViewModel {
            operator: store.session.operator().cloned(),
            busy: self.busy.is_busy(),
            sending: self.dispatcher.is_sending(),
            last_auth_error: store.last_auth_error.clone(),
            last_load_error: store.cache.last_error().map(ToString::to_string),
            loaded_at: store.cache.loaded_at(),
            metrics: store.cache.metrics().cloned(),
            conversations: store.cache.conversations().to_vec(),
            conversation_summary: store
                .cache
                .snapshot()
                .map(DashboardSnapshot::conversation_summary)
                .unwrap_or_default(),
            travelers: travelers.to_vec(),
            filtered_travelers: store
                .selector
                .filter(travelers)
                .into_iter()
                .cloned()
                .collect(),
            destinations: recipient::destinations(travelers),
            search: store.selector.search().to_string(),
            destination_filter: store.selector.destination().clone(),
            selection: store.selector.selection().clone(),
            draft: store.draft.clone(),
            feedback: store.cache.feedback().to_vec(),
            feedback_stats: FeedbackStats::from_items(store.cache.feedback()),
            active_view: store.active_view,
            sidebar_open: store.sidebar_open,
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
