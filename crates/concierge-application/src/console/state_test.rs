use super::*;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use concierge_core::conversation::{ConversationStatus, Priority};
use concierge_core::error::ValidationError;
use concierge_core::message::{OutgoingMessage, TransportAck};
use concierge_core::operator::{AuthIdentity, DEFAULT_OPERATOR_NAME};
use concierge_core::traveler::{TravelDates, TravelerStatus};
use std::collections::{BTreeMap, VecDeque};
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::task::Poll;
use tokio::sync::oneshot;

// Mock AuthProvider accepting a single password
struct MockAuthProvider {
    password: &'static str,
    sign_ins: AtomicUsize,
    sign_outs: AtomicUsize,
}

impl MockAuthProvider {
    fn new() -> Self {
        Self {
            password: "password",
            sign_ins: AtomicUsize::new(0),
            sign_outs: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthIdentity> {
        self.sign_ins.fetch_add(1, Ordering::SeqCst);
        if password == self.password {
            Ok(AuthIdentity::new("op-1", email).with_display_name(DEFAULT_OPERATOR_NAME))
        } else {
            Err(ConsoleError::auth("invalid login credentials"))
        }
    }

    async fn sign_out(&self) -> Result<()> {
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
        Err(ConsoleError::auth("session already expired"))
    }
}

// Mock AuthProvider whose sign-in finishes only when the test releases it
#[derive(Default)]
struct GatedAuthProvider {
    gate: Mutex<Option<oneshot::Receiver<()>>>,
    sign_ins: AtomicUsize,
    sign_outs: AtomicUsize,
}

impl GatedAuthProvider {
    fn new(gate: oneshot::Receiver<()>) -> Self {
        Self {
            gate: Mutex::new(Some(gate)),
            ..Self::default()
        }
    }
}

#[async_trait]
impl AuthProvider for GatedAuthProvider {
    async fn sign_in_with_password(&self, email: &str, _password: &str) -> Result<AuthIdentity> {
        self.sign_ins.fetch_add(1, Ordering::SeqCst);
        let gate = self.gate.lock().unwrap().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        Ok(AuthIdentity::new("op-1", email))
    }

    async fn sign_out(&self) -> Result<()> {
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// Mock DataProvider answering from a queue
struct QueuedDataProvider {
    responses: Mutex<VecDeque<Result<DashboardSnapshot>>>,
}

impl QueuedDataProvider {
    fn new(responses: Vec<Result<DashboardSnapshot>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait]
impl DataProvider for QueuedDataProvider {
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ConsoleError::data_load("no response queued")))
    }
}

// Mock DataProvider whose fetches finish only when the test releases them
struct GatedDataProvider {
    gates: Mutex<VecDeque<oneshot::Receiver<Result<DashboardSnapshot>>>>,
}

#[async_trait]
impl DataProvider for GatedDataProvider {
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot> {
        let gate = self.gates.lock().unwrap().pop_front();
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ConsoleError::data_load("gate dropped"))),
            None => Err(ConsoleError::data_load("no gate queued")),
        }
    }
}

// Mock MessageTransport recording every message
#[derive(Default)]
struct RecordingTransport {
    sent: Mutex<Vec<OutgoingMessage>>,
    fail: bool,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl RecordingTransport {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn gated(rx: oneshot::Receiver<()>) -> Self {
        Self {
            gate: Mutex::new(Some(rx)),
            ..Self::default()
        }
    }

    fn sent(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageTransport for RecordingTransport {
    async fn send(&self, message: &OutgoingMessage) -> Result<TransportAck> {
        self.sent.lock().unwrap().push(message.clone());
        let gate = self.gate.lock().unwrap().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        if self.fail {
            return Err(ConsoleError::transport("gateway timeout"));
        }
        Ok(TransportAck {
            message_id: Some("msg-1".to_string()),
        })
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn traveler(id: &str, name: &str, destination: &str) -> Traveler {
    Traveler {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: None,
        booking_reference: format!("MW-2024-{:0>3}", id),
        destination: destination.to_string(),
        travel_dates: TravelDates::new(date(2024, 1, 15), date(2024, 1, 22)),
        status: TravelerStatus::Traveling,
        preferences: BTreeMap::new(),
        created_at: None,
        updated_at: None,
    }
}

fn snapshot(active: u64, travelers: Vec<Traveler>) -> DashboardSnapshot {
    DashboardSnapshot::new(
        Metrics {
            active_conversations: active,
            ..Metrics::default()
        },
        Vec::new(),
        travelers,
    )
}

fn two_travelers() -> DashboardSnapshot {
    snapshot(
        127,
        vec![
            traveler("1", "Sarah Johnson", "Tokyo, Japan"),
            traveler("2", "Michael Chen", "Barcelona, Spain"),
        ],
    )
}

fn console(data: Vec<Result<DashboardSnapshot>>) -> ConsoleState {
    ConsoleState::new(
        Arc::new(MockAuthProvider::new()),
        Arc::new(QueuedDataProvider::new(data)),
    )
}

/// Polls `fut` exactly once.
async fn poll_once<F: Future + Unpin>(fut: &mut F) -> Poll<F::Output> {
    std::future::poll_fn(|cx| Poll::Ready(Pin::new(&mut *fut).poll(cx))).await
}

// ============================================================================
// Session
// ============================================================================

#[tokio::test]
async fn sign_in_installs_operator_profile() {
    let state = console(Vec::new());

    assert!(state.sign_in("admin@example.com", "password").await);

    let operator = state.operator().await.unwrap();
    assert_eq!(operator.email, "admin@example.com");
    assert_eq!(operator.display_name, DEFAULT_OPERATOR_NAME);
    assert!(operator.is_admin());
    assert!(state.last_auth_error().await.is_none());
}

#[tokio::test]
async fn failed_sign_in_clears_busy_and_sets_inline_error() {
    let state = console(Vec::new());
    assert!(!state.is_busy());

    assert!(!state.sign_in("a@b.com", "wrong").await);

    assert!(!state.is_busy());
    assert!(state.operator().await.is_none());
    assert_eq!(
        state.last_auth_error().await.as_deref(),
        Some(AUTH_FAILURE_MESSAGE)
    );
}

#[tokio::test]
async fn empty_credentials_are_rejected_without_provider_call() {
    let auth = Arc::new(MockAuthProvider::new());
    let state = ConsoleState::new(auth.clone(), Arc::new(QueuedDataProvider::new(Vec::new())));

    let err = state.try_sign_in("", "password").await.unwrap_err();

    assert_eq!(err.validation(), Some(ValidationError::MissingCredentials));
    assert_eq!(auth.sign_ins.load(Ordering::SeqCst), 0);
    assert!(!state.is_busy());
}

#[tokio::test]
async fn second_sign_in_is_rejected_while_signed_in() {
    let auth = Arc::new(MockAuthProvider::new());
    let state = ConsoleState::new(auth.clone(), Arc::new(QueuedDataProvider::new(Vec::new())));
    state.try_sign_in("admin@example.com", "password").await.unwrap();

    let err = state
        .try_sign_in("other@example.com", "password")
        .await
        .unwrap_err();

    assert!(err.is_auth());
    assert_eq!(auth.sign_ins.load(Ordering::SeqCst), 1);
    assert_eq!(state.operator().await.unwrap().email, "admin@example.com");
}

#[tokio::test]
async fn sign_in_then_sign_out_restores_pre_sign_in_state() {
    let auth = Arc::new(MockAuthProvider::new());
    let state = ConsoleState::new(
        auth.clone(),
        Arc::new(QueuedDataProvider::new(vec![Ok(two_travelers())])),
    );
    state.load().await.unwrap();
    let before = (state.operator().await, state.selection().await, state.draft().await);

    state.sign_in("admin@example.com", "password").await;
    state.toggle_selection("1").await;
    state.set_recipient(Some("2".to_string())).await;
    state.set_body("Hello").await;
    // The provider's sign-out fails; the local session still ends.
    state.sign_out().await;

    let after = (state.operator().await, state.selection().await, state.draft().await);
    assert_eq!(before, after);
    assert_eq!(auth.sign_outs.load(Ordering::SeqCst), 1);
    assert!(state.is_loaded().await);
}

#[tokio::test]
async fn sign_out_while_signed_out_skips_provider() {
    let auth = Arc::new(MockAuthProvider::new());
    let state = ConsoleState::new(auth.clone(), Arc::new(QueuedDataProvider::new(Vec::new())));

    state.sign_out().await;

    assert_eq!(auth.sign_outs.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn sign_out_cancels_pending_sign_in() {
    let (release, gate) = oneshot::channel();
    let auth = Arc::new(GatedAuthProvider::new(gate));
    let state = ConsoleState::new(auth.clone(), Arc::new(QueuedDataProvider::new(Vec::new())));

    let mut pending = Box::pin(state.try_sign_in("admin@example.com", "password"));
    assert!(poll_once(&mut pending).await.is_pending());
    state.sign_out().await;
    release.send(()).unwrap();

    let err = pending.await.unwrap_err();
    assert!(err.is_auth());
    assert!(!state.is_signed_in().await);
    assert!(state.last_auth_error().await.is_none());
    assert!(!state.is_busy());
    // The provider session the cancelled sign-in opened is closed again.
    assert_eq!(auth.sign_outs.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn overlapping_sign_in_fails_fast() {
    let (release, gate) = oneshot::channel();
    let auth = Arc::new(GatedAuthProvider::new(gate));
    let state = ConsoleState::new(auth.clone(), Arc::new(QueuedDataProvider::new(Vec::new())));

    let mut first = Box::pin(state.try_sign_in("first@example.com", "password"));
    assert!(poll_once(&mut first).await.is_pending());

    let err = state
        .try_sign_in("second@example.com", "password")
        .await
        .unwrap_err();
    assert!(err.is_auth());
    assert_eq!(auth.sign_ins.load(Ordering::SeqCst), 1);
    assert!(state.last_auth_error().await.is_none());

    release.send(()).unwrap();
    first.await.unwrap();
    assert_eq!(state.operator().await.unwrap().email, "first@example.com");

    // The slot is free again once the first sign-in settled.
    state.sign_out().await;
    assert!(state.sign_in("second@example.com", "password").await);
}

#[tokio::test]
async fn sign_in_after_cancelled_sign_in_succeeds() {
    let (release, gate) = oneshot::channel();
    let auth = Arc::new(GatedAuthProvider::new(gate));
    let state = ConsoleState::new(auth, Arc::new(QueuedDataProvider::new(Vec::new())));

    let mut pending = Box::pin(state.try_sign_in("admin@example.com", "password"));
    assert!(poll_once(&mut pending).await.is_pending());
    state.sign_out().await;
    release.send(()).unwrap();
    pending.await.unwrap_err();

    assert!(state.sign_in("admin@example.com", "password").await);
    assert!(state.is_signed_in().await);
}

// ============================================================================
// Dashboard data
// ============================================================================

#[tokio::test]
async fn load_populates_cache_and_clears_busy() {
    let state = console(vec![Ok(two_travelers())]);

    let pending = state.load();
    assert!(state.is_busy());
    pending.await.unwrap();

    assert!(!state.is_busy());
    assert_eq!(state.metrics().await.unwrap().active_conversations, 127);
    assert_eq!(state.travelers().await.len(), 2);
    assert!(state.last_load_error().await.is_none());
}

#[tokio::test]
async fn later_load_wins_even_when_it_finishes_first() {
    let (tx1, rx1) = oneshot::channel();
    let (tx2, rx2) = oneshot::channel();
    let state = ConsoleState::new(
        Arc::new(MockAuthProvider::new()),
        Arc::new(GatedDataProvider {
            gates: Mutex::new(VecDeque::from([rx1, rx2])),
        }),
    );

    let mut first = Box::pin(state.load());
    let mut second = Box::pin(state.load());
    assert!(poll_once(&mut first).await.is_pending());
    assert!(poll_once(&mut second).await.is_pending());

    tx2.send(Ok(snapshot(2, Vec::new()))).unwrap();
    second.await.unwrap();
    tx1.send(Ok(snapshot(1, Vec::new()))).unwrap();
    first.await.unwrap();

    assert_eq!(state.metrics().await.unwrap().active_conversations, 2);
    assert!(!state.is_busy());
}

#[tokio::test]
async fn later_load_wins_when_it_finishes_last() {
    let (tx1, rx1) = oneshot::channel();
    let (tx2, rx2) = oneshot::channel();
    let state = ConsoleState::new(
        Arc::new(MockAuthProvider::new()),
        Arc::new(GatedDataProvider {
            gates: Mutex::new(VecDeque::from([rx1, rx2])),
        }),
    );

    let mut first = Box::pin(state.load());
    let mut second = Box::pin(state.load());
    assert!(poll_once(&mut first).await.is_pending());
    assert!(poll_once(&mut second).await.is_pending());

    tx1.send(Ok(snapshot(1, Vec::new()))).unwrap();
    first.await.unwrap();
    assert_eq!(state.metrics().await.unwrap().active_conversations, 1);
    tx2.send(Ok(snapshot(2, Vec::new()))).unwrap();
    second.await.unwrap();

    assert_eq!(state.metrics().await.unwrap().active_conversations, 2);
}

#[tokio::test]
async fn failed_load_keeps_previous_snapshot() {
    let state = console(vec![
        Ok(two_travelers()),
        Err(ConsoleError::data_load("connection reset")),
        Ok(snapshot(3, Vec::new())),
    ]);
    state.load().await.unwrap();

    let err = state.load().await.unwrap_err();

    assert!(err.is_data_load());
    assert!(!state.is_busy());
    assert_eq!(state.metrics().await.unwrap().active_conversations, 127);
    assert_eq!(state.last_load_error().await, Some(err));

    state.load().await.unwrap();
    assert!(state.last_load_error().await.is_none());
}

#[tokio::test]
async fn provider_errors_are_reported_as_data_load() {
    let state = console(vec![Err(ConsoleError::io("socket closed"))]);

    let err = state.load().await.unwrap_err();

    assert!(matches!(err, ConsoleError::DataLoad(_)));
    assert!(!state.is_loaded().await);
}

#[tokio::test]
async fn invalid_snapshot_is_never_applied() {
    let mut bad = two_travelers();
    bad.conversations.push(Conversation {
        id: "c-1".to_string(),
        traveler_id: "404".to_string(),
        agent_id: None,
        status: ConversationStatus::Active,
        priority: Priority::Medium,
        sentiment_score: 0.5,
        last_activity_at: Utc::now(),
    });
    let state = console(vec![Ok(bad)]);

    let err = state.load().await.unwrap_err();

    assert!(matches!(err, ConsoleError::InvalidSnapshot(_)));
    assert!(!state.is_loaded().await);
}

#[tokio::test]
async fn reload_prunes_selection_to_known_travelers() {
    let state = console(vec![
        Ok(two_travelers()),
        Ok(snapshot(5, vec![traveler("1", "Sarah Johnson", "Tokyo, Japan")])),
    ]);
    state.load().await.unwrap();
    state.toggle_selection("1").await;
    state.toggle_selection("2").await;

    state.load().await.unwrap();

    assert_eq!(state.selection().await, BTreeSet::from(["1".to_string()]));
}

#[tokio::test]
async fn search_and_destination_narrow_filtered_travelers() {
    let state = console(vec![Ok(two_travelers())]);
    state.load().await.unwrap();

    state.set_search("CHEN").await;
    let names: Vec<_> = state
        .filtered_travelers()
        .await
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, ["Michael Chen"]);

    state.set_search("").await;
    state
        .set_destination_filter(DestinationFilter::from("Tokyo, Japan"))
        .await;
    let ids: Vec<_> = state
        .filtered_travelers()
        .await
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, ["1"]);
    assert_eq!(state.destinations().await.len(), 2);
}

// ============================================================================
// Selection and draft
// ============================================================================

#[tokio::test]
async fn toggle_ignores_unknown_travelers() {
    let state = console(vec![Ok(two_travelers())]);
    state.load().await.unwrap();

    assert!(!state.toggle_selection("99").await);
    assert!(state.toggle_selection("1").await);
    assert!(!state.toggle_selection("1").await);
    assert!(state.selection().await.is_empty());
}

#[tokio::test]
async fn quick_action_prefills_draft() {
    let state = console(Vec::new());
    state.set_recipient(Some("1".to_string())).await;

    let draft = state.apply_quick_action(QuickAction::Support).await;
    assert_eq!(draft.mode, MessageMode::Manual);
    assert_eq!(draft.body, QuickAction::Support.template());
    assert_eq!(draft.recipient.as_deref(), Some("1"));

    let draft = state.apply_quick_action(QuickAction::CheckInReminder).await;
    assert_eq!(draft.mode, MessageMode::Bulk);
    assert_eq!(state.draft().await, draft);
}

// ============================================================================
// Dispatch
// ============================================================================

#[tokio::test]
async fn manual_dispatch_without_recipient_never_reaches_transport() {
    let transport = Arc::new(RecordingTransport::default());
    let state = console(Vec::new()).with_transport(transport.clone());
    state.set_body("Hello").await;

    let err = state.dispatch(MessageMode::Manual).await.unwrap_err();

    assert_eq!(err.validation(), Some(ValidationError::MissingRecipient));
    assert!(transport.sent().is_empty());
    assert_eq!(state.draft().await.body, "Hello");
}

#[tokio::test]
async fn empty_body_is_rejected_before_recipients() {
    let transport = Arc::new(RecordingTransport::default());
    let state = console(Vec::new()).with_transport(transport.clone());
    state.set_body("   ").await;

    let err = state.dispatch(MessageMode::Bulk).await.unwrap_err();

    assert_eq!(err.validation(), Some(ValidationError::EmptyBody));
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn bulk_dispatch_sends_to_selection_and_clears_it() {
    let transport = Arc::new(RecordingTransport::default());
    let state = console(vec![Ok(two_travelers())]).with_transport(transport.clone());
    state.load().await.unwrap();
    state.toggle_selection("1").await;
    state.toggle_selection("2").await;
    state.set_body("Reminder").await;

    let receipt = state.dispatch(MessageMode::Bulk).await.unwrap();

    assert_eq!(receipt.recipient_count, 2);
    assert_eq!(receipt.message_id.as_deref(), Some("msg-1"));
    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipients, ["1", "2"]);
    assert_eq!(sent[0].body, "Reminder");
    assert!(state.selection().await.is_empty());
    assert_eq!(state.draft().await.body, "");
}

#[tokio::test]
async fn manual_dispatch_clears_body_and_recipient() {
    let transport = Arc::new(RecordingTransport::default());
    let state = console(Vec::new()).with_transport(transport.clone());
    state.set_recipient(Some("2".to_string())).await;
    state.set_body("How is Barcelona?").await;

    state.send_draft().await.unwrap();

    assert_eq!(transport.sent()[0].recipients, ["2"]);
    assert!(state.draft().await.is_empty());
}

#[tokio::test]
async fn transport_failure_keeps_draft_and_selection() {
    let transport = Arc::new(RecordingTransport::failing());
    let state = console(vec![Ok(two_travelers())]).with_transport(transport.clone());
    state.load().await.unwrap();
    state.toggle_selection("2").await;
    state.set_body("Weather alert").await;

    let err = state.dispatch(MessageMode::Bulk).await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(state.draft().await.body, "Weather alert");
    assert!(state.is_selected("2").await);
    assert!(!state.is_sending());
}

#[tokio::test]
async fn concurrent_dispatch_is_rejected_while_one_is_in_flight() {
    let (release, gate) = oneshot::channel();
    let transport = Arc::new(RecordingTransport::gated(gate));
    let state = console(Vec::new()).with_transport(transport.clone());
    state.set_recipient(Some("1".to_string())).await;
    state.set_body("First").await;

    let mut first = Box::pin(state.dispatch(MessageMode::Manual));
    assert!(poll_once(&mut first).await.is_pending());
    assert!(state.is_sending());

    let err = state.dispatch(MessageMode::Manual).await.unwrap_err();
    assert_eq!(err.validation(), Some(ValidationError::DispatchInFlight));

    release.send(()).unwrap();
    first.await.unwrap();
    assert!(!state.is_sending());
    assert_eq!(transport.sent().len(), 1);
}

#[tokio::test]
async fn edits_made_while_sending_survive_the_ack() {
    let (release, gate) = oneshot::channel();
    let transport = Arc::new(RecordingTransport::gated(gate));
    let state = console(Vec::new()).with_transport(transport);
    state.set_recipient(Some("1".to_string())).await;
    state.set_body("First").await;

    let mut pending = Box::pin(state.dispatch(MessageMode::Manual));
    assert!(poll_once(&mut pending).await.is_pending());
    state.set_body("Second").await;
    release.send(()).unwrap();
    pending.await.unwrap();

    let draft = state.draft().await;
    assert_eq!(draft.body, "Second");
    assert!(draft.recipient.is_none());
}

#[tokio::test]
async fn dispatch_without_transport_acknowledges_immediately() {
    let state = console(Vec::new());
    state.set_recipient(Some("1".to_string())).await;
    state.set_body("Hi").await;

    let receipt = state.dispatch(MessageMode::Manual).await.unwrap();

    assert_eq!(receipt.recipient_count, 1);
    assert!(receipt.message_id.is_none());
}

// ============================================================================
// Layout and view model
// ============================================================================

#[tokio::test]
async fn sidebar_starts_open_and_toggles() {
    let state = console(Vec::new());

    assert!(state.is_sidebar_open().await);
    assert!(!state.toggle_sidebar().await);
    state.set_sidebar_open(true).await;
    assert!(state.is_sidebar_open().await);
}

#[tokio::test]
async fn view_model_reflects_store() {
    let state = console(vec![Ok(two_travelers())]);
    state.sign_in("admin@example.com", "password").await;
    state.load().await.unwrap();
    state.set_active_view(ActiveView::Travelers).await;
    state.set_search("sarah").await;
    state.toggle_selection("1").await;

    let vm = state.view_model().await;

    assert!(vm.operator.is_some());
    assert!(!vm.busy);
    assert_eq!(vm.active_view, ActiveView::Travelers);
    assert_eq!(vm.travelers.len(), 2);
    assert_eq!(vm.filtered_travelers.len(), 1);
    assert_eq!(vm.selection.len(), 1);
    assert!(vm.loaded_at.is_some());
    assert!(vm.sidebar_open);
    assert_eq!(vm.feedback_stats, FeedbackStats::default());
}

#[tokio::test]
async fn view_model_serializes_for_external_renderers() {
    let state = console(vec![Ok(two_travelers())]);
    state.sign_in("admin@example.com", "password").await;
    state.load().await.unwrap();
    state.set_destination_filter(DestinationFilter::from("Tokyo, Japan")).await;
    state.toggle_selection("2").await;

    let vm = state.view_model().await;
    let json = serde_json::to_value(&vm).unwrap();

    assert_eq!(json["operator"]["email"], "admin@example.com");
    assert_eq!(json["active_view"], "dashboard");
    assert_eq!(json["draft"]["mode"], "manual");
    assert_eq!(json["selection"], serde_json::json!(["2"]));
    assert_eq!(json["metrics"]["active_conversations"], 127);
    assert_eq!(json["filtered_travelers"].as_array().unwrap().len(), 1);

    let back: ConsoleViewModel = serde_json::from_value(json).unwrap();
    assert_eq!(back, vm);
}
