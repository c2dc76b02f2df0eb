//! Text rendering of the console read model.
//!
//! Renderers only read a [`ConsoleViewModel`]; they never touch the state
//! container.

use std::fmt::Write;

use colored::{ColoredString, Colorize};
use concierge_application::ConsoleViewModel;
use concierge_core::conversation::Conversation;
use concierge_core::message::MessageMode;
use concierge_core::quick_action::QuickAction;
use concierge_core::sentiment::{self, SentimentBand};
use concierge_core::view::ActiveView;
use strum::IntoEnumIterator;

fn heading(title: &str) -> ColoredString {
    format!("== {} ==", title).bright_magenta().bold()
}

fn sentiment_label(score: f64) -> ColoredString {
    let text = format!("{}%", sentiment::as_percent(score));
    match SentimentBand::from_score(score) {
        SentimentBand::Positive => text.green(),
        SentimentBand::Neutral => text.yellow(),
        SentimentBand::Negative => text.red(),
    }
}

/// Navigation line listing every view, the active one highlighted.
pub fn sidebar(vm: &ConsoleViewModel) -> String {
    ActiveView::iter()
        .map(|view| {
            if view == vm.active_view {
                format!("[{}]", view.title()).bright_cyan().bold().to_string()
            } else {
                view.title().bright_black().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Renders the active view.
pub fn view(vm: &ConsoleViewModel) -> String {
    let mut out = String::new();
    if vm.sidebar_open {
        let _ = writeln!(out, "{}", sidebar(vm));
    }
    let body = match vm.active_view {
        ActiveView::Dashboard => dashboard(vm),
        ActiveView::Conversations => conversations(vm),
        ActiveView::Travelers => travelers(vm),
        ActiveView::Analytics => analytics(vm),
        view @ (ActiveView::Training | ActiveView::Settings) => coming_soon(view),
    };
    out.push_str(&body);
    out
}

fn coming_soon(view: ActiveView) -> String {
    format!(
        "{}\n{}\n",
        heading(view.title()),
        "This view is not available yet.".bright_black()
    )
}

fn dashboard(vm: &ConsoleViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading(ActiveView::Dashboard.title()));

    match &vm.metrics {
        Some(m) => {
            let _ = writeln!(
                out,
                "Active conversations {:>6}   Avg response   {:>5.1}s   Satisfaction {:>4.1}/5",
                m.active_conversations, m.avg_response_time, m.satisfaction_score
            );
            let _ = writeln!(
                out,
                "Today's interactions {:>6}   Resolution rate {:>4.1}%   Escalation   {:>4.1}%",
                m.daily_interactions, m.resolution_rate, m.escalation_rate
            );
        }
        None => {
            let _ = writeln!(out, "{}", "No data loaded. Type 'load'.".bright_black());
        }
    }

    let summary = &vm.conversation_summary;
    if !summary.by_status.is_empty() {
        let by_status = summary
            .by_status
            .iter()
            .map(|(status, count)| format!("{} {}", count, status))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "Conversations: {} ({} need attention)",
            by_status, summary.needing_attention
        );
    }

    let _ = writeln!(out);
    out.push_str(&composer(vm));
    let _ = writeln!(out);
    out.push_str(&conversation_list(vm));
    out
}

fn traveler_name<'a>(vm: &'a ConsoleViewModel, conversation: &'a Conversation) -> &'a str {
    vm.travelers
        .iter()
        .find(|t| t.id == conversation.traveler_id)
        .map(|t| t.name.as_str())
        .unwrap_or(conversation.traveler_id.as_str())
}

fn conversation_list(vm: &ConsoleViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Recent conversations".bold());
    if vm.conversations.is_empty() {
        let _ = writeln!(out, "  {}", "none".bright_black());
    }
    for conversation in &vm.conversations {
        let marker = if conversation.needs_attention() {
            "!".red().bold()
        } else {
            " ".normal()
        };
        let _ = writeln!(
            out,
            "{} #{:<4} {:<20} {:<10} {:<7} sentiment {}",
            marker,
            conversation.id,
            traveler_name(vm, conversation),
            conversation.status,
            conversation.priority,
            sentiment_label(conversation.sentiment_score)
        );
    }
    out
}

fn conversations(vm: &ConsoleViewModel) -> String {
    format!(
        "{}\n{}",
        heading(ActiveView::Conversations.title()),
        conversation_list(vm)
    )
}

fn travelers(vm: &ConsoleViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", heading(ActiveView::Travelers.title()));
    let _ = writeln!(
        out,
        "search: '{}'   destination: {}   selected: {}",
        vm.search,
        vm.destination_filter,
        vm.selection.len()
    );
    if !vm.destinations.is_empty() {
        let destinations = vm.destinations.iter().cloned().collect::<Vec<_>>().join(" | ");
        let _ = writeln!(out, "{}", format!("destinations: {}", destinations).bright_black());
    }

    if vm.filtered_travelers.is_empty() {
        let _ = writeln!(out, "  {}", "no travelers match".bright_black());
    }
    for traveler in &vm.filtered_travelers {
        let check = if vm.selection.contains(&traveler.id) {
            "[x]".green()
        } else {
            "[ ]".normal()
        };
        let _ = writeln!(
            out,
            "{} {:<4} {:<20} {:<18} {:<14} {}",
            check,
            traveler.id,
            traveler.name,
            traveler.destination,
            traveler.status.label(),
            traveler.booking_reference.bright_black()
        );
    }
    let _ = writeln!(out);
    out.push_str(&composer(vm));
    out
}

fn analytics(vm: &ConsoleViewModel) -> String {
    let mut out = String::new();
    let stats = &vm.feedback_stats;
    let _ = writeln!(out, "{}", heading(ActiveView::Analytics.title()));
    let _ = writeln!(
        out,
        "Complaints {}   Suggestions {}   Tickets {}   Urgent {}",
        stats.complaints,
        stats.suggestions,
        stats.tickets,
        stats.urgent.to_string().red()
    );
    for item in &vm.feedback {
        let _ = writeln!(
            out,
            "  {:<10} {:<7} {:<12} {} ({}, {}) sentiment {}",
            item.kind,
            item.priority,
            item.status,
            item.subject,
            item.traveler,
            item.destination,
            sentiment_label(item.sentiment)
        );
    }
    out
}

fn composer(vm: &ConsoleViewModel) -> String {
    let mut out = String::new();
    let draft = &vm.draft;
    let target = match draft.mode {
        MessageMode::Manual => draft
            .manual_recipient()
            .map(|id| format!("to {}", id))
            .unwrap_or_else(|| "no recipient".to_string()),
        MessageMode::Bulk => format!("{} selected", vm.selection.len()),
    };
    let _ = writeln!(
        out,
        "{} [{}] {}{}",
        "Message".bold(),
        draft.mode,
        target,
        if vm.sending { " (sending...)" } else { "" }
    );
    let body = if draft.body.is_empty() {
        "(empty)".bright_black()
    } else {
        draft.body.as_str().normal()
    };
    let _ = writeln!(out, "  {}", body);

    let actions = QuickAction::iter()
        .filter(|action| action.mode() == draft.mode)
        .map(|action| action.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "  {}", format!("quick: {}", actions).bright_black());
    out
}

/// One-line session summary.
pub fn status(vm: &ConsoleViewModel) -> String {
    let who = match &vm.operator {
        Some(op) => format!("{} <{}> ({})", op.display_name, op.email, op.role),
        None => "signed out".to_string(),
    };
    let mut line = format!("{} | view: {}", who, vm.active_view);
    if vm.busy {
        line.push_str(" | loading...");
    }
    if let Some(at) = vm.loaded_at {
        let _ = write!(line, " | loaded {}", at.format("%H:%M:%S"));
    }
    if let Some(err) = &vm.last_load_error {
        let _ = write!(line, " | {}", err.red());
    }
    line
}

pub fn help() -> String {
    [
        ("login <email> <password>", "sign in"),
        ("logout", "sign out and discard the draft"),
        ("load", "refresh dashboard data"),
        ("view <name>", "dashboard, conversations, travelers, training, analytics, settings"),
        ("sidebar [open|closed]", "toggle or set the navigation line"),
        ("search <text>", "filter travelers by name or email"),
        ("dest <destination|all>", "filter travelers by destination"),
        ("select <id>", "toggle a traveler in the bulk selection"),
        ("clear", "clear the bulk selection"),
        ("mode <manual|bulk>", "switch the composer mode"),
        ("to <id|none>", "choose the manual recipient"),
        ("body <text>", "set the message body"),
        ("quick <action>", "prefill the draft from a template"),
        ("send [manual|bulk]", "send the draft"),
        ("status", "session summary"),
        ("json", "dump the read model as JSON"),
        ("quit", "exit"),
    ]
    .iter()
    .map(|(usage, what)| format!("  {:<26} {}", usage.bright_cyan(), what))
    .collect::<Vec<_>>()
    .join("\n")
}
