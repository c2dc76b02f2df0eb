//! Operator command parsing.
//!
//! Each input line becomes one [`Command`]. Parsing is pure; executing a
//! command is the REPL's job.

use std::str::FromStr;

use concierge_application::DestinationFilter;
use concierge_core::message::MessageMode;
use concierge_core::quick_action::QuickAction;
use concierge_core::view::ActiveView;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login { email: String, password: String },
    Logout,
    Load,
    View(ActiveView),
    /// `None` toggles.
    Sidebar(Option<bool>),
    Search(String),
    Destination(DestinationFilter),
    Select(String),
    ClearSelection,
    Mode(MessageMode),
    /// `None` clears the manual recipient.
    To(Option<String>),
    Body(String),
    Quick(QuickAction),
    /// `None` sends in the draft's current mode.
    Send(Option<MessageMode>),
    Status,
    Json,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{value}' is not a valid {what}")]
    InvalidValue { what: &'static str, value: String },
}

/// Names offered by tab completion.
pub const COMMAND_NAMES: &[&str] = &[
    "login", "logout", "load", "view", "sidebar", "search", "dest", "select", "clear", "mode",
    "to", "body", "quick", "send", "status", "json", "help", "quit",
];

fn parse_value<T: FromStr>(what: &'static str, value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue {
        what,
        value: value.to_string(),
    })
}

/// Parses one line. Blank lines are the caller's concern.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (name, rest) = line
        .split_once(char::is_whitespace)
        .map(|(name, rest)| (name, rest.trim()))
        .unwrap_or((line, ""));

    let command = match name {
        "login" => {
            let mut args = rest.split_whitespace();
            match (args.next(), args.next(), args.next()) {
                (Some(email), Some(password), None) => Command::Login {
                    email: email.to_string(),
                    password: password.to_string(),
                },
                _ => return Err(ParseError::Usage("login <email> <password>")),
            }
        }
        "logout" => Command::Logout,
        "load" | "refresh" => Command::Load,
        "view" => {
            if rest.is_empty() {
                return Err(ParseError::Usage(
                    "view <dashboard|conversations|travelers|training|analytics|settings>",
                ));
            }
            Command::View(parse_value("view", rest)?)
        }
        "sidebar" => match rest {
            "" => Command::Sidebar(None),
            "open" | "on" => Command::Sidebar(Some(true)),
            "closed" | "close" | "off" => Command::Sidebar(Some(false)),
            _ => return Err(ParseError::Usage("sidebar [open|closed]")),
        },
        "search" => Command::Search(rest.to_string()),
        "dest" => {
            if rest.is_empty() {
                return Err(ParseError::Usage("dest <destination|all>"));
            }
            Command::Destination(DestinationFilter::from(rest))
        }
        "select" => {
            if rest.is_empty() {
                return Err(ParseError::Usage("select <traveler-id>"));
            }
            Command::Select(rest.to_string())
        }
        "clear" => Command::ClearSelection,
        "mode" => {
            if rest.is_empty() {
                return Err(ParseError::Usage("mode <manual|bulk>"));
            }
            Command::Mode(parse_value("mode", rest)?)
        }
        "to" => match rest {
            "" => return Err(ParseError::Usage("to <traveler-id|none>")),
            "none" => Command::To(None),
            id => Command::To(Some(id.to_string())),
        },
        "body" => Command::Body(rest.to_string()),
        "quick" => {
            if rest.is_empty() {
                return Err(ParseError::Usage("quick <action>"));
            }
            Command::Quick(parse_value("quick action", rest)?)
        }
        "send" => match rest {
            "" => Command::Send(None),
            mode => Command::Send(Some(parse_value("mode", mode)?)),
        },
        "status" => Command::Status,
        "json" => Command::Json,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };

    Ok(command)
}

impl Command {
    /// Whether the command may run without a signed-in operator.
    pub fn allowed_signed_out(&self) -> bool {
        matches!(
            self,
            Command::Login { .. } | Command::Help | Command::Quit | Command::Status
        )
    }
}
