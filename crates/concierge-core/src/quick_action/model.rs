//! Quick action and composer suggestion catalogue.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::message::{DraftMessage, MessageMode};

/// Pre-filled drafts offered next to the composer.
///
/// Applying one only fills the draft; it is sent through the normal dispatch
/// path with the same guards as a hand-written message.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QuickAction {
    CheckInReminder,
    WeatherAlert,
    EmergencyBroadcast,
    Welcome,
    CheckIn,
    Support,
}

impl QuickAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CheckInReminder => "Check-in Reminder",
            Self::WeatherAlert => "Weather Alert",
            Self::EmergencyBroadcast => "Emergency Broadcast",
            Self::Welcome => "Welcome Message",
            Self::CheckIn => "Check-in",
            Self::Support => "Support",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::CheckInReminder => "Send automated check-in messages",
            Self::WeatherAlert => "Broadcast weather updates",
            Self::EmergencyBroadcast => "Send urgent notifications",
            Self::Welcome => "Greet a traveler at the start of their trip",
            Self::CheckIn => "Ask a traveler how their trip is going",
            Self::Support => "Offer help with an ongoing issue",
        }
    }

    /// Broadcast actions target a cohort; suggestions target one traveler.
    pub fn mode(&self) -> MessageMode {
        match self {
            Self::CheckInReminder | Self::WeatherAlert | Self::EmergencyBroadcast => {
                MessageMode::Bulk
            }
            Self::Welcome | Self::CheckIn | Self::Support => MessageMode::Manual,
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            Self::CheckInReminder => {
                "Reminder: online check-in for your upcoming flight is now open. Check in early to pick your seat."
            }
            Self::WeatherAlert => {
                "Weather update for your destination: please review the local forecast and plan today's activities accordingly."
            }
            Self::EmergencyBroadcast => {
                "URGENT: please follow local authority guidance and reply to this message to confirm you are safe."
            }
            Self::Welcome => {
                "Welcome! We're glad to be part of your trip. Reply any time if you need anything."
            }
            Self::CheckIn => "Hi! Just checking in. How is your trip going so far?",
            Self::Support => {
                "We're sorry to hear about the trouble. Our team is on it and will follow up shortly."
            }
        }
    }

    /// Draft this action produces, keeping a manual recipient already chosen.
    pub fn apply_to(&self, draft: &DraftMessage) -> DraftMessage {
        let mode = self.mode();
        DraftMessage {
            mode,
            body: self.template().to_string(),
            recipient: match mode {
                MessageMode::Manual => draft.recipient.clone(),
                MessageMode::Bulk => None,
            },
        }
    }

    pub fn broadcasts() -> impl Iterator<Item = QuickAction> {
        Self::iter().filter(|action| action.mode() == MessageMode::Bulk)
    }

    pub fn suggestions() -> impl Iterator<Item = QuickAction> {
        Self::iter().filter(|action| action.mode() == MessageMode::Manual)
    }
}
