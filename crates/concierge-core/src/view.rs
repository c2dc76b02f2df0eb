//! Active view selector.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The screen the presentation layer should render.
///
/// Switching views has no side effects in the console state.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActiveView {
    #[default]
    Dashboard,
    Conversations,
    Travelers,
    Training,
    Analytics,
    Settings,
}

impl ActiveView {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Conversations => "AI Conversations",
            Self::Travelers => "Traveler Management",
            Self::Training => "AI Training",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }
}
