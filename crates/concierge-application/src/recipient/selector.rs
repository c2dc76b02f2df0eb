use std::collections::{BTreeSet, HashSet};
use std::fmt;

use concierge_core::traveler::Traveler;
use serde::{Deserialize, Serialize};

/// Tag meaning "no destination filter".
pub const ALL_DESTINATIONS: &str = "all";

/// Destination filter chosen in the bulk composer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationFilter {
    #[default]
    All,
    Exact(String),
}

impl DestinationFilter {
    pub fn matches(&self, destination: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(wanted) => wanted == destination,
        }
    }
}

impl From<&str> for DestinationFilter {
    fn from(tag: &str) -> Self {
        if tag == ALL_DESTINATIONS {
            Self::All
        } else {
            Self::Exact(tag.to_string())
        }
    }
}

impl fmt::Display for DestinationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_DESTINATIONS),
            Self::Exact(destination) => f.write_str(destination),
        }
    }
}

/// Case-insensitive substring match against name or email.
pub fn matches_search(traveler: &Traveler, search: &str) -> bool {
    let needle = search.to_lowercase();
    traveler.name.to_lowercase().contains(&needle)
        || traveler.email.to_lowercase().contains(&needle)
}

/// Travelers matching both filters, in their original order.
pub fn filter_travelers<'a>(
    travelers: &'a [Traveler],
    search: &str,
    destination: &DestinationFilter,
) -> Vec<&'a Traveler> {
    travelers
        .iter()
        .filter(|t| matches_search(t, search) && destination.matches(&t.destination))
        .collect()
}

/// Distinct destinations present in `travelers`.
pub fn destinations(travelers: &[Traveler]) -> BTreeSet<String> {
    travelers.iter().map(|t| t.destination.clone()).collect()
}

/// Search filters plus the bulk selection set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientSelector {
    search: String,
    destination: DestinationFilter,
    selection: BTreeSet<String>,
}

impl RecipientSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn destination(&self) -> &DestinationFilter {
        &self.destination
    }

    pub fn set_destination(&mut self, destination: DestinationFilter) {
        self.destination = destination;
    }

    pub fn filter<'a>(&self, travelers: &'a [Traveler]) -> Vec<&'a Traveler> {
        filter_travelers(travelers, &self.search, &self.destination)
    }

    /// Flips membership of `id` and returns whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selection.remove(id) {
            false
        } else {
            self.selection.insert(id.to_string());
            true
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Removes the given ids, leaving anything selected since then.
    pub fn deselect<'a>(&mut self, ids: impl IntoIterator<Item = &'a String>) {
        for id in ids {
            self.selection.remove(id);
        }
    }

    /// Drops selected ids that are no longer known. Returns how many went.
    pub fn retain_known(&mut self, known: &HashSet<&str>) -> usize {
        let before = self.selection.len();
        self.selection.retain(|id| known.contains(id.as_str()));
        before - self.selection.len()
    }
}
