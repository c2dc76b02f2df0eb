//! Recipient selection: traveler search, destination filter and the bulk cohort.

mod selector;

pub use selector::{
    ALL_DESTINATIONS, DestinationFilter, RecipientSelector, destinations, filter_travelers,
    matches_search,
};
