//! Traveler domain models.

mod model;

pub use model::{TravelDates, Traveler, TravelerStatus};
