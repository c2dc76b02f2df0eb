//! Console state container.
//!
//! - `state`: `ConsoleState`, the single owner of all mutable console state
//! - `store`: the data guarded by the container's lock
//! - `view_model`: an owned snapshot of everything a renderer reads

mod state;
mod store;
mod view_model;

pub use state::ConsoleState;
pub use view_model::ConsoleViewModel;
