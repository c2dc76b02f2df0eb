//! Message dispatch: guard checks and submission to the transport.

mod dispatcher;

pub use dispatcher::{InFlightGuard, MessageDispatcher, prepare};
