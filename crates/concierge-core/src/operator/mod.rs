//! Operator domain module.
//!
//! - `model`: the signed-in operator and their role
//! - `provider`: the auth collaborator trait and the identity it returns

mod model;
mod provider;

pub use model::{DEFAULT_OPERATOR_NAME, Operator, OperatorRole};
pub use provider::{AuthIdentity, AuthProvider};
