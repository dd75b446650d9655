//! Uncertain-match confirmation ledger.
//!
//! Human decisions on ambiguous matches are saved here and consulted on
//! every later calculation run, making resolutions durable and idempotent.

mod resolution;
mod store;

pub use resolution::MatchResolution;
pub use store::{ConfirmationMap, ConfirmationStore, InMemoryConfirmationStore};
