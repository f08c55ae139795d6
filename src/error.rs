//! Error types for the scoring engine.

use crate::SessionId;

/// All errors the engine can surface.
///
/// Callers map these to exactly two outcomes: a structured "not found"
/// response and a generic internal-failure response. Oversell and empty
/// ledgers are defined results, not errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The session id does not exist. No partial state is written.
    #[error("session {0} not found")]
    SessionNotFound(SessionId),

    /// The ledger fetch or the outcome commit failed. The store rolls
    /// back the whole scoring operation; nothing partial survives.
    #[error("storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
