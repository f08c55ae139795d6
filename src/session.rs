//! Session metadata.
//!
//! The scoring engine reads only the identifier and player; the rest of
//! the metadata (status, balance, lifecycle timestamps) rides along for
//! the embedding service.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{PlayerId, Price, SessionId};

/// Lifecycle state of a trading session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SessionStatus {
    Active,
    Ended,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Active => write!(f, "active"),
            SessionStatus::Ended => write!(f, "ended"),
        }
    }
}

/// One player's trading month.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    pub session_id: SessionId,
    pub player_id: PlayerId,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub status: SessionStatus,
    /// Starting cash balance (cents)
    pub balance: Price,
}

impl Session {
    /// Start a new active session with a fresh random identifier.
    pub fn new(player_id: PlayerId, started_at: DateTime<Utc>, balance: Price) -> Self {
        Self {
            session_id: SessionId::new_v4(),
            player_id,
            started_at,
            ended_at: None,
            status: SessionStatus::Active,
            balance,
        }
    }

    /// Returns true once the session has been ended.
    #[inline]
    pub fn is_ended(&self) -> bool {
        self.status == SessionStatus::Ended
    }

    /// Mark the session ended at the given time.
    pub fn end(&mut self, at: DateTime<Utc>) {
        self.status = SessionStatus::Ended;
        self.ended_at = Some(at);
    }
}
