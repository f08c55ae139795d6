//! Engine: the high-level API for scoring sessions and reading results.
//!
//! Wraps a `SessionStore` and drives the replay: fetch the ledger,
//! replay it, commit the score record together with the unsold rows,
//! and compose read-side summaries.

use chrono::Utc;

use crate::error::{Error, Result};
use crate::score::{summarize_unsold, UnsoldSummary};
use crate::store::SessionStore;
use crate::{feedback, scoring, ScoreRecord, Session, SessionId, UnsoldShare};

/// Everything a results screen needs for one session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSummary {
    pub session: Session,
    /// `None` until scoring has run
    pub score: Option<ScoreRecord>,
    pub unsold_shares: Vec<UnsoldShare>,
    /// Cost basis of all unsold rows (cents)
    pub total_unsold_value: i64,
    pub unsold_count: usize,
    pub feedback_messages: Vec<String>,
}

/// The scoring engine over a storage collaborator.
#[derive(Clone, Debug)]
pub struct Engine<S> {
    store: S,
}

impl<S: SessionStore> Engine<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Shared access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consume the engine, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Score a session: replay its ledger and persist the outcome.
    ///
    /// The score record and its unsold rows are committed as one
    /// both-or-neither operation. A session with zero trades yields the
    /// defined empty result (all totals zero, no unsold rows), not an
    /// error.
    ///
    /// Scoring is idempotent: if the session already has a score, that
    /// record is returned unchanged and nothing is written.
    pub fn score_session(&mut self, session_id: SessionId) -> Result<ScoreRecord> {
        let session = self
            .store
            .session(session_id)?
            .ok_or(Error::SessionNotFound(session_id))?;

        if let Some(existing) = self.store.score(session_id)? {
            log::debug!("session {session_id} already scored; returning existing record");
            return Ok(existing);
        }

        let mut trades = self.store.trades(session_id)?;
        // Stable sort: equal timestamps keep arrival order
        trades.sort_by_key(|t| t.timestamp);

        let outcome = scoring::replay(&trades);

        let created_at = Utc::now();
        let score = ScoreRecord {
            session_id,
            player_id: session.player_id,
            total_trades: outcome.total_trades,
            total_profit: outcome.total_profit,
            total_score: outcome.total_score,
            created_at,
        };
        let unsold: Vec<UnsoldShare> = outcome
            .unsold
            .iter()
            .map(|lot| UnsoldShare::from_lot(session_id, lot, created_at))
            .collect();

        self.store.commit_outcome(&score, &unsold)?;
        log::info!(
            "session {session_id} scored: {} trades, {} points, profit {} cents, {} unsold lots",
            score.total_trades,
            score.total_score,
            score.total_profit,
            unsold.len()
        );
        Ok(score)
    }

    /// Unsold rows from the session's scoring run.
    pub fn unsold_shares(&self, session_id: SessionId) -> Result<Vec<UnsoldShare>> {
        self.require_session(session_id)?;
        self.store.unsold_shares(session_id)
    }

    /// Per-symbol aggregate of the session's unsold rows.
    pub fn unsold_summary(&self, session_id: SessionId) -> Result<Vec<UnsoldSummary>> {
        let shares = self.unsold_shares(session_id)?;
        Ok(summarize_unsold(&shares))
    }

    /// Compose the full results view for a session.
    ///
    /// Works whether or not scoring has run; fails only if the session
    /// itself does not exist. Read-only, so repeated calls without an
    /// intervening `score_session` return identical results.
    pub fn session_summary(&self, session_id: SessionId) -> Result<SessionSummary> {
        let session = self
            .store
            .session(session_id)?
            .ok_or(Error::SessionNotFound(session_id))?;

        let score = self.store.score(session_id)?;
        let unsold_shares = self.store.unsold_shares(session_id)?;
        let total_unsold_value: i64 = unsold_shares.iter().map(|s| s.total_cost).sum();
        let feedback_messages =
            feedback::generate(score.as_ref(), &unsold_shares, total_unsold_value);

        Ok(SessionSummary {
            session,
            score,
            unsold_count: unsold_shares.len(),
            total_unsold_value,
            unsold_shares,
            feedback_messages,
        })
    }

    fn require_session(&self, session_id: SessionId) -> Result<()> {
        match self.store.session(session_id)? {
            Some(_) => Ok(()),
            None => Err(Error::SessionNotFound(session_id)),
        }
    }
}
