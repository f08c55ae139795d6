//! Storage collaborator contract and the in-memory reference store.
//!
//! The engine never talks to a database directly; it goes through
//! `SessionStore`. Implementations own transaction discipline: the
//! outcome commit is both-or-neither, and concurrent scoring calls for
//! the same session must be serialized by the store (row locking,
//! unique constraint on the score, or equivalent).

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::{
    Price, Quantity, ScoreRecord, Session, SessionId, Symbol, Trade, TradeAction, TradeId,
    UnsoldShare,
};

/// Fetch/commit boundary between the scoring engine and persistence.
pub trait SessionStore {
    /// Session metadata, or `None` if the id is unknown.
    fn session(&self, id: SessionId) -> Result<Option<Session>>;

    /// The session's full trade ledger in arrival order.
    ///
    /// Arrival order matters: replay sorts by timestamp with a stable
    /// sort, so ties keep this order.
    fn trades(&self, id: SessionId) -> Result<Vec<Trade>>;

    /// The session's score record, if scoring has run.
    fn score(&self, id: SessionId) -> Result<Option<ScoreRecord>>;

    /// Unsold rows emitted by the session's scoring run.
    fn unsold_shares(&self, id: SessionId) -> Result<Vec<UnsoldShare>>;

    /// Persist a scoring outcome atomically.
    ///
    /// Either the score record and all its unsold rows land, or
    /// nothing does. A session that already has a score must be
    /// rejected, never overwritten.
    fn commit_outcome(&mut self, score: &ScoreRecord, unsold: &[UnsoldShare]) -> Result<()>;
}

/// In-memory store for tests, examples, and embedding without a
/// database. Single-threaded by construction; wrap it in a lock to
/// share it.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryStore {
    sessions: FxHashMap<SessionId, Session>,
    trades: FxHashMap<SessionId, Vec<Trade>>,
    scores: FxHashMap<SessionId, ScoreRecord>,
    unsold: FxHashMap<SessionId, Vec<UnsoldShare>>,
    next_trade_id: u64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session.
    pub fn insert_session(&mut self, session: Session) {
        self.sessions.insert(session.session_id, session);
    }

    /// Record a trade against an existing session.
    ///
    /// Assigns the next sequential `TradeId`; insertion order is the
    /// arrival order the trait contract promises. Quantity and price
    /// are validated here, at the recording boundary, so the replay can
    /// trust its ledger.
    pub fn record_trade(
        &mut self,
        session_id: SessionId,
        timestamp: DateTime<Utc>,
        symbol: Symbol,
        action: TradeAction,
        quantity: Quantity,
        price: Price,
    ) -> Result<TradeId> {
        if !self.sessions.contains_key(&session_id) {
            return Err(Error::SessionNotFound(session_id));
        }
        if quantity == 0 {
            return Err(Error::Storage("trade quantity must be positive".into()));
        }
        if price.0 <= 0 {
            return Err(Error::Storage("trade price must be positive".into()));
        }

        self.next_trade_id += 1;
        let trade_id = TradeId(self.next_trade_id);
        self.trades.entry(session_id).or_default().push(Trade {
            trade_id,
            session_id,
            timestamp,
            symbol,
            action,
            quantity,
            price,
        });
        Ok(trade_id)
    }

    /// Mark a session ended.
    pub fn end_session(&mut self, id: SessionId, at: DateTime<Utc>) -> Result<()> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(Error::SessionNotFound(id))?;
        session.end(at);
        Ok(())
    }

    /// Number of registered sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Save the whole store as pretty-printed JSON.
    #[cfg(feature = "persistence")]
    pub fn save_json(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Load a store from a JSON snapshot.
    #[cfg(feature = "persistence")]
    pub fn load_json(path: &std::path::Path) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(std::io::Error::other)
    }
}

impl SessionStore for MemoryStore {
    fn session(&self, id: SessionId) -> Result<Option<Session>> {
        Ok(self.sessions.get(&id).cloned())
    }

    fn trades(&self, id: SessionId) -> Result<Vec<Trade>> {
        Ok(self.trades.get(&id).cloned().unwrap_or_default())
    }

    fn score(&self, id: SessionId) -> Result<Option<ScoreRecord>> {
        Ok(self.scores.get(&id).cloned())
    }

    fn unsold_shares(&self, id: SessionId) -> Result<Vec<UnsoldShare>> {
        Ok(self.unsold.get(&id).cloned().unwrap_or_default())
    }

    fn commit_outcome(&mut self, score: &ScoreRecord, unsold: &[UnsoldShare]) -> Result<()> {
        if self.scores.contains_key(&score.session_id) {
            return Err(Error::Storage(format!(
                "score already recorded for session {}",
                score.session_id
            )));
        }
        // Both maps are updated together; nothing in between can fail
        self.scores.insert(score.session_id, score.clone());
        self.unsold.insert(score.session_id, unsold.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerId;

    fn seeded_store() -> (MemoryStore, SessionId) {
        let mut store = MemoryStore::new();
        let session = Session::new(PlayerId(1), Utc::now(), Price(10_000_00));
        let id = session.session_id;
        store.insert_session(session);
        (store, id)
    }

    #[test]
    fn trades_come_back_in_arrival_order() {
        let (mut store, id) = seeded_store();
        let t = Utc::now();
        // Same timestamp on purpose: arrival order must break the tie
        for sym in ["AAA", "BBB", "CCC"] {
            store
                .record_trade(id, t, Symbol::new(sym), TradeAction::Buy, 1, Price(10_00))
                .unwrap();
        }

        let trades = store.trades(id).unwrap();
        let symbols: Vec<&str> = trades.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAA", "BBB", "CCC"]);
        assert!(trades.windows(2).all(|w| w[0].trade_id < w[1].trade_id));
    }

    #[test]
    fn record_trade_requires_session() {
        let mut store = MemoryStore::new();
        let err = store
            .record_trade(
                SessionId::new_v4(),
                Utc::now(),
                Symbol::new("TEST1"),
                TradeAction::Buy,
                1,
                Price(10_00),
            )
            .unwrap_err();
        assert!(matches!(err, Error::SessionNotFound(_)));
    }

    #[test]
    fn record_trade_validates_input() {
        let (mut store, id) = seeded_store();
        let t = Utc::now();
        assert!(store
            .record_trade(id, t, Symbol::new("TEST1"), TradeAction::Buy, 0, Price(10_00))
            .is_err());
        assert!(store
            .record_trade(id, t, Symbol::new("TEST1"), TradeAction::Buy, 1, Price(0))
            .is_err());
        assert!(store
            .record_trade(id, t, Symbol::new("TEST1"), TradeAction::Buy, 1, Price(-5))
            .is_err());
    }

    #[test]
    fn commit_outcome_rejects_duplicates() {
        let (mut store, id) = seeded_store();
        let record = ScoreRecord {
            session_id: id,
            player_id: PlayerId(1),
            total_trades: 0,
            total_profit: 0,
            total_score: 0,
            created_at: Utc::now(),
        };

        store.commit_outcome(&record, &[]).unwrap();
        let err = store.commit_outcome(&record, &[]).unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
        // First commit untouched
        assert!(store.score(id).unwrap().is_some());
    }

    #[test]
    fn unknown_session_reads_are_empty_not_errors() {
        let store = MemoryStore::new();
        let id = SessionId::new_v4();
        assert!(store.session(id).unwrap().is_none());
        assert!(store.trades(id).unwrap().is_empty());
        assert!(store.score(id).unwrap().is_none());
        assert!(store.unsold_shares(id).unwrap().is_empty());
    }

    #[test]
    fn end_session_flips_status() {
        let (mut store, id) = seeded_store();
        store.end_session(id, Utc::now()).unwrap();
        assert!(store.session(id).unwrap().unwrap().is_ended());
    }
}
