//! Score record and unsold-position data model.
//!
//! Both record types are created exactly once per session-end scoring
//! run and are read-only historical artifacts afterwards (leaderboards,
//! feedback).

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;

use crate::{Lot, PlayerId, Price, Quantity, SessionId, Symbol};

/// The immutable scoring summary for one session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreRecord {
    pub session_id: SessionId,
    pub player_id: PlayerId,
    /// Number of trades replayed
    pub total_trades: u32,
    /// Realized profit in cents (signed)
    pub total_profit: i64,
    /// Game score: one point per action plus sell bonuses
    pub total_score: u32,
    pub created_at: DateTime<Utc>,
}

/// A residual lot at end of replay, as a cost-basis record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnsoldShare {
    pub session_id: SessionId,
    pub symbol: Symbol,
    pub quantity: Quantity,
    /// Purchase price per share (cents)
    pub purchase_price: Price,
    /// quantity × purchase_price (cents)
    pub total_cost: i64,
    pub created_at: DateTime<Utc>,
}

impl UnsoldShare {
    /// Snapshot a residual lot, stamped with the scoring run's time.
    pub fn from_lot(session_id: SessionId, lot: &Lot, created_at: DateTime<Utc>) -> Self {
        Self {
            session_id,
            symbol: lot.symbol,
            quantity: lot.quantity,
            purchase_price: lot.unit_price,
            total_cost: lot.total_cost(),
            created_at,
        }
    }
}

/// Per-symbol aggregate of unsold positions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnsoldSummary {
    pub symbol: Symbol,
    /// Sum of quantities across the symbol's unsold lots
    pub total_quantity: Quantity,
    /// Sum of cost bases (cents)
    pub total_cost: i64,
    /// total_cost / total_quantity, in cents (fractional)
    pub average_price: f64,
    /// Number of unsold lots for the symbol
    pub positions: usize,
}

/// Aggregate unsold rows by symbol, sorted by symbol.
pub fn summarize_unsold(shares: &[UnsoldShare]) -> Vec<UnsoldSummary> {
    let mut by_symbol: FxHashMap<Symbol, (Quantity, i64, usize)> = FxHashMap::default();
    for share in shares {
        let entry = by_symbol.entry(share.symbol).or_insert((0, 0, 0));
        entry.0 += share.quantity;
        entry.1 += share.total_cost;
        entry.2 += 1;
    }

    let mut summaries: Vec<UnsoldSummary> = by_symbol
        .into_iter()
        .map(|(symbol, (total_quantity, total_cost, positions))| UnsoldSummary {
            symbol,
            total_quantity,
            total_cost,
            average_price: if total_quantity > 0 {
                total_cost as f64 / total_quantity as f64
            } else {
                0.0
            },
            positions,
        })
        .collect();
    summaries.sort_by_key(|s| s.symbol);
    summaries
}
