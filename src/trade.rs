//! Trade representation

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{Price, Quantity, SessionId, Symbol, TradeAction, TradeId};

/// A recorded buy or sell action within a session.
///
/// Trades are created by player actions during an active session and
/// never mutated. Quantity and price are validated at the recording
/// boundary: the scoring engine trusts both to be positive.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trade {
    /// Identifier assigned at recording time (sequential per store)
    pub trade_id: TradeId,
    /// Session this trade belongs to
    pub session_id: SessionId,
    /// When the trade was placed
    pub timestamp: DateTime<Utc>,
    /// Ticker traded
    pub symbol: Symbol,
    /// Buy or sell
    pub action: TradeAction,
    /// Number of shares, > 0
    pub quantity: Quantity,
    /// Unit price in cents, > 0
    pub price: Price,
}

impl Trade {
    /// Returns the notional value (price × quantity) in cents.
    #[inline]
    pub fn notional(&self) -> i64 {
        self.price.0 * self.quantity as i64
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} {} @ {}",
            self.trade_id, self.action, self.quantity, self.symbol, self.price
        )
    }
}
