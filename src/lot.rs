//! Lot: a quantity of one symbol purchased at one unit price.

use std::fmt;

use crate::{Price, Quantity, Symbol};

/// An open purchase lot, tracked until fully sold.
///
/// Lots are created by buy trades and consumed oldest-first by sell
/// trades. Invariant: quantity never goes negative; a lot reaching zero
/// is removed from its symbol's queue.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lot {
    /// Ticker this lot is for
    pub symbol: Symbol,
    /// Remaining shares, > 0 while the lot is open
    pub quantity: Quantity,
    /// Purchase price per share (cents)
    pub unit_price: Price,
}

impl Lot {
    /// Create a new lot.
    pub fn new(symbol: Symbol, quantity: Quantity, unit_price: Price) -> Self {
        Self {
            symbol,
            quantity,
            unit_price,
        }
    }

    /// Cost basis of the remaining shares: quantity × unit price (cents).
    #[inline]
    pub fn total_cost(&self) -> i64 {
        self.quantity as i64 * self.unit_price.0
    }
}

impl fmt::Display for Lot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{} @ {}", self.symbol, self.quantity, self.unit_price)
    }
}
