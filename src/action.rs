//! Trade action: Buy or Sell

use std::fmt;

/// Action of a recorded trade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    /// Returns true for buy trades.
    #[inline]
    pub fn is_buy(self) -> bool {
        self == TradeAction::Buy
    }

    /// Returns true for sell trades.
    #[inline]
    pub fn is_sell(self) -> bool {
        self == TradeAction::Sell
    }
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeAction::Buy => write!(f, "BUY"),
            TradeAction::Sell => write!(f, "SELL"),
        }
    }
}
