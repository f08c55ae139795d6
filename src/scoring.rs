//! Scoring replay: the core algorithm for turning a trade ledger into
//! a score, realized profit, and the unsold-lot snapshot.
//!
//! The replay is a deterministic single pass over the time-ordered
//! ledger:
//! 1. Every trade earns one point, regardless of outcome
//! 2. Buys open lots at the back of the symbol's FIFO queue
//! 3. Sells consume lots oldest-first; each matched slice realizes
//!    profit against that lot's cost basis and may earn a tiered bonus
//! 4. Residual lots become the unsold snapshot

use crate::{Lot, LotInventory, Trade, TradeAction};

/// Result of replaying a session's trade ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplayOutcome {
    /// Number of trades replayed
    pub total_trades: u32,
    /// Realized profit in cents (signed); only matched slices count
    pub total_profit: i64,
    /// Game score: one point per action plus sell bonuses
    pub total_score: u32,
    /// Lots still open at end of replay
    pub unsold: Vec<Lot>,
}

impl ReplayOutcome {
    /// Total cost basis of the unsold lots (cents).
    pub fn unsold_value(&self) -> i64 {
        self.unsold.iter().map(|lot| lot.total_cost()).sum()
    }
}

/// Bonus points for one matched sell slice.
///
/// The tier is decided by the slice's per-share percentage gain,
/// `100 * profit_per_share / unit_cost`, with upper bounds inclusive:
/// `(0,5] → 1, (5,10] → 2, (10,20] → 3, >20 → 5`. The comparisons are
/// cross-multiplied so exact boundaries (5%, 10%, 20%) land in the
/// lower tier with no floating-point drift.
#[inline]
pub fn sell_bonus(profit_per_share: i64, unit_cost: i64) -> u32 {
    if profit_per_share <= 0 {
        0
    } else if 100 * profit_per_share <= 5 * unit_cost {
        1
    } else if 100 * profit_per_share <= 10 * unit_cost {
        2
    } else if 100 * profit_per_share <= 20 * unit_cost {
        3
    } else {
        5
    }
}

/// Replay a time-ordered trade ledger.
///
/// The caller supplies trades in ascending timestamp order (ties broken
/// by arrival order). The inventory is owned by this call and discarded
/// at return; only the residual lots escape.
///
/// Selling more than is held is not an error: the excess quantity is
/// silently unmatched and contributes nothing to profit or score.
/// There is no short-selling model.
pub fn replay(trades: &[Trade]) -> ReplayOutcome {
    let mut inventory = LotInventory::new();
    let mut total_profit: i64 = 0;
    let mut total_score: u32 = 0;

    for trade in trades {
        // One point per action, win or lose
        total_score += 1;

        match trade.action {
            TradeAction::Buy => {
                inventory.push_back(Lot::new(trade.symbol, trade.quantity, trade.price));
            }
            TradeAction::Sell => {
                let mut remaining = trade.quantity;
                while remaining > 0 {
                    let Some(front) = inventory.front_mut(&trade.symbol) else {
                        // Queue exhausted: excess sell quantity is dropped
                        break;
                    };

                    let matched = remaining.min(front.quantity);
                    let profit_per_share = trade.price.0 - front.unit_price.0;
                    total_profit += profit_per_share * matched as i64;
                    total_score += sell_bonus(profit_per_share, front.unit_price.0);

                    front.quantity -= matched;
                    if front.quantity == 0 {
                        inventory.pop_front(&trade.symbol);
                    }
                    remaining -= matched;
                }
            }
        }
    }

    log::debug!(
        "replayed {} trades: profit {} cents, score {}, {} unsold lots",
        trades.len(),
        total_profit,
        total_score,
        inventory.lot_count()
    );

    ReplayOutcome {
        total_trades: trades.len() as u32,
        total_profit,
        total_score,
        unsold: inventory.into_lots(),
    }
}
