//! Lot inventory: per-symbol FIFO queues of open purchase lots.
//!
//! The inventory is built fresh for each scoring pass and discarded at
//! the end; it is never shared across calls. Only its final snapshot
//! (the unsold positions) outlives the replay.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::{Lot, Quantity, Symbol};

/// Open purchase lots keyed by symbol, oldest lot first per symbol.
#[derive(Clone, Debug, Default)]
pub struct LotInventory {
    lots: FxHashMap<Symbol, VecDeque<Lot>>,
}

impl LotInventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lot to the back of its symbol's queue (newest last).
    pub fn push_back(&mut self, lot: Lot) {
        self.lots.entry(lot.symbol).or_default().push_back(lot);
    }

    /// The oldest open lot for the symbol, if any.
    pub fn front_mut(&mut self, symbol: &Symbol) -> Option<&mut Lot> {
        self.lots.get_mut(symbol).and_then(|q| q.front_mut())
    }

    /// Remove and return the oldest lot for the symbol.
    ///
    /// An emptied queue is dropped from the map so residual iteration
    /// only sees symbols with open lots.
    pub fn pop_front(&mut self, symbol: &Symbol) -> Option<Lot> {
        let queue = self.lots.get_mut(symbol)?;
        let lot = queue.pop_front();
        if queue.is_empty() {
            self.lots.remove(symbol);
        }
        lot
    }

    /// Total open quantity for a symbol across its lots.
    pub fn open_quantity(&self, symbol: &Symbol) -> Quantity {
        self.lots
            .get(symbol)
            .map(|q| q.iter().map(|l| l.quantity).sum())
            .unwrap_or(0)
    }

    /// Number of open lots across all symbols.
    pub fn lot_count(&self) -> usize {
        self.lots.values().map(|q| q.len()).sum()
    }

    /// Returns true if no lots are open.
    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    /// Drain the inventory into its residual lots.
    ///
    /// Ordered by symbol, then FIFO position within the symbol, so the
    /// snapshot is deterministic regardless of hash iteration order.
    pub fn into_lots(self) -> Vec<Lot> {
        let mut queues: Vec<(Symbol, VecDeque<Lot>)> = self.lots.into_iter().collect();
        queues.sort_by_key(|(symbol, _)| *symbol);
        queues
            .into_iter()
            .flat_map(|(_, queue)| queue.into_iter())
            .collect()
    }
}
