//! # lotbook
//!
//! Deterministic session scoring for a paper-trading game: FIFO lot
//! accounting, realized-profit bonuses, end-of-session feedback, and a
//! roulette stock picker. No floats in the money path (cents as `i64`),
//! no hidden global state, no I/O beyond the pluggable store.
//!
//! Prices are integer cents: `Price(50_00)` is $50.00.
//!
//! ## Quick start
//!
//! ```
//! use chrono::Utc;
//! use lotbook::{Engine, MemoryStore, PlayerId, Price, Session, Symbol, TradeAction};
//!
//! let mut store = MemoryStore::new();
//! let session = Session::new(PlayerId(1), Utc::now(), Price(10_000_00));
//! let id = session.session_id;
//! store.insert_session(session);
//!
//! store.record_trade(id, Utc::now(), Symbol::new("TEST1"), TradeAction::Buy, 100, Price(50_00))?;
//! store.record_trade(id, Utc::now(), Symbol::new("TEST1"), TradeAction::Sell, 30, Price(55_00))?;
//!
//! let mut engine = Engine::new(store);
//! let score = engine.score_session(id)?;
//!
//! assert_eq!(score.total_trades, 2);
//! assert_eq!(score.total_profit, 150_00); // $150.00 realized
//! assert_eq!(score.total_score, 4); // 2 trade points + a 10% sell bonus
//!
//! // 70 shares of TEST1 were never sold
//! let unsold = engine.unsold_shares(id)?;
//! assert_eq!(unsold.len(), 1);
//! assert_eq!(unsold[0].quantity, 70);
//! # Ok::<(), lotbook::Error>(())
//! ```
//!
//! ## Crate features
//!
//! - `serde`: `Serialize`/`Deserialize` on all public data types.
//! - `persistence`: JSON snapshot save/load for `MemoryStore` and a
//!   JSONL trade-ledger format (implies `serde`).

#![allow(clippy::inconsistent_digit_grouping)]

pub mod action;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod inventory;
pub mod lot;
#[cfg(feature = "persistence")]
pub mod persistence;
pub mod roulette;
pub mod score;
pub mod scoring;
pub mod session;
pub mod store;
pub mod trade;
pub mod types;

pub use action::TradeAction;
pub use engine::{Engine, SessionSummary};
pub use error::{Error, Result};
pub use inventory::LotInventory;
pub use lot::Lot;
pub use roulette::{CatalogStock, Category, RouletteSelection};
pub use score::{summarize_unsold, ScoreRecord, UnsoldShare, UnsoldSummary};
pub use scoring::{replay, sell_bonus, ReplayOutcome};
pub use session::{Session, SessionStatus};
pub use store::{MemoryStore, SessionStore};
pub use trade::Trade;
pub use types::{PlayerId, Price, Quantity, SessionId, Symbol, TradeId};
