// Allow our dollar.cents digit grouping convention (e.g., 100_00 = $100.00)
#![allow(clippy::inconsistent_digit_grouping)]

//! End-to-end scoring scenarios through the full engine + store path.

use chrono::{Duration, Utc};
use lotbook::{
    Engine, Error, MemoryStore, PlayerId, Price, Session, SessionId, SessionStore, Symbol,
    TradeAction,
};

fn setup() -> (Engine<MemoryStore>, SessionId) {
    let mut store = MemoryStore::new();
    let session = Session::new(PlayerId(7), Utc::now(), Price(10_000_00));
    let id = session.session_id;
    store.insert_session(session);
    (Engine::new(store), id)
}

/// The canonical three-trade session: buy 100, buy 50, sell 30.
///
/// The sell matches the oldest lot (cost $50.00/share) for a $5.00
/// per-share gain, exactly 10%, which lands in the 2-point bonus tier.
#[test]
fn mixed_session_with_leftover_inventory() {
    let (mut engine, id) = setup();
    let start = Utc::now();
    let store = engine.store_mut();

    store
        .record_trade(id, start, Symbol::new("TEST1"), TradeAction::Buy, 100, Price(50_00))
        .unwrap();
    store
        .record_trade(
            id,
            start + Duration::seconds(1),
            Symbol::new("TEST2"),
            TradeAction::Buy,
            50,
            Price(30_00),
        )
        .unwrap();
    store
        .record_trade(
            id,
            start + Duration::seconds(2),
            Symbol::new("TEST1"),
            TradeAction::Sell,
            30,
            Price(55_00),
        )
        .unwrap();

    let score = engine.score_session(id).unwrap();
    assert_eq!(score.total_trades, 3);
    assert_eq!(score.total_profit, 150_00);
    // 3 trade points + 2 bonus points for the 10% sell
    assert_eq!(score.total_score, 5);

    let unsold = engine.unsold_shares(id).unwrap();
    assert_eq!(unsold.len(), 2);

    // Rows come back sorted by symbol
    assert_eq!(unsold[0].symbol, Symbol::new("TEST1"));
    assert_eq!(unsold[0].quantity, 70);
    assert_eq!(unsold[0].purchase_price, Price(50_00));
    assert_eq!(unsold[0].total_cost, 3_500_00);

    assert_eq!(unsold[1].symbol, Symbol::new("TEST2"));
    assert_eq!(unsold[1].quantity, 50);
    assert_eq!(unsold[1].purchase_price, Price(30_00));
    assert_eq!(unsold[1].total_cost, 1_500_00);
}

#[test]
fn buys_only_session_scores_one_point_per_trade() {
    let (mut engine, id) = setup();
    let start = Utc::now();
    for i in 0..4 {
        engine
            .store_mut()
            .record_trade(
                id,
                start + Duration::seconds(i),
                Symbol::new("TEST1"),
                TradeAction::Buy,
                10,
                Price(20_00),
            )
            .unwrap();
    }

    let score = engine.score_session(id).unwrap();
    assert_eq!(score.total_trades, 4);
    assert_eq!(score.total_profit, 0);
    assert_eq!(score.total_score, 4);

    // All four lots stay on the books
    let unsold = engine.unsold_shares(id).unwrap();
    assert_eq!(unsold.len(), 4);
    assert_eq!(unsold.iter().map(|u| u.quantity).sum::<u64>(), 40);
}

#[test]
fn losing_sell_still_earns_the_trade_point() {
    let (mut engine, id) = setup();
    let start = Utc::now();
    let store = engine.store_mut();
    store
        .record_trade(id, start, Symbol::new("TEST1"), TradeAction::Buy, 50, Price(80_00))
        .unwrap();
    store
        .record_trade(
            id,
            start + Duration::seconds(1),
            Symbol::new("TEST1"),
            TradeAction::Sell,
            50,
            Price(70_00),
        )
        .unwrap();

    let score = engine.score_session(id).unwrap();
    assert_eq!(score.total_trades, 2);
    assert_eq!(score.total_profit, -500_00);
    // No bonus for a loss, but both trades count
    assert_eq!(score.total_score, 2);
    assert!(engine.unsold_shares(id).unwrap().is_empty());
}

#[test]
fn sell_spanning_lots_earns_a_bonus_per_slice() {
    let (mut engine, id) = setup();
    let start = Utc::now();
    let store = engine.store_mut();
    // Two lots at different costs; one sell consumes both
    store
        .record_trade(id, start, Symbol::new("TEST1"), TradeAction::Buy, 10, Price(100_00))
        .unwrap();
    store
        .record_trade(
            id,
            start + Duration::seconds(1),
            Symbol::new("TEST1"),
            TradeAction::Buy,
            10,
            Price(110_00),
        )
        .unwrap();
    store
        .record_trade(
            id,
            start + Duration::seconds(2),
            Symbol::new("TEST1"),
            TradeAction::Sell,
            20,
            Price(121_00),
        )
        .unwrap();

    let score = engine.score_session(id).unwrap();
    // Slice 1: +$21.00/share on $100.00 = 21% -> 5 points
    // Slice 2: +$11.00/share on $110.00 = 10% -> 2 points
    assert_eq!(score.total_score, 3 + 5 + 2);
    assert_eq!(score.total_profit, 210_00 + 110_00);
}

#[test]
fn oversell_is_dropped_without_going_short() {
    let (mut engine, id) = setup();
    let start = Utc::now();
    let store = engine.store_mut();
    store
        .record_trade(id, start, Symbol::new("TEST1"), TradeAction::Buy, 10, Price(50_00))
        .unwrap();
    // Sell more than held; the excess 40 shares vanish
    store
        .record_trade(
            id,
            start + Duration::seconds(1),
            Symbol::new("TEST1"),
            TradeAction::Sell,
            50,
            Price(60_00),
        )
        .unwrap();
    // Sell with nothing held at all
    store
        .record_trade(
            id,
            start + Duration::seconds(2),
            Symbol::new("TEST2"),
            TradeAction::Sell,
            25,
            Price(10_00),
        )
        .unwrap();

    let score = engine.score_session(id).unwrap();
    // Only the 10 matched shares realize profit
    assert_eq!(score.total_profit, 10 * 10_00);
    // Profit never goes negative from phantom shares
    assert_eq!(score.total_trades, 3);
    assert!(engine.unsold_shares(id).unwrap().is_empty());
}

#[test]
fn fifo_order_is_per_symbol() {
    let (mut engine, id) = setup();
    let start = Utc::now();
    let store = engine.store_mut();
    store
        .record_trade(id, start, Symbol::new("TEST1"), TradeAction::Buy, 10, Price(10_00))
        .unwrap();
    store
        .record_trade(
            id,
            start + Duration::seconds(1),
            Symbol::new("TEST2"),
            TradeAction::Buy,
            10,
            Price(99_00),
        )
        .unwrap();
    // This sell must match the TEST1 lot, not the interleaved TEST2 one
    store
        .record_trade(
            id,
            start + Duration::seconds(2),
            Symbol::new("TEST1"),
            TradeAction::Sell,
            10,
            Price(12_00),
        )
        .unwrap();

    let score = engine.score_session(id).unwrap();
    assert_eq!(score.total_profit, 10 * 2_00);

    let unsold = engine.unsold_shares(id).unwrap();
    assert_eq!(unsold.len(), 1);
    assert_eq!(unsold[0].symbol, Symbol::new("TEST2"));
}

#[test]
fn rescoring_is_idempotent() {
    let (mut engine, id) = setup();
    engine
        .store_mut()
        .record_trade(id, Utc::now(), Symbol::new("TEST1"), TradeAction::Buy, 5, Price(10_00))
        .unwrap();

    let first = engine.score_session(id).unwrap();
    let second = engine.score_session(id).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.created_at, second.created_at);

    // Unsold rows were not duplicated by the second call
    assert_eq!(engine.unsold_shares(id).unwrap().len(), 1);
}

#[test]
fn scoring_a_missing_session_writes_nothing() {
    let (mut engine, _) = setup();
    let missing = SessionId::new_v4();

    let err = engine.score_session(missing).unwrap_err();
    assert!(matches!(err, Error::SessionNotFound(sid) if sid == missing));
    assert!(engine.store().score(missing).unwrap().is_none());
    assert!(engine.store().unsold_shares(missing).unwrap().is_empty());
}

#[test]
fn summary_combines_score_unsold_and_feedback() {
    let (mut engine, id) = setup();
    let start = Utc::now();
    engine
        .store_mut()
        .record_trade(id, start, Symbol::new("TEST1"), TradeAction::Buy, 100, Price(50_00))
        .unwrap();
    engine
        .store_mut()
        .record_trade(
            id,
            start + Duration::seconds(1),
            Symbol::new("TEST1"),
            TradeAction::Sell,
            30,
            Price(55_00),
        )
        .unwrap();
    engine.score_session(id).unwrap();

    let summary = engine.session_summary(id).unwrap();
    assert_eq!(summary.score.as_ref().unwrap().total_score, 4);
    assert_eq!(summary.unsold_count, 1);
    assert_eq!(summary.total_unsold_value, 70 * 50_00);
    assert!(!summary.feedback_messages.is_empty());

    // Reads do not mutate: asking again gives the same answer
    let again = engine.session_summary(id).unwrap();
    assert_eq!(summary, again);
}

#[test]
fn unsold_summary_aggregates_lots_per_symbol() {
    let (mut engine, id) = setup();
    let start = Utc::now();
    let store = engine.store_mut();
    store
        .record_trade(id, start, Symbol::new("AGG"), TradeAction::Buy, 50, Price(20_00))
        .unwrap();
    store
        .record_trade(
            id,
            start + Duration::seconds(1),
            Symbol::new("AGG"),
            TradeAction::Buy,
            30,
            Price(25_00),
        )
        .unwrap();
    engine.score_session(id).unwrap();

    let summary = engine.unsold_summary(id).unwrap();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].symbol, Symbol::new("AGG"));
    assert_eq!(summary[0].total_quantity, 80);
    assert_eq!(summary[0].total_cost, 50 * 20_00 + 30 * 25_00);
    assert_eq!(summary[0].positions, 2);
}
