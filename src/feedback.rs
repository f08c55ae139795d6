//! Session feedback: human-readable messages built from a scoring
//! outcome.
//!
//! Pure presentation logic, but the message selection rules are part of
//! the engine's observable contract, so they are tested like any other
//! behavior. Assembly order is fixed: score tier, profit, unsold block,
//! activity level — append-only, never re-sorted.

use crate::score::{summarize_unsold, ScoreRecord, UnsoldShare};
use crate::Price;

/// Unsold-row count above which a diversification nudge is added.
const DIVERSIFICATION_THRESHOLD: usize = 5;

/// Build the ordered feedback message list for a session.
///
/// With no score yet, a single completion prompt is returned and every
/// other input is ignored.
pub fn generate(
    score: Option<&ScoreRecord>,
    unsold: &[UnsoldShare],
    total_unsold_value: i64,
) -> Vec<String> {
    let Some(score) = score else {
        return vec![
            "Your session hasn't been scored yet. Finish the trading month to see your results!"
                .to_string(),
        ];
    };

    let mut messages = Vec::new();

    // Exactly one score-tier message, first match in descending order
    messages.push(match score.total_score {
        s if s >= 50 => format!("Outstanding trading! {s} points is a top-tier performance."),
        s if s >= 30 => format!("Great session! {s} points puts you well above average."),
        s if s >= 15 => format!("Solid effort: {s} points. Keep refining your strategy."),
        s => format!("You scored {s} points. More practice will pay off."),
    });

    // Exactly one profit message by sign
    messages.push(if score.total_profit > 0 {
        format!(
            "You locked in {} of profit this month. Nice work!",
            Price(score.total_profit)
        )
    } else if score.total_profit == 0 {
        "You broke even this month. No profit, no loss.".to_string()
    } else {
        format!(
            "You closed the month {} down. Worth reviewing which sells hurt.",
            Price(-score.total_profit)
        )
    });

    // Unsold-shares block
    if unsold.is_empty() {
        messages.push("You sold everything before the close. A clean finish!".to_string());
        messages.push("No capital was left sitting in unsold positions.".to_string());
    } else {
        messages.push("You finished with unsold shares:".to_string());
        for summary in summarize_unsold(unsold) {
            messages.push(format!(
                "  {}: {} shares still held",
                summary.symbol, summary.total_quantity
            ));
        }
        messages.push(
            "Tip: selling before the month ends turns paper positions into realized profit."
                .to_string(),
        );
        messages.push(format!(
            "Your unsold positions are worth {} at cost.",
            Price(total_unsold_value)
        ));
        if unsold.len() > DIVERSIFICATION_THRESHOLD {
            messages.push(
                "You were holding quite a few separate lots. Closing positions more often keeps \
                 your portfolio manageable."
                    .to_string(),
            );
        }
    }

    // Exactly one activity-level message
    messages.push(match score.total_trades {
        n if n >= 20 => format!("Very active month: {n} trades placed."),
        n if n >= 10 => format!("Good activity level with {n} trades."),
        n if n >= 5 => format!("{n} trades. A measured pace."),
        n => format!("Only {n} trades this month. Don't be afraid to trade more."),
    });

    messages
}
