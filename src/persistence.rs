//! File-based trade ledger via JSON Lines.
//!
//! Trades are stored as one JSON object per line (`.jsonl` format).
//! This is simple, streamable, and human-readable: a saved ledger can
//! be inspected with standard line tools and replayed later with
//! [`crate::scoring::replay`].

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::Trade;

/// Save a trade ledger to a file in JSON Lines format.
///
/// Each trade is serialized as one JSON object per line.
pub fn save_trades(trades: &[Trade], path: &Path) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = io::BufWriter::new(file);

    for trade in trades {
        let json = serde_json::to_string(trade).map_err(io::Error::other)?;
        writeln!(writer, "{}", json)?;
    }

    writer.flush()?;
    Ok(())
}

/// Load a trade ledger from a JSON Lines file.
///
/// Each line is parsed as one JSON trade object.
/// Empty lines are skipped.
pub fn load_trades(path: &Path) -> io::Result<Vec<Trade>> {
    let file = std::fs::File::open(path)?;
    let reader = io::BufReader::new(file);
    let mut trades = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let trade: Trade = serde_json::from_str(line).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: {}", line_num + 1, e),
            )
        })?;
        trades.push(trade);
    }

    Ok(trades)
}
