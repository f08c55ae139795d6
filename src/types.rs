//! Core types: Price, Quantity, Symbol, session and player identifiers.

use std::fmt;

/// Price in smallest units (cents).
///
/// `Price(50_00)` represents $50.00. Using fixed-point avoids
/// floating-point errors in profit and cost-basis calculations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Price(pub i64);

impl Price {
    pub const ZERO: Price = Price(0);
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display as dollars.cents assuming cents
        let dollars = self.0 / 100;
        let cents = (self.0 % 100).abs();
        if self.0 < 0 {
            write!(f, "-${}.{:02}", dollars.abs(), cents)
        } else {
            write!(f, "${}.{:02}", dollars, cents)
        }
    }
}

/// Quantity of shares. Always positive in recorded trades.
pub type Quantity = u64;

/// Opaque unique session identifier.
pub type SessionId = uuid::Uuid;

/// Unique player identifier assigned by the player registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Unique trade identifier assigned at recording time.
///
/// Ids are sequential per store, so they double as arrival order for
/// timestamp tie-breaking during replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeId(pub u64);

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// A stock ticker symbol, stored inline (up to 8 bytes, no allocation).
///
/// Symbols are `Copy` and cheap to hash, which keeps the per-symbol
/// inventory maps allocation-free on the key side. Input longer than
/// 8 bytes is truncated.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    bytes: [u8; 8],
    len: u8,
}

impl Symbol {
    /// Create a symbol from a ticker string.
    pub fn new(ticker: &str) -> Self {
        debug_assert!(
            ticker.len() <= 8 && ticker.is_ascii(),
            "symbol should be ASCII and at most 8 bytes: {ticker:?}"
        );
        let mut bytes = [0u8; 8];
        let len = ticker.len().min(8);
        bytes[..len].copy_from_slice(&ticker.as_bytes()[..len]);
        Self {
            bytes,
            len: len as u8,
        }
    }

    /// The ticker as a string slice.
    pub fn as_str(&self) -> &str {
        // Constructed from &str, so the prefix is valid UTF-8
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or("")
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Symbol {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Symbol {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::Deserialize;
        let s = String::deserialize(deserializer)?;
        Ok(Symbol::new(&s))
    }
}
