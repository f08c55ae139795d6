//! Selection roulette: pick one stock per category for a trading month.
//!
//! Pure filter + uniform random choice over a stock catalogue. The
//! caller injects the RNG, so tests can seed it and the picker stays
//! deterministic under a fixed seed.

use chrono::NaiveDate;
use rand::Rng;

use crate::Symbol;

/// Catalogue category a stock is listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    Popular,
    Volatile,
    Sector,
}

/// A stock catalogue entry with its availability window.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogStock {
    pub symbol: Symbol,
    pub company_name: String,
    /// Sector label; meaningful for `Category::Sector` stocks
    pub sector: Option<String>,
    pub category: Category,
    /// First date with price data, `None` = available since forever
    pub available_from: Option<NaiveDate>,
    /// Last date with price data, `None` = still available
    pub available_to: Option<NaiveDate>,
}

impl CatalogStock {
    /// Whether the stock has data overlapping the given trading month.
    ///
    /// The window is inclusive on both ends; open ends always overlap.
    /// An invalid month never matches.
    pub fn available_in(&self, month: u32, year: i32) -> bool {
        let Some(first_day) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return false;
        };
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let Some(last_day) =
            NaiveDate::from_ymd_opt(next_year, next_month, 1).and_then(|d| d.pred_opt())
        else {
            return false;
        };

        let starts_in_time = self.available_from.map_or(true, |from| from <= last_day);
        let still_running = self.available_to.map_or(true, |to| to >= first_day);
        starts_in_time && still_running
    }
}

/// One stock per category for a trading month.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouletteSelection {
    pub popular: Symbol,
    pub volatile: Symbol,
    pub sector: Symbol,
    pub month: u32,
    pub year: i32,
}

/// Spin the roulette for the given month.
///
/// Filters the catalogue to stocks available during that month, then
/// picks uniformly: one popular stock, one volatile stock, and for the
/// sector slot first a random sector label, then a random stock within
/// it. Returns `None` when any category is empty or no sector-category
/// stock carries a sector label.
pub fn spin<R: Rng + ?Sized>(
    catalogue: &[CatalogStock],
    month: u32,
    year: i32,
    rng: &mut R,
) -> Option<RouletteSelection> {
    let available =
        |category: Category| -> Vec<&CatalogStock> {
            catalogue
                .iter()
                .filter(|s| s.category == category && s.available_in(month, year))
                .collect()
        };

    let popular = available(Category::Popular);
    let volatile = available(Category::Volatile);
    let sector_stocks = available(Category::Sector);
    if popular.is_empty() || volatile.is_empty() || sector_stocks.is_empty() {
        return None;
    }

    // Distinct sector labels, sorted so rng indexing is deterministic
    let mut sectors: Vec<&str> = sector_stocks
        .iter()
        .filter_map(|s| s.sector.as_deref())
        .collect();
    sectors.sort_unstable();
    sectors.dedup();
    if sectors.is_empty() {
        return None;
    }

    let chosen_sector = sectors[rng.gen_range(0..sectors.len())];
    let within_sector: Vec<&&CatalogStock> = sector_stocks
        .iter()
        .filter(|s| s.sector.as_deref() == Some(chosen_sector))
        .collect();

    Some(RouletteSelection {
        popular: popular[rng.gen_range(0..popular.len())].symbol,
        volatile: volatile[rng.gen_range(0..volatile.len())].symbol,
        sector: within_sector[rng.gen_range(0..within_sector.len())].symbol,
        month,
        year,
    })
}
