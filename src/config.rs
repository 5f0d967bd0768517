use crate::domain::market_data::InstrumentCategory;
use serde::{Deserialize, Serialize};

/// Units-per-lot by instrument category.
///
/// The FX convention (100 000 units per standard lot) does not transfer to
/// shares or coins, so sizing is configurable per category instead of one
/// hardcoded constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LotSizing {
    pub forex: f64,
    pub crypto: f64,
    pub stocks: f64,
    pub commodities: f64,
}

impl Default for LotSizing {
    fn default() -> Self {
        Self { forex: 100_000.0, crypto: 1.0, stocks: 1.0, commodities: 100.0 }
    }
}

impl LotSizing {
    pub fn units_for(&self, category: InstrumentCategory) -> f64 {
        match category {
            InstrumentCategory::Forex => self.forex,
            InstrumentCategory::Crypto => self.crypto,
            InstrumentCategory::Stocks => self.stocks,
            InstrumentCategory::Commodities => self.commodities,
        }
    }
}

/// Simulator tunables. Defaults match the live UI; tests override freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Cadence of the quote/candle tick loop.
    pub tick_interval_ms: u32,
    /// Cadence of the header clock refresh.
    pub clock_interval_ms: u32,
    pub lot_sizing: LotSizing,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { tick_interval_ms: 1_000, clock_interval_ms: 60_000, lot_sizing: LotSizing::default() }
    }
}
