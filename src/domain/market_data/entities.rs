pub use super::value_objects::{InstrumentCategory, OHLCV, Price, Symbol, Timestamp, Volume};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Domain entity - Candle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: Timestamp,
    pub ohlcv: OHLCV,
}

impl Candle {
    pub fn new(timestamp: Timestamp, ohlcv: OHLCV) -> Self {
        Self { timestamp, ohlcv }
    }

    pub fn is_bullish(&self) -> bool {
        self.ohlcv.close >= self.ohlcv.open
    }

    pub fn is_bearish(&self) -> bool {
        self.ohlcv.close < self.ohlcv.open
    }

    pub fn body_size(&self) -> Price {
        Price::from((self.ohlcv.close.value() - self.ohlcv.open.value()).abs())
    }

    /// Signed close-vs-open move in percent.
    pub fn change_pct(&self) -> f64 {
        let open = self.ohlcv.open.value();
        if open == 0.0 {
            return 0.0;
        }
        (self.ohlcv.close.value() - open) / open * 100.0
    }
}

/// Domain entity - Candle series
///
/// Timestamps are strictly increasing; only the last candle is ever
/// mutated between full regenerations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandleSeries {
    candles: VecDeque<Candle>,
}

impl CandleSeries {
    pub fn new() -> Self {
        Self { candles: VecDeque::new() }
    }

    pub fn from_candles(candles: Vec<Candle>) -> Self {
        Self { candles: candles.into() }
    }

    /// Append a candle, or replace the last one when the timestamp matches.
    /// Out-of-order candles are dropped.
    pub fn push_candle(&mut self, candle: Candle) {
        if let Some(last) = self.candles.back_mut() {
            if last.timestamp == candle.timestamp {
                *last = candle;
                return;
            }
            if candle.timestamp < last.timestamp {
                return;
            }
        }
        self.candles.push_back(candle);
    }

    /// Replace the last candle in place (the "open" bar the tick simulator owns).
    pub fn replace_last(&mut self, candle: Candle) {
        if let Some(last) = self.candles.back_mut() {
            *last = candle;
        }
    }

    pub fn get_candles(&self) -> &VecDeque<Candle> {
        &self.candles
    }

    pub fn as_slices(&self) -> Vec<Candle> {
        self.candles.iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<&Candle> {
        self.candles.back()
    }

    pub fn count(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn get_latest_price(&self) -> Option<&Price> {
        self.candles.back().map(|candle| &candle.ohlcv.close)
    }

    /// Price range over all highs/lows of the series.
    pub fn price_range(&self) -> Option<(&Price, &Price)> {
        if self.candles.is_empty() {
            return None;
        }

        let mut min_price = &self.candles[0].ohlcv.low;
        let mut max_price = &self.candles[0].ohlcv.high;

        for candle in &self.candles {
            if candle.ohlcv.low.value() < min_price.value() {
                min_price = &candle.ohlcv.low;
            }
            if candle.ohlcv.high.value() > max_price.value() {
                max_price = &candle.ohlcv.high;
            }
        }

        Some((min_price, max_price))
    }
}

/// Domain entity - Tradable instrument
///
/// Created at catalog load, quoted every simulation tick, never destroyed
/// during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: Symbol,
    pub name: String,
    pub bid: Price,
    pub ask: Price,
    pub spread: Price,
    pub change: f64,
    pub category: InstrumentCategory,
    pub favorite: bool,
}

impl Instrument {
    pub fn new(
        symbol: &str,
        name: &str,
        bid: f64,
        ask: f64,
        category: InstrumentCategory,
    ) -> Self {
        let (bid, ask) = Self::ordered(bid, ask);
        Self {
            symbol: Symbol::from(symbol),
            name: name.to_string(),
            bid: Price::from(bid),
            ask: Price::from(ask),
            spread: Price::from(ask - bid),
            change: 0.0,
            category,
            favorite: false,
        }
    }

    /// Move both sides of the quote. Spread is derived, never set directly,
    /// and `ask >= bid` is restored if the inputs are crossed.
    pub fn set_quotes(&mut self, bid: f64, ask: f64) {
        let (bid, ask) = Self::ordered(bid, ask);
        self.bid = Price::from(bid);
        self.ask = Price::from(ask);
        self.spread = Price::from(ask - bid);
    }

    pub fn mid(&self) -> f64 {
        (self.bid.value() + self.ask.value()) / 2.0
    }

    fn ordered(bid: f64, ask: f64) -> (f64, f64) {
        if ask >= bid { (bid, ask) } else { (ask, bid) }
    }
}
