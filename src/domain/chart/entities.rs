use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{Candle, CandleSeries, Symbol, TimeInterval};

/// Domain entity - Chart store
///
/// Owns the candle series currently on screen. Every wholesale replacement
/// (new symbol, new timeframe) bumps the epoch; tick updates carry the epoch
/// they were scheduled against and are dropped when it no longer matches, so
/// a discarded series can never be mutated by a stale callback.
#[derive(Debug, Clone)]
pub struct ChartStore {
    symbol: Symbol,
    interval: TimeInterval,
    series: CandleSeries,
    epoch: u64,
}

impl ChartStore {
    pub fn new(symbol: Symbol, interval: TimeInterval) -> Self {
        Self { symbol, interval, series: CandleSeries::new(), epoch: 0 }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn interval(&self) -> TimeInterval {
        self.interval
    }

    pub fn series(&self) -> &CandleSeries {
        &self.series
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn candle_count(&self) -> usize {
        self.series.count()
    }

    pub fn has_data(&self) -> bool {
        !self.series.is_empty()
    }

    /// Swap in a freshly generated series. Returns the new epoch the owning
    /// tick loop must present on every subsequent update.
    pub fn replace_series(
        &mut self,
        symbol: Symbol,
        interval: TimeInterval,
        series: CandleSeries,
    ) -> u64 {
        self.symbol = symbol;
        self.interval = interval;
        self.series = series;
        self.epoch += 1;
        get_logger().debug(
            LogComponent::Domain("ChartStore"),
            &format!(
                "series replaced: {} {} ({} candles, epoch {})",
                self.symbol.value(),
                self.interval,
                self.series.count(),
                self.epoch
            ),
        );
        self.epoch
    }

    /// Apply a simulated tick to the last candle. A stale epoch or an empty
    /// series makes this a no-op and reports `false`.
    pub fn apply_tick(&mut self, epoch: u64, candle: Candle) -> bool {
        if epoch != self.epoch {
            get_logger().debug(
                LogComponent::Domain("ChartStore"),
                &format!("stale tick dropped (epoch {} != {})", epoch, self.epoch),
            );
            return false;
        }
        if self.series.is_empty() {
            return false;
        }
        self.series.replace_last(candle);
        true
    }
}
