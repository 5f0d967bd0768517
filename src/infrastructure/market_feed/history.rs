use super::profiles::profile_for;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{Candle, OHLCV, Price, Symbol, TimeInterval, Timestamp, Volume};
use rand::Rng;

/// Synthetic history source. Stands in for a real market-data backfill:
/// a random walk with a sinusoidal drift term around the symbol's profiled
/// base price.
pub struct HistoryGenerator;

impl HistoryGenerator {
    /// Generate an ordered OHLCV series ending at `now_secs`.
    ///
    /// A lookback/interval combination that yields zero bars returns an
    /// empty series; callers treat that as "no data", never as an error.
    /// Calling twice produces a different sequence unless `rng` is seeded.
    pub fn generate<R: Rng>(
        rng: &mut R,
        symbol: &Symbol,
        lookback_days: u64,
        interval: TimeInterval,
        now_secs: u64,
    ) -> Vec<Candle> {
        let profile = profile_for(symbol);
        let interval_ms = interval.duration_ms();
        let total = lookback_days * 86_400_000 / interval_ms;
        if total == 0 {
            get_logger().debug(
                LogComponent::Infrastructure("HistoryGen"),
                &format!("{}: {}d / {} yields no bars", symbol.value(), lookback_days, interval),
            );
            return Vec::new();
        }

        let step_secs = interval.duration_secs();
        let quarter = total as f64 / 4.0;
        let mut price = profile.base_price;
        let mut candles = Vec::with_capacity(total as usize);

        for i in 0..total {
            let trend = (i as f64 / quarter).sin() * 0.5 * profile.volatility;
            let noise = rng.gen_range(-0.5..0.5) * profile.volatility;
            price += trend + noise;
            if price <= 0.0 {
                price = 0.1 * profile.base_price;
            }

            let open = price;
            let close = price * (1.0 + rng.gen_range(-0.0005..0.0005));
            let high = (price * (1.0 + rng.gen_range(0.0..0.002))).max(open).max(close);
            let low = (price * (1.0 - rng.gen_range(0.0..0.002))).min(open).min(close);
            let volume = rng.gen_range(100..1_100) as f64;

            let timestamp = now_secs - (total - 1 - i) * step_secs;
            candles.push(Candle::new(
                Timestamp::from_secs(timestamp),
                OHLCV::new(
                    Price::from(open),
                    Price::from(high),
                    Price::from(low),
                    Price::from(close),
                    Volume::from(volume),
                ),
            ));
        }

        get_logger().debug(
            LogComponent::Infrastructure("HistoryGen"),
            &format!("{}: generated {} {} bars", symbol.value(), candles.len(), interval),
        );

        candles
    }
}

/// Lookback window that gives each timeframe a sensible bar count on screen.
pub fn lookback_days_for(interval: TimeInterval) -> u64 {
    match interval {
        TimeInterval::OneMinute => 1,
        TimeInterval::FiveMinutes => 2,
        TimeInterval::FifteenMinutes => 5,
        TimeInterval::ThirtyMinutes => 7,
        TimeInterval::OneHour => 14,
        TimeInterval::FourHours => 30,
        TimeInterval::OneDay => 120,
        TimeInterval::OneWeek => 730,
    }
}
