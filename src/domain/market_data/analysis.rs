use crate::domain::market_data::{Candle, Price};

/// Simple moving average over closes. Returns one value per candle from
/// index `period - 1` onward; fewer candles than `period` yields nothing.
pub fn calculate_sma(candles: &[Candle], period: usize) -> Vec<Price> {
    if period == 0 || candles.len() < period {
        return Vec::new();
    }

    let mut sma_values = Vec::with_capacity(candles.len() - period + 1);

    for i in (period - 1)..candles.len() {
        let sum: f64 = candles[i + 1 - period..=i].iter().map(|c| c.ohlcv.close.value()).sum();
        sma_values.push(Price::from(sum / period as f64));
    }

    sma_values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::{OHLCV, Timestamp, Volume};

    fn candle(i: u64, close: f64) -> Candle {
        Candle::new(
            Timestamp::from_secs(i * 60),
            OHLCV::new(
                Price::from(close),
                Price::from(close),
                Price::from(close),
                Price::from(close),
                Volume::from(100.0),
            ),
        )
    }

    #[test]
    fn sma_short_series_is_empty() {
        let candles: Vec<Candle> = (0..3).map(|i| candle(i, 10.0)).collect();
        assert!(calculate_sma(&candles, 5).is_empty());
    }

    #[test]
    fn sma_averages_closes() {
        let candles: Vec<Candle> =
            [1.0, 2.0, 3.0, 4.0].iter().enumerate().map(|(i, c)| candle(i as u64, *c)).collect();
        let sma = calculate_sma(&candles, 2);
        let values: Vec<f64> = sma.iter().map(|p| p.value()).collect();
        assert_eq!(values, vec![1.5, 2.5, 3.5]);
    }
}
