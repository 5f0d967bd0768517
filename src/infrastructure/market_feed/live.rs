use super::profiles::profile_for;
use crate::domain::market_data::{Candle, Instrument, Price, Symbol};
use rand::Rng;

/// Bound on the simulated day-change percentage so quote flicker cannot
/// wander off into absurd territory over a long session.
const MAX_CHANGE_PCT: f64 = 15.0;

/// Advance the open bar by one simulated tick. Pure: the caller swaps the
/// returned candle in for the series' last element.
///
/// `open` stays untouched (the bar is still forming); `high`/`low` stretch
/// to envelope the new price.
pub fn tick_candle<R: Rng>(rng: &mut R, last: &Candle, symbol: &Symbol) -> Candle {
    let tick_vol = profile_for(symbol).tick_volatility;
    let new_price = last.ohlcv.close.value() + rng.gen_range(-0.5..0.5) * tick_vol;

    let mut ohlcv = last.ohlcv;
    ohlcv.high = Price::from(ohlcv.high.value().max(new_price));
    ohlcv.low = Price::from(ohlcv.low.value().min(new_price));
    ohlcv.close = Price::from(new_price);

    Candle::new(last.timestamp, ohlcv)
}

/// Perturb one instrument's quote. Independent draws from the candle tick,
/// so the watch list flickers on its own. The spread width is carried over
/// and `spread == ask - bid` stays exact.
pub fn tick_quotes<R: Rng>(rng: &mut R, instrument: &mut Instrument) {
    let tick_vol = profile_for(&instrument.symbol).tick_volatility;
    let spread = instrument.spread.value();

    let new_bid = instrument.bid.value() + rng.gen_range(-0.5..0.5) * tick_vol;
    instrument.set_quotes(new_bid, new_bid + spread);

    let drift = rng.gen_range(-0.15..0.15);
    instrument.change = (instrument.change + drift).clamp(-MAX_CHANGE_PCT, MAX_CHANGE_PCT);
}

/// Fixed-cadence driver for the simulation. Runs until the wrapping
/// `Abortable` is aborted; the owning view holds the handle and aborts it
/// on unmount or whenever the selection changes.
#[cfg(target_arch = "wasm32")]
pub async fn run_tick_loop<F>(interval_ms: u32, mut on_tick: F)
where
    F: FnMut() + 'static,
{
    use gloo_timers::future::sleep;
    use std::time::Duration;

    loop {
        sleep(Duration::from_millis(interval_ms as u64)).await;
        on_tick();
    }
}
