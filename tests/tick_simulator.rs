use rand::SeedableRng;
use rand::rngs::SmallRng;
use trade_sim_wasm::domain::market_data::{
    Candle, Instrument, InstrumentCategory, OHLCV, Price, Symbol, Timestamp, Volume,
};
use trade_sim_wasm::infrastructure::market_feed::{tick_candle, tick_quotes};

fn open_bar() -> Candle {
    Candle::new(
        Timestamp::from_secs(1_700_000_000),
        OHLCV::new(
            Price::from(1.0800),
            Price::from(1.0815),
            Price::from(1.0790),
            Price::from(1.0805),
            Volume::from(640.0),
        ),
    )
}

#[test]
fn tick_leaves_open_and_timestamp_untouched() {
    let mut rng = SmallRng::seed_from_u64(11);
    let last = open_bar();
    let ticked = tick_candle(&mut rng, &last, &Symbol::from("EUR/USD"));

    assert_eq!(ticked.timestamp, last.timestamp);
    assert_eq!(ticked.ohlcv.open, last.ohlcv.open);
}

#[test]
fn tick_stretches_high_low_to_envelope_the_new_close() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut last = open_bar();

    for _ in 0..1_000 {
        let ticked = tick_candle(&mut rng, &last, &Symbol::from("EUR/USD"));
        assert!(ticked.ohlcv.high >= last.ohlcv.high);
        assert!(ticked.ohlcv.low <= last.ohlcv.low);
        assert!(ticked.ohlcv.high.value() >= ticked.ohlcv.close.value());
        assert!(ticked.ohlcv.low.value() <= ticked.ohlcv.close.value());
        assert!(ticked.ohlcv.is_valid(), "tick produced invalid bar: {ticked:?}");
        last = ticked;
    }
}

#[test]
fn quote_tick_keeps_spread_exact() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut instrument =
        Instrument::new("EUR/USD", "Euro / US Dollar", 1.0798, 1.0801, InstrumentCategory::Forex);

    for _ in 0..1_000 {
        tick_quotes(&mut rng, &mut instrument);
        assert!(instrument.ask >= instrument.bid);
        assert_eq!(instrument.spread.value(), instrument.ask.value() - instrument.bid.value());
    }
}

#[test]
fn simulated_change_stays_bounded() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut instrument =
        Instrument::new("BTC/USD", "Bitcoin", 66_980.0, 67_020.0, InstrumentCategory::Crypto);

    for _ in 0..10_000 {
        tick_quotes(&mut rng, &mut instrument);
        assert!(instrument.change.abs() <= 15.0, "change {} ran away", instrument.change);
    }
}

#[test]
fn seeded_rng_makes_ticks_reproducible() {
    let last = open_bar();

    let mut rng_a = SmallRng::seed_from_u64(21);
    let direct = tick_candle(&mut rng_a, &last, &Symbol::from("EUR/USD"));

    let mut rng_b = SmallRng::seed_from_u64(21);
    let replay = tick_candle(&mut rng_b, &last, &Symbol::from("EUR/USD"));

    assert_eq!(direct, replay);
}
