use futures::future::{AbortHandle, Abortable, pending};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use trade_sim_wasm::domain::chart::ChartStore;
use trade_sim_wasm::domain::market_data::{CandleSeries, Symbol, TimeInterval};
use trade_sim_wasm::infrastructure::market_feed::{HistoryGenerator, tick_candle};

const NOW: u64 = 1_700_000_000;

fn generate_series(rng: &mut SmallRng, symbol: &Symbol, interval: TimeInterval) -> CandleSeries {
    CandleSeries::from_candles(HistoryGenerator::generate(rng, symbol, 2, interval, NOW))
}

#[test]
fn timeframe_switch_discards_stale_ticks() {
    let mut rng = SmallRng::seed_from_u64(17);
    let symbol = Symbol::from("EUR/USD");
    let mut store = ChartStore::new(symbol.clone(), TimeInterval::OneHour);

    let hourly = generate_series(&mut rng, &symbol, TimeInterval::OneHour);
    let old_epoch = store.replace_series(symbol.clone(), TimeInterval::OneHour, hourly);

    // A tick captured against the hourly series before the switch
    let stale_candle = {
        let last = store.series().latest().cloned().unwrap();
        tick_candle(&mut rng, &last, &symbol)
    };

    let daily = generate_series(&mut rng, &symbol, TimeInterval::OneDay);
    let new_epoch = store.replace_series(symbol.clone(), TimeInterval::OneDay, daily);
    assert_ne!(old_epoch, new_epoch);
    assert_eq!(store.interval(), TimeInterval::OneDay);

    let snapshot = store.series().clone();
    assert!(!store.apply_tick(old_epoch, stale_candle), "stale tick must be rejected");
    assert_eq!(store.series(), &snapshot, "rejected tick must not mutate the series");
}

#[test]
fn current_epoch_tick_replaces_only_the_last_bar() {
    let mut rng = SmallRng::seed_from_u64(23);
    let symbol = Symbol::from("BTC/USD");
    let mut store = ChartStore::new(symbol.clone(), TimeInterval::OneHour);
    let epoch = store.replace_series(
        symbol.clone(),
        TimeInterval::OneHour,
        generate_series(&mut rng, &symbol, TimeInterval::OneHour),
    );

    let before = store.series().as_slices();
    let last = store.series().latest().cloned().unwrap();
    let ticked = tick_candle(&mut rng, &last, &symbol);

    assert!(store.apply_tick(epoch, ticked.clone()));

    let after = store.series().as_slices();
    assert_eq!(before.len(), after.len());
    assert_eq!(&before[..before.len() - 1], &after[..after.len() - 1]);
    assert_eq!(after.last().unwrap(), &ticked);
}

#[test]
fn ticking_an_empty_store_is_a_no_op() {
    let mut rng = SmallRng::seed_from_u64(2);
    let symbol = Symbol::from("EUR/USD");
    let mut store = ChartStore::new(symbol.clone(), TimeInterval::OneHour);
    let epoch =
        store.replace_series(symbol.clone(), TimeInterval::OneHour, CandleSeries::new());

    let orphan = {
        let series = generate_series(&mut rng, &symbol, TimeInterval::OneHour);
        tick_candle(&mut rng, series.latest().unwrap(), &symbol)
    };

    assert!(!store.apply_tick(epoch, orphan));
    assert!(!store.has_data());
}

#[test]
fn abort_handle_cancels_a_pending_loop() {
    let (handle, registration) = AbortHandle::new_pair();
    let loop_future = Abortable::new(pending::<()>(), registration);

    handle.abort();

    assert!(futures::executor::block_on(loop_future).is_err());
}
