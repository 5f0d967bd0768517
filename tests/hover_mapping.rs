use trade_sim_wasm::domain::chart::ChartDimensions;
use trade_sim_wasm::domain::market_data::{
    Candle, CandleSeries, OHLCV, Price, Timestamp, Volume,
};
use trade_sim_wasm::infrastructure::rendering::{hover_index, hover_state_at};

fn series(n: usize) -> CandleSeries {
    let candles = (0..n)
        .map(|i| {
            let close = 50.0 + i as f64;
            Candle::new(
                Timestamp::from_secs(i as u64 * 60),
                OHLCV::new(
                    Price::from(close - 0.2),
                    Price::from(close + 0.5),
                    Price::from(close - 0.5),
                    Price::from(close),
                    Volume::from(100.0),
                ),
            )
        })
        .collect();
    CandleSeries::from_candles(candles)
}

#[test]
fn pointer_at_the_right_edge_maps_to_the_last_bar() {
    assert_eq!(hover_index(800.0, 24, 800.0), 23);
    assert_eq!(hover_index(800.0, 7, 800.0), 6);
    assert_eq!(hover_index(900.0, 10, 900.0), 9);
}

#[test]
fn pointer_beyond_the_edges_is_clamped() {
    assert_eq!(hover_index(5_000.0, 10, 900.0), 9);
    assert_eq!(hover_index(-25.0, 10, 900.0), 0);
}

#[test]
fn pointer_walks_bars_in_even_steps() {
    // 10 bars over 900px puts a bar boundary every 100px
    assert_eq!(hover_index(0.0, 10, 900.0), 0);
    assert_eq!(hover_index(99.9, 10, 900.0), 0);
    assert_eq!(hover_index(100.0, 10, 900.0), 1);
    assert_eq!(hover_index(450.0, 10, 900.0), 4);
}

#[test]
fn hover_reports_the_bar_close_not_an_interpolation() {
    let series = series(10);
    let dims = ChartDimensions::new(900, 400);

    let hover = hover_state_at(450.0, &series, dims).unwrap();
    assert_eq!(hover.price, 54.0);
    assert_eq!(hover.time.value(), 4 * 60);
    assert_eq!(hover.x, 450.0);
}

#[test]
fn hovering_an_empty_series_yields_nothing() {
    let dims = ChartDimensions::new(900, 400);
    assert!(hover_state_at(450.0, &CandleSeries::new(), dims).is_none());
}

#[test]
fn single_bar_series_always_hovers_the_only_bar() {
    let series = series(1);
    let dims = ChartDimensions::new(800, 400);

    for x in [0.0, 400.0, 800.0] {
        let hover = hover_state_at(x, &series, dims).unwrap();
        assert_eq!(hover.price, 50.0);
    }
}
