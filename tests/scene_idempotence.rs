use trade_sim_wasm::domain::chart::{ChartDimensions, ChartType, HoverState};
use trade_sim_wasm::domain::market_data::{
    Candle, CandleSeries, OHLCV, Price, Timestamp, Volume,
};
use trade_sim_wasm::infrastructure::rendering::scene::{DrawCommand, TextAlign, build_scene};

fn series(n: usize) -> CandleSeries {
    let candles = (0..n)
        .map(|i| {
            let base = 1.08 + (i as f64 * 0.0007) * if i % 2 == 0 { 1.0 } else { -1.0 };
            Candle::new(
                Timestamp::from_secs(1_700_000_000 + i as u64 * 3_600),
                OHLCV::new(
                    Price::from(base),
                    Price::from(base + 0.001),
                    Price::from(base - 0.001),
                    Price::from(base + 0.0004),
                    Volume::from(500.0),
                ),
            )
        })
        .collect();
    CandleSeries::from_candles(candles)
}

#[test]
fn identical_inputs_produce_identical_scenes() {
    let series = series(48);
    let dims = ChartDimensions::new(800, 460);
    let hover = Some(HoverState { x: 412.0, price: 1.0815, time: Timestamp::from_secs(1_700_050_000) });

    for chart_type in [ChartType::Candles, ChartType::Line, ChartType::Bars] {
        let first = build_scene(&series, dims, chart_type, hover, Some(20));
        let second = build_scene(&series, dims, chart_type, hover, Some(20));

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn hover_only_adds_overlay_commands() {
    let series = series(48);
    let dims = ChartDimensions::new(800, 460);

    let plain = build_scene(&series, dims, ChartType::Candles, None, None);
    let hovered = build_scene(
        &series,
        dims,
        ChartType::Candles,
        Some(HoverState { x: 100.0, price: 1.0803, time: Timestamp::from_secs(1_700_010_000) }),
        None,
    );

    assert!(hovered.len() > plain.len());
    assert_eq!(&hovered[..plain.len()], &plain[..]);
}

#[test]
fn empty_series_renders_background_and_placeholder_only() {
    let dims = ChartDimensions::new(640, 360);
    let scene = build_scene(&CandleSeries::new(), dims, ChartType::Candles, None, Some(20));

    assert_eq!(scene.len(), 2);
    match &scene[0] {
        DrawCommand::Fill { x, y, w, h, .. } => {
            assert_eq!((*x, *y, *w, *h), (0.0, 0.0, 640.0, 360.0));
        }
        other => panic!("expected full-surface fill, got {other:?}"),
    }
    match &scene[1] {
        DrawCommand::Label { text, align, .. } => {
            assert_eq!(text, "No data");
            assert_eq!(*align, TextAlign::Center);
        }
        other => panic!("expected placeholder label, got {other:?}"),
    }
}
