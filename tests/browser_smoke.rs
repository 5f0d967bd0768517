#![cfg(target_arch = "wasm32")]

use trade_sim_wasm::domain::chart::ChartType;
use trade_sim_wasm::domain::market_data::{
    Candle, CandleSeries, OHLCV, Price, Timestamp, Volume,
};
use trade_sim_wasm::infrastructure::rendering::{CanvasBackend, build_scene};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn series() -> CandleSeries {
    let candles = (0..16u64)
        .map(|i| {
            let base = 100.0 + i as f64 * 0.3;
            Candle::new(
                Timestamp::from_secs(1_700_000_000 + i * 3_600),
                OHLCV::new(
                    Price::from(base),
                    Price::from(base + 0.4),
                    Price::from(base - 0.4),
                    Price::from(base + 0.2),
                    Volume::from(300.0),
                ),
            )
        })
        .collect();
    CandleSeries::from_candles(candles)
}

#[wasm_bindgen_test]
fn missing_canvas_is_reported_not_panicked() {
    let backend = CanvasBackend::new("no-such-canvas");
    assert!(backend.sync_size().is_err());
}

#[wasm_bindgen_test]
fn scene_executes_against_a_real_canvas() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: web_sys::HtmlCanvasElement =
        document.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_id("smoke-canvas");
    canvas.set_width(640);
    canvas.set_height(360);
    document.body().unwrap().append_child(&canvas).unwrap();

    let backend = CanvasBackend::new("smoke-canvas");
    let dims = backend.sync_size().unwrap();
    assert!(dims.width > 0 && dims.height > 0);

    let scene = build_scene(&series(), dims, ChartType::Candles, None, Some(5));
    backend.render(&scene).unwrap();
}
