use trade_sim_wasm::config::LotSizing;
use trade_sim_wasm::domain::market_data::{Instrument, InstrumentCategory};
use trade_sim_wasm::domain::trading::{
    Direction, OrderDraft, calculate_potential, submit_order,
};

fn eurusd() -> Instrument {
    Instrument::new("EUR/USD", "Euro / US Dollar", 1.2500, 1.2503, InstrumentCategory::Forex)
}

#[test]
fn buy_stop_loss_projects_the_expected_loss() {
    let potential = calculate_potential(
        &eurusd(),
        Direction::Buy,
        1.0,
        Some(1.2480),
        None,
        &LotSizing::default(),
    );

    // (1.2480 - 1.2503) * 1 lot * 100k units
    assert!((potential.sl_value - (-230.0)).abs() < 1e-6);
    assert_eq!(potential.tp_value, 0.0);
}

#[test]
fn buy_enters_at_ask_sell_enters_at_bid() {
    let sizing = LotSizing::default();

    let buy = calculate_potential(&eurusd(), Direction::Buy, 1.0, None, Some(1.2603), &sizing);
    assert!((buy.tp_value - 1_000.0).abs() < 1e-6);

    let sell = calculate_potential(&eurusd(), Direction::Sell, 1.0, None, Some(1.2400), &sizing);
    assert!((sell.tp_value - 1_000.0).abs() < 1e-6);
}

#[test]
fn missing_levels_project_to_zero() {
    let potential =
        calculate_potential(&eurusd(), Direction::Buy, 2.5, None, None, &LotSizing::default());
    assert_eq!(potential.sl_value, 0.0);
    assert_eq!(potential.tp_value, 0.0);
}

#[test]
fn sizing_follows_the_instrument_category() {
    let sizing = LotSizing::default();
    let btc = Instrument::new("BTC/USD", "Bitcoin", 66_980.0, 67_020.0, InstrumentCategory::Crypto);

    // Crypto sizes in coins, not 100k-unit lots
    let potential =
        calculate_potential(&btc, Direction::Buy, 0.5, None, Some(68_000.0), &sizing);
    assert!((potential.tp_value - 490.0).abs() < 1e-6);

    let shares =
        Instrument::new("AAPL", "Apple Inc.", 189.95, 190.05, InstrumentCategory::Stocks);
    let potential =
        calculate_potential(&shares, Direction::Buy, 100.0, Some(185.05), None, &sizing);
    assert!((potential.sl_value - (-500.0)).abs() < 1e-6);
}

#[test]
fn custom_sizing_overrides_the_defaults() {
    let sizing = LotSizing { forex: 10_000.0, ..LotSizing::default() };
    let potential =
        calculate_potential(&eurusd(), Direction::Buy, 1.0, Some(1.2480), None, &sizing);
    assert!((potential.sl_value - (-23.0)).abs() < 1e-6);
}

#[test]
fn simulated_submission_reports_the_same_projection() {
    let draft = OrderDraft {
        direction: Direction::Sell,
        size: 2.0,
        stop_loss: Some(1.2530),
        take_profit: Some(1.2400),
    };
    let sizing = LotSizing::default();

    let submitted = submit_order(&eurusd(), &draft, &sizing);
    let direct = calculate_potential(
        &eurusd(),
        draft.direction,
        draft.size,
        draft.stop_loss,
        draft.take_profit,
        &sizing,
    );

    assert_eq!(submitted, direct);
    assert!(submitted.sl_value < 0.0);
    assert!(submitted.tp_value > 0.0);
}
