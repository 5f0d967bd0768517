use std::cell::RefCell;
use std::rc::Rc;

use futures::future::AbortHandle;
use leptos::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use strum::IntoEnumIterator;

use crate::domain::chart::ChartType;
use crate::domain::logging::{
    LogComponent, LogEntry, Logger, get_logger, get_time_provider,
};
use crate::domain::market_data::{
    CandleSeries, Instrument, InstrumentCatalog, InstrumentCategory, Symbol, TimeInterval,
};
use crate::domain::trading::{
    Direction, OrderDraft, calculate_potential, parse_level, parse_or_zero, submit_order,
};
use crate::global_signals;
use crate::infrastructure::market_feed::{
    HistoryGenerator, lookback_days_for, tick_candle, tick_quotes,
};
use crate::infrastructure::rendering::{CanvasBackend, build_scene, hover_state_at};
use crate::infrastructure::services::ConsoleLogger;
use crate::time_utils::format_clock;

pub const CHART_CANVAS_ID: &str = "chart-canvas";
const SMA_PERIOD: usize = 20;
const MAX_LOG_LINES: usize = 100;

global_signals! {
    pub instruments => instruments: Vec<Instrument>,
    pub selected_symbol => selected_symbol: Symbol,
    pub current_interval => current_interval: TimeInterval,
    pub chart_type => chart_type: ChartType,
    pub sma_enabled => sma_enabled: bool,
    pub hover_state => hover: Option<crate::domain::chart::HoverState>,
    pub chart_store => chart_store: crate::domain::chart::ChartStore,
    pub chart_dims => chart_dims: crate::domain::chart::ChartDimensions,
    pub current_price => current_price: f64,
    pub current_change => current_change: f64,
    pub candle_count => candle_count: usize,
    pub is_simulating => is_simulating: bool,
    pub clock_text => clock_text: String,
    pub category_filter => category_filter: Option<InstrumentCategory>,
    pub tick_abort_handle => tick_abort: Option<AbortHandle>,
    pub sim_config => sim_config: crate::config::SimConfig,
    pub log_lines => log_lines: Vec<String>,
    pub log_paused => log_paused: bool,
}

thread_local! {
    // The catalog and the simulation RNG live outside the signal graph; views
    // only ever see catalog snapshots pushed through the `instruments` signal.
    static CATALOG: Rc<RefCell<InstrumentCatalog>> =
        Rc::new(RefCell::new(InstrumentCatalog::seeded()));
    static SIM_RNG: RefCell<Option<SmallRng>> = const { RefCell::new(None) };
}

pub fn with_catalog<R>(f: impl FnOnce(&mut InstrumentCatalog) -> R) -> R {
    CATALOG.with(|catalog| f(&mut catalog.borrow_mut()))
}

fn with_rng<R>(f: impl FnOnce(&mut SmallRng) -> R) -> R {
    SIM_RNG.with(|cell| {
        let mut slot = cell.borrow_mut();
        let rng = slot.get_or_insert_with(|| SmallRng::seed_from_u64(js_sys::Date::now() as u64));
        f(rng)
    })
}

/// Bridge logger: mirrors every entry into the on-screen activity log and
/// forwards it to the browser console.
pub struct LeptosLogger {
    console: ConsoleLogger,
}

impl LeptosLogger {
    pub fn new() -> Self {
        Self { console: ConsoleLogger::new_development() }
    }
}

impl Default for LeptosLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for LeptosLogger {
    fn log(&self, entry: LogEntry) {
        let line = format!(
            "[{}] {} {}: {}",
            get_time_provider().format_timestamp(entry.timestamp),
            entry.level,
            entry.component,
            entry.message
        );
        if !log_paused().get_untracked() {
            log_lines().update(|lines| {
                lines.push(line);
                while lines.len() > MAX_LOG_LINES {
                    lines.remove(0);
                }
            });
        }
        self.console.log(entry);
    }
}

fn format_quote(value: f64) -> String {
    if value >= 1_000.0 { format!("{:.2}", value) } else { format!("{:.4}", value) }
}

/// Push the catalog into the `instruments` signal and keep it there.
fn init_catalog() {
    with_catalog(|catalog| {
        catalog.subscribe(|list| instruments().set(list.to_vec()));
        instruments().set(catalog.instruments().to_vec());
    });
}

/// Abort the running tick loop, if any. Called before every restart and on
/// chart unmount, so a discarded series never sees another tick.
pub fn abort_tick_loop() {
    if let Some(handle) = tick_abort_handle().get_untracked() {
        handle.abort();
    }
    tick_abort_handle().set(None);
    is_simulating().set(false);
}

/// One simulation step: quote flicker across the whole catalog first, then
/// the open bar of the on-screen series.
fn simulation_tick(epoch: u64) {
    with_catalog(|catalog| {
        catalog.update_all(|instrument| with_rng(|rng| tick_quotes(rng, instrument)));
    });

    let symbol = chart_store().with_untracked(|store| store.symbol().clone());
    let last = chart_store().with_untracked(|store| store.series().latest().cloned());
    if let Some(last) = last {
        let candle = with_rng(|rng| tick_candle(rng, &last, &symbol));
        current_price().set(candle.ohlcv.close.value());
        chart_store().update(|store| {
            store.apply_tick(epoch, candle);
        });
    }

    let selected = selected_symbol().get_untracked();
    if let Some(instrument) = with_catalog(|catalog| catalog.get(&selected).cloned()) {
        current_change().set(instrument.change);
    }
}

fn start_tick_loop(epoch: u64) {
    let (handle, registration) = AbortHandle::new_pair();
    tick_abort_handle().set(Some(handle));
    is_simulating().set(true);
    let tick_ms = sim_config().get_untracked().tick_interval_ms;

    #[cfg(target_arch = "wasm32")]
    spawn_local(async move {
        use crate::infrastructure::market_feed::live::run_tick_loop;
        use futures::future::Abortable;
        let ticks = run_tick_loop(tick_ms, move || simulation_tick(epoch));
        let _ = Abortable::new(ticks, registration).await;
    });
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (registration, tick_ms, epoch);
}

/// Regenerate the series for the current selection and restart the tick loop
/// against the fresh epoch.
pub fn restart_simulation() {
    abort_tick_loop();

    let symbol = selected_symbol().get_untracked();
    let interval = current_interval().get_untracked();
    let now_secs = get_time_provider().current_timestamp();

    let candles = with_rng(|rng| {
        HistoryGenerator::generate(rng, &symbol, lookback_days_for(interval), interval, now_secs)
    });
    let series = CandleSeries::from_candles(candles);

    let epoch = chart_store()
        .try_update(|store| store.replace_series(symbol.clone(), interval, series))
        .unwrap_or(0);

    candle_count().set(chart_store().with_untracked(|store| store.candle_count()));
    if let Some(price) = chart_store().with_untracked(|store| store.series().get_latest_price().copied())
    {
        current_price().set(price.value());
    }
    hover_state().set(None);

    get_logger().info(
        LogComponent::Presentation("TradeScreen"),
        &format!("📈 simulating {} on {}", symbol.value(), interval),
    );

    start_tick_loop(epoch);
}

fn start_clock(registration: futures::future::AbortRegistration) {
    let refresh = || clock_text().set(format_clock(get_time_provider().current_timestamp()));
    refresh();

    let clock_ms = sim_config().get_untracked().clock_interval_ms;
    #[cfg(target_arch = "wasm32")]
    spawn_local(async move {
        use crate::infrastructure::market_feed::live::run_tick_loop;
        use futures::future::Abortable;
        let ticks = run_tick_loop(clock_ms, refresh);
        let _ = Abortable::new(ticks, registration).await;
    });
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (registration, clock_ms);
}

#[component]
pub fn App() -> impl IntoView {
    init_catalog();

    view! {
        <style>
            {r#"
            .trade-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #101418;
                min-height: 100vh;
                padding: 16px;
                color: #e0e4e8;
            }

            .header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                background: #1a2028;
                border: 1px solid #2a323c;
                border-radius: 10px;
                padding: 14px 20px;
                margin-bottom: 14px;
            }

            .brand h1 { margin: 0; font-size: 20px; }
            .brand .subtitle { font-size: 12px; color: #8a94a0; }

            .readout { display: flex; gap: 28px; }
            .readout-item { text-align: center; }
            .readout-value {
                font-family: 'Courier New', monospace;
                font-size: 18px;
                font-weight: 700;
            }
            .readout-label { font-size: 11px; color: #8a94a0; margin-top: 3px; }
            .up { color: #00c584; }
            .down { color: #ff5252; }

            .main-row { display: flex; gap: 14px; align-items: stretch; }

            .watch-list {
                width: 320px;
                background: #1a2028;
                border: 1px solid #2a323c;
                border-radius: 10px;
                padding: 10px;
                overflow-y: auto;
                max-height: 640px;
            }

            .category-row { display: flex; gap: 4px; margin-bottom: 8px; flex-wrap: wrap; }

            .chart-panel {
                flex: 1;
                background: #1a2028;
                border: 1px solid #2a323c;
                border-radius: 10px;
                padding: 10px;
            }

            .toolbar {
                display: flex;
                gap: 4px;
                margin-bottom: 8px;
                align-items: center;
                flex-wrap: wrap;
            }
            .toolbar .spacer { flex: 1; }

            .tool-btn {
                background: #232b35;
                color: #cdd4db;
                border: 1px solid #2a323c;
                padding: 4px 9px;
                border-radius: 5px;
                cursor: pointer;
                font-size: 12px;
            }
            .tool-btn:hover { background: #2c3642; }
            .tool-btn.active { background: #2f6fed; color: white; border-color: #2f6fed; }

            .chart-wrapper { position: relative; }
            #chart-canvas { width: 100%; height: 460px; display: block; cursor: crosshair; border-radius: 6px; }

            .instrument-row {
                display: flex;
                align-items: center;
                gap: 8px;
                padding: 6px 8px;
                border-radius: 6px;
                cursor: pointer;
                font-size: 13px;
            }
            .instrument-row:hover { background: #232b35; }
            .instrument-row.selected { background: #253349; }
            .instrument-name { flex: 1; display: flex; flex-direction: column; }
            .instrument-symbol { font-weight: 600; }
            .instrument-desc { font-size: 11px; color: #8a94a0; }
            .quote { display: flex; flex-direction: column; align-items: flex-end; font-family: 'Courier New', monospace; font-size: 12px; }
            .quote .ask { color: #8a94a0; }
            .change { width: 62px; text-align: right; font-family: 'Courier New', monospace; font-size: 12px; }

            .fav-btn {
                background: none;
                border: none;
                color: #f0b90b;
                cursor: pointer;
                font-size: 14px;
                padding: 0;
            }

            .order-ticket {
                width: 260px;
                background: #1a2028;
                border: 1px solid #2a323c;
                border-radius: 10px;
                padding: 14px;
            }
            .order-ticket h3 { margin: 0 0 10px; font-size: 15px; }
            .direction-row { display: flex; gap: 6px; margin-bottom: 10px; }
            .direction-btn {
                flex: 1;
                padding: 8px 0;
                border: 1px solid #2a323c;
                border-radius: 6px;
                background: #232b35;
                color: #cdd4db;
                cursor: pointer;
                font-weight: 600;
            }
            .direction-btn.buy.active { background: #00c584; color: #05130d; border-color: #00c584; }
            .direction-btn.sell.active { background: #ff5252; color: #1c0707; border-color: #ff5252; }
            .field { margin-bottom: 10px; }
            .field label { display: block; font-size: 11px; color: #8a94a0; margin-bottom: 3px; }
            .field input {
                width: 100%;
                box-sizing: border-box;
                background: #101418;
                border: 1px solid #2a323c;
                border-radius: 5px;
                color: #e0e4e8;
                padding: 6px 8px;
                font-family: 'Courier New', monospace;
            }
            .badge {
                font-family: 'Courier New', monospace;
                font-size: 12px;
                padding: 4px 8px;
                border-radius: 4px;
                margin-bottom: 6px;
                background: #232b35;
            }
            .submit-btn {
                width: 100%;
                padding: 9px 0;
                border: none;
                border-radius: 6px;
                background: #2f6fed;
                color: white;
                font-weight: 700;
                cursor: pointer;
            }
            .submit-btn:hover { background: #3d7bf5; }

            .log-console {
                margin-top: 14px;
                background: #0c0f13;
                border: 1px solid #2a323c;
                border-radius: 10px;
                padding: 12px;
                max-height: 220px;
                overflow-y: auto;
            }
            .log-header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 8px;
                color: #00c584;
                font-weight: 600;
                font-size: 13px;
            }
            .log-btn {
                background: #232b35;
                color: #cdd4db;
                border: none;
                padding: 4px 9px;
                border-radius: 5px;
                cursor: pointer;
                font-size: 11px;
                margin-left: 5px;
            }
            .log-btn:hover { background: #2c3642; }
            .log-line {
                font-family: 'Courier New', monospace;
                font-size: 11px;
                color: #aab4be;
                margin: 2px 0;
                white-space: pre-wrap;
            }
            "#}
        </style>
        <div class="trade-app">
            <Header />
            <div class="main-row">
                <WatchList />
                <ChartPanel />
                <OrderTicket />
            </div>
            <LogConsole />
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let (handle, registration) = AbortHandle::new_pair();
    start_clock(registration);
    on_cleanup(move || handle.abort());

    let change_up = move || current_change().get() >= 0.0;
    let change_down = move || current_change().get() < 0.0;

    view! {
        <div class="header">
            <div class="brand">
                <h1>"📈 Trade Simulator"</h1>
                <span class="subtitle">"Synthetic market data • no real orders"</span>
            </div>
            <div class="readout">
                <div class="readout-item">
                    <div class="readout-value">
                        {move || selected_symbol().get().value().to_string()}
                    </div>
                    <div class="readout-label">"Instrument"</div>
                </div>
                <div class="readout-item">
                    <div class="readout-value">{move || format_quote(current_price().get())}</div>
                    <div class="readout-label">"Last Price"</div>
                </div>
                <div class="readout-item">
                    <div class="readout-value" class:up=change_up class:down=change_down>
                        {move || format!("{:+.2}%", current_change().get())}
                    </div>
                    <div class="readout-label">"Change"</div>
                </div>
                <div class="readout-item">
                    <div class="readout-value">{move || clock_text().get()}</div>
                    <div class="readout-label">"UTC"</div>
                </div>
                <div class="readout-item">
                    <div class="readout-value">
                        {move || if is_simulating().get() { "🟢 LIVE" } else { "🔴 OFF" }}
                    </div>
                    <div class="readout-label">"Simulation"</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn WatchList() -> impl IntoView {
    let filtered = move || {
        let filter = category_filter().get();
        instruments()
            .get()
            .into_iter()
            .filter(|instrument| filter.is_none_or(|category| instrument.category == category))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="watch-list">
            <div class="category-row">
                <button
                    class="tool-btn"
                    class:active=move || category_filter().get().is_none()
                    on:click=move |_| category_filter().set(None)
                >
                    "all"
                </button>
                {InstrumentCategory::iter()
                    .map(|category| {
                        view! {
                            <button
                                class="tool-btn"
                                class:active=move || category_filter().get() == Some(category)
                                on:click=move |_| category_filter().set(Some(category))
                            >
                                {category.as_ref().to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <For
                each=filtered
                key=|instrument| {
                    format!(
                        "{}:{:.5}:{:.5}:{:+.2}:{}",
                        instrument.symbol.value(),
                        instrument.bid.value(),
                        instrument.ask.value(),
                        instrument.change,
                        instrument.favorite,
                    )
                }
                children=move |instrument| {
                    let row_symbol = instrument.symbol.clone();
                    let select_symbol = instrument.symbol.clone();
                    let fav_symbol = instrument.symbol.clone();
                    let change_up = instrument.change >= 0.0;
                    view! {
                        <div
                            class="instrument-row"
                            class:selected=move || selected_symbol().get() == row_symbol
                            on:click=move |_| selected_symbol().set(select_symbol.clone())
                        >
                            <button
                                class="fav-btn"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    with_catalog(|catalog| {
                                        catalog.toggle_favorite(&fav_symbol);
                                    });
                                }
                            >
                                {if instrument.favorite { "★" } else { "☆" }}
                            </button>
                            <div class="instrument-name">
                                <span class="instrument-symbol">
                                    {instrument.symbol.value().to_string()}
                                </span>
                                <span class="instrument-desc">{instrument.name.clone()}</span>
                            </div>
                            <div class="quote">
                                <span class="bid">{format_quote(instrument.bid.value())}</span>
                                <span class="ask">{format_quote(instrument.ask.value())}</span>
                            </div>
                            <span class="change" class:up=change_up class:down=!change_up>
                                {format!("{:+.2}%", instrument.change)}
                            </span>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn ChartPanel() -> impl IntoView {
    // Replace the series (and the tick loop) whenever the selection changes.
    create_effect(move |_| {
        let _symbol = selected_symbol().get();
        let _interval = current_interval().get();
        restart_simulation();
    });

    on_cleanup(abort_tick_loop);

    // Synchronous redraw whenever any frame input changes.
    create_effect(move |_| {
        let chart_type = chart_type().get();
        let hover = hover_state().get();
        let sma = if sma_enabled().get() { Some(SMA_PERIOD) } else { None };
        chart_store().with(|store| {
            let backend = CanvasBackend::new(CHART_CANVAS_ID);
            let dims = match backend.sync_size() {
                Ok(dims) => dims,
                Err(_) => return,
            };
            chart_dims().set(dims);
            let scene = build_scene(store.series(), dims, chart_type, hover, sma);
            if let Err(e) = backend.render(&scene) {
                get_logger().error(
                    LogComponent::Infrastructure("Canvas"),
                    &format!("render failed: {}", e),
                );
            }
        });
    });

    let on_mouse_move = move |event: web_sys::MouseEvent| {
        let x = event.offset_x() as f64;
        let dims = chart_dims().get_untracked();
        let hover =
            chart_store().with_untracked(|store| hover_state_at(x, store.series(), dims));
        hover_state().set(hover);
    };
    let on_mouse_leave = move |_event: web_sys::MouseEvent| hover_state().set(None);

    view! {
        <div class="chart-panel">
            <div class="toolbar">
                {TimeInterval::iter()
                    .map(|interval| {
                        view! {
                            <button
                                class="tool-btn"
                                class:active=move || current_interval().get() == interval
                                on:click=move |_| current_interval().set(interval)
                            >
                                {interval.as_ref().to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
                <div class="spacer"></div>
                {ChartType::iter()
                    .map(|kind| {
                        view! {
                            <button
                                class="tool-btn"
                                class:active=move || chart_type().get() == kind
                                on:click=move |_| chart_type().set(kind)
                            >
                                {kind.to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    class="tool-btn"
                    class:active=move || sma_enabled().get()
                    on:click=move |_| sma_enabled().update(|on| *on = !*on)
                >
                    "SMA 20"
                </button>
            </div>
            <div class="chart-wrapper">
                <canvas
                    id=CHART_CANVAS_ID
                    on:mousemove=on_mouse_move
                    on:mouseleave=on_mouse_leave
                ></canvas>
            </div>
        </div>
    }
}

#[component]
fn OrderTicket() -> impl IntoView {
    let (direction, set_direction) = create_signal(Direction::Buy);
    let (size_input, set_size_input) = create_signal("1".to_string());
    let (sl_input, set_sl_input) = create_signal(String::new());
    let (tp_input, set_tp_input) = create_signal(String::new());

    let selected_instrument = move || {
        let symbol = selected_symbol().get();
        instruments().get().into_iter().find(|instrument| instrument.symbol == symbol)
    };

    let entry_price = move || {
        selected_instrument()
            .map(|instrument| match direction.get() {
                Direction::Buy => instrument.ask.value(),
                Direction::Sell => instrument.bid.value(),
            })
            .unwrap_or(0.0)
    };

    let potential = move || {
        selected_instrument()
            .map(|instrument| {
                calculate_potential(
                    &instrument,
                    direction.get(),
                    parse_or_zero(&size_input.get()),
                    parse_level(&sl_input.get()),
                    parse_level(&tp_input.get()),
                    &sim_config().get().lot_sizing,
                )
            })
            .unwrap_or_default()
    };

    let submit = move |_| {
        let symbol = selected_symbol().get_untracked();
        let Some(instrument) = with_catalog(|catalog| catalog.get(&symbol).cloned()) else {
            return;
        };
        let draft = OrderDraft {
            direction: direction.get_untracked(),
            size: parse_or_zero(&size_input.get_untracked()),
            stop_loss: parse_level(&sl_input.get_untracked()),
            take_profit: parse_level(&tp_input.get_untracked()),
        };
        submit_order(&instrument, &draft, &sim_config().get_untracked().lot_sizing);

        // The draft resets after every simulated submission
        set_size_input.set("1".to_string());
        set_sl_input.set(String::new());
        set_tp_input.set(String::new());
    };

    view! {
        <div class="order-ticket">
            <h3>"Order Ticket"</h3>
            <div class="direction-row">
                <button
                    class="direction-btn buy"
                    class:active=move || direction.get() == Direction::Buy
                    on:click=move |_| set_direction.set(Direction::Buy)
                >
                    "Buy"
                </button>
                <button
                    class="direction-btn sell"
                    class:active=move || direction.get() == Direction::Sell
                    on:click=move |_| set_direction.set(Direction::Sell)
                >
                    "Sell"
                </button>
            </div>
            <div class="field">
                <label>"Size (lots)"</label>
                <input
                    type="text"
                    prop:value=move || size_input.get()
                    on:input=move |ev| set_size_input.set(event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label>"Stop loss"</label>
                <input
                    type="text"
                    placeholder="optional"
                    prop:value=move || sl_input.get()
                    on:input=move |ev| set_sl_input.set(event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label>"Take profit"</label>
                <input
                    type="text"
                    placeholder="optional"
                    prop:value=move || tp_input.get()
                    on:input=move |ev| set_tp_input.set(event_target_value(&ev))
                />
            </div>
            <div class="badge">{move || format!("Entry @ {}", format_quote(entry_price()))}</div>
            {move || {
                let projected = potential();
                (projected.sl_value != 0.0)
                    .then(|| {
                        view! {
                            <div class="badge down">
                                {format!("SL {:+.2} USD", projected.sl_value)}
                            </div>
                        }
                    })
            }}
            {move || {
                let projected = potential();
                (projected.tp_value != 0.0)
                    .then(|| {
                        view! {
                            <div class="badge up">
                                {format!("TP {:+.2} USD", projected.tp_value)}
                            </div>
                        }
                    })
            }}
            <button class="submit-btn" on:click=submit>
                {move || format!("Place {} order", direction.get())}
            </button>
        </div>
    }
}

#[component]
fn LogConsole() -> impl IntoView {
    view! {
        <div class="log-console">
            <div class="log-header">
                <span>"🧾 Activity Log"</span>
                <div>
                    <button
                        class="log-btn"
                        on:click=move |_| {
                            log_paused().update(|paused| *paused = !*paused);
                            let state =
                                if log_paused().get_untracked() { "paused" } else { "resumed" };
                            get_logger()
                                .info(
                                    LogComponent::Presentation("LogConsole"),
                                    &format!("logging {}", state),
                                );
                        }
                    >
                        {move || if log_paused().get() { "▶ Resume" } else { "⏸ Pause" }}
                    </button>
                    <button class="log-btn" on:click=move |_| log_lines().set(Vec::new())>
                        "🗑 Clear"
                    </button>
                </div>
            </div>
            <div class="log-body">
                <For
                    each=move || log_lines().get()
                    key=|line| line.clone()
                    children=move |line| view! { <div class="log-line">{line}</div> }
                />
            </div>
        </div>
    }
}
