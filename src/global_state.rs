use crate::config::SimConfig;
use crate::domain::chart::{ChartDimensions, ChartStore, ChartType, HoverState};
use crate::domain::market_data::{Instrument, InstrumentCategory, Symbol, TimeInterval};
use futures::future::AbortHandle;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    /// Snapshot of the catalog, pushed by its observer after every mutation.
    pub instruments: RwSignal<Vec<Instrument>>,
    pub selected_symbol: RwSignal<Symbol>,
    pub current_interval: RwSignal<TimeInterval>,
    pub chart_type: RwSignal<ChartType>,
    pub sma_enabled: RwSignal<bool>,
    pub hover: RwSignal<Option<HoverState>>,
    pub chart_store: RwSignal<ChartStore>,
    pub chart_dims: RwSignal<ChartDimensions>,
    pub current_price: RwSignal<f64>,
    pub current_change: RwSignal<f64>,
    pub candle_count: RwSignal<usize>,
    pub is_simulating: RwSignal<bool>,
    pub clock_text: RwSignal<String>,
    pub category_filter: RwSignal<Option<InstrumentCategory>>,
    /// Handle of the running tick loop; aborted and replaced whenever the
    /// owning selection changes or the chart unmounts.
    pub tick_abort: RwSignal<Option<AbortHandle>>,
    pub sim_config: RwSignal<SimConfig>,
    pub log_lines: RwSignal<Vec<String>>,
    pub log_paused: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        instruments: create_rw_signal(Vec::new()),
        selected_symbol: create_rw_signal(Symbol::from("EUR/USD")),
        current_interval: create_rw_signal(TimeInterval::OneHour),
        chart_type: create_rw_signal(ChartType::Candles),
        sma_enabled: create_rw_signal(false),
        hover: create_rw_signal(None),
        chart_store: create_rw_signal(ChartStore::new(
            Symbol::from("EUR/USD"),
            TimeInterval::OneHour,
        )),
        chart_dims: create_rw_signal(ChartDimensions::default()),
        current_price: create_rw_signal(0.0),
        current_change: create_rw_signal(0.0),
        candle_count: create_rw_signal(0),
        is_simulating: create_rw_signal(false),
        clock_text: create_rw_signal(String::from("--:--:--")),
        category_filter: create_rw_signal(None),
        tick_abort: create_rw_signal(None),
        sim_config: create_rw_signal(SimConfig::default()),
        log_lines: create_rw_signal(Vec::new()),
        log_paused: create_rw_signal(false),
    })
}
