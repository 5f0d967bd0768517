use crate::domain::market_data::Symbol;

/// Per-symbol simulation parameters.
///
/// `volatility` drives the historical walk; `tick_volatility` is the
/// tighter intraday noise used by the live simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolProfile {
    pub base_price: f64,
    pub volatility: f64,
    pub tick_volatility: f64,
}

const PROFILES: &[(&str, SymbolProfile)] = &[
    ("EUR/USD", SymbolProfile { base_price: 1.08, volatility: 0.002, tick_volatility: 0.0004 }),
    ("GBP/USD", SymbolProfile { base_price: 1.27, volatility: 0.0025, tick_volatility: 0.0005 }),
    ("USD/JPY", SymbolProfile { base_price: 149.5, volatility: 0.4, tick_volatility: 0.08 }),
    ("AUD/USD", SymbolProfile { base_price: 0.66, volatility: 0.0015, tick_volatility: 0.0003 }),
    ("BTC/USD", SymbolProfile { base_price: 67_000.0, volatility: 250.0, tick_volatility: 45.0 }),
    ("ETH/USD", SymbolProfile { base_price: 3_500.0, volatility: 12.0, tick_volatility: 2.5 }),
    ("SOL/USD", SymbolProfile { base_price: 145.0, volatility: 0.5, tick_volatility: 0.12 }),
    ("AAPL", SymbolProfile { base_price: 190.0, volatility: 0.6, tick_volatility: 0.12 }),
    ("TSLA", SymbolProfile { base_price: 180.0, volatility: 0.7, tick_volatility: 0.15 }),
    ("MSFT", SymbolProfile { base_price: 420.0, volatility: 1.2, tick_volatility: 0.25 }),
    ("XAU/USD", SymbolProfile { base_price: 2_300.0, volatility: 6.0, tick_volatility: 1.1 }),
    ("WTI/USD", SymbolProfile { base_price: 78.0, volatility: 0.25, tick_volatility: 0.05 }),
];

/// Conservative fallback so any instrument added to the catalog still
/// charts something.
pub const DEFAULT_PROFILE: SymbolProfile =
    SymbolProfile { base_price: 100.0, volatility: 1.0, tick_volatility: 0.2 };

pub fn profile_for(symbol: &Symbol) -> SymbolProfile {
    PROFILES
        .iter()
        .find(|(s, _)| *s == symbol.value())
        .map(|(_, p)| *p)
        .unwrap_or(DEFAULT_PROFILE)
}
