use super::entities::Instrument;
use super::value_objects::{InstrumentCategory, Symbol};
use crate::domain::logging::{LogComponent, get_logger};

/// Observer callback invoked after every catalog mutation.
pub type CatalogObserver = Box<dyn Fn(&[Instrument])>;

/// Domain store - Instrument catalog
///
/// Owns the tradable instrument list for one session. Views receive it
/// explicitly and subscribe for updates; nothing reads it through ambient
/// globals.
pub struct InstrumentCatalog {
    instruments: Vec<Instrument>,
    observers: Vec<CatalogObserver>,
}

impl InstrumentCatalog {
    pub fn new(instruments: Vec<Instrument>) -> Self {
        Self { instruments, observers: Vec::new() }
    }

    /// Static seed data: one session's worth of quotable instruments.
    pub fn seeded() -> Self {
        use InstrumentCategory::*;
        Self::new(vec![
            Instrument::new("EUR/USD", "Euro / US Dollar", 1.0798, 1.0801, Forex),
            Instrument::new("GBP/USD", "British Pound / US Dollar", 1.2698, 1.2702, Forex),
            Instrument::new("USD/JPY", "US Dollar / Japanese Yen", 149.48, 149.52, Forex),
            Instrument::new("AUD/USD", "Australian Dollar / US Dollar", 0.6598, 0.6601, Forex),
            Instrument::new("BTC/USD", "Bitcoin", 66_980.0, 67_020.0, Crypto),
            Instrument::new("ETH/USD", "Ethereum", 3_498.0, 3_502.0, Crypto),
            Instrument::new("SOL/USD", "Solana", 144.9, 145.1, Crypto),
            Instrument::new("AAPL", "Apple Inc.", 189.95, 190.05, Stocks),
            Instrument::new("TSLA", "Tesla Inc.", 179.9, 180.1, Stocks),
            Instrument::new("MSFT", "Microsoft Corp.", 419.8, 420.2, Stocks),
            Instrument::new("XAU/USD", "Gold Spot", 2_299.5, 2_300.5, Commodities),
            Instrument::new("WTI/USD", "Crude Oil WTI", 77.95, 78.05, Commodities),
        ])
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn get(&self, symbol: &Symbol) -> Option<&Instrument> {
        self.instruments.iter().find(|i| &i.symbol == symbol)
    }

    pub fn by_category(&self, category: InstrumentCategory) -> Vec<&Instrument> {
        self.instruments.iter().filter(|i| i.category == category).collect()
    }

    pub fn favorites(&self) -> Vec<&Instrument> {
        self.instruments.iter().filter(|i| i.favorite).collect()
    }

    /// Flip the favorite flag on exactly one instrument. Session-only, no
    /// persistence.
    pub fn toggle_favorite(&mut self, symbol: &Symbol) -> bool {
        let Some(instrument) = self.instruments.iter_mut().find(|i| &i.symbol == symbol) else {
            get_logger().warn(
                LogComponent::Domain("Catalog"),
                &format!("toggle_favorite: unknown symbol {}", symbol.value()),
            );
            return false;
        };
        instrument.favorite = !instrument.favorite;
        self.notify();
        true
    }

    /// Apply a fresh quote to one instrument. Spread is recomputed by the
    /// entity; callers never pass it in.
    pub fn update_quotes(&mut self, symbol: &Symbol, bid: f64, ask: f64, change: f64) {
        if let Some(instrument) = self.instruments.iter_mut().find(|i| &i.symbol == symbol) {
            instrument.set_quotes(bid, ask);
            instrument.change = change;
        }
    }

    /// Mutate every instrument through `f`, then notify observers once.
    pub fn update_all<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Instrument),
    {
        for instrument in &mut self.instruments {
            f(instrument);
        }
        self.notify();
    }

    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&[Instrument]) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(&self.instruments);
        }
    }
}
