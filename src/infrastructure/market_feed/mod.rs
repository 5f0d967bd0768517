//! Synthetic stand-ins for a market-data backend: historical backfill and
//! the live tick stream.

pub mod history;
pub mod live;
pub mod profiles;

pub use history::{HistoryGenerator, lookback_days_for};
pub use live::{tick_candle, tick_quotes};
pub use profiles::{SymbolProfile, profile_for};
