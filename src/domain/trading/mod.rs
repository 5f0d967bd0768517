//! Order ticket math. Strictly a simulation: submissions are logged, never
//! sent anywhere, and nothing is persisted.

use crate::config::LotSizing;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::Instrument;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - Order direction
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Direction {
    #[display(fmt = "Buy")]
    #[strum(serialize = "buy")]
    #[serde(rename = "buy")]
    Buy,
    #[display(fmt = "Sell")]
    #[strum(serialize = "sell")]
    #[serde(rename = "sell")]
    Sell,
}

impl Direction {
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Buy => 1.0,
            Direction::Sell => -1.0,
        }
    }
}

/// Entity - Order draft, reset after each simulated submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub direction: Direction,
    pub size: f64,
    pub stop_loss: Option<f64>,
    pub take_profit: Option<f64>,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self { direction: Direction::Buy, size: 1.0, stop_loss: None, take_profit: None }
    }
}

/// Signed monetary projections for the draft's stop-loss / take-profit
/// levels. A missing level projects to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Potential {
    pub sl_value: f64,
    pub tp_value: f64,
}

/// Entry is the ask for a buy and the bid for a sell; each level projects to
/// `sign * (level - entry) * size * units_per_lot`.
pub fn calculate_potential(
    instrument: &Instrument,
    direction: Direction,
    size: f64,
    stop_loss: Option<f64>,
    take_profit: Option<f64>,
    sizing: &LotSizing,
) -> Potential {
    let entry = match direction {
        Direction::Buy => instrument.ask.value(),
        Direction::Sell => instrument.bid.value(),
    };
    let units = sizing.units_for(instrument.category);
    let project = |level: Option<f64>| -> f64 {
        match level {
            Some(level) => direction.sign() * (level - entry) * size * units,
            None => 0.0,
        }
    };

    Potential { sl_value: project(stop_loss), tp_value: project(take_profit) }
}

/// Simulated submission: compute the projections, log the would-be order,
/// hand the numbers back. No network call, no order book.
pub fn submit_order(instrument: &Instrument, draft: &OrderDraft, sizing: &LotSizing) -> Potential {
    let potential = calculate_potential(
        instrument,
        draft.direction,
        draft.size,
        draft.stop_loss,
        draft.take_profit,
        sizing,
    );

    let entry = match draft.direction {
        Direction::Buy => instrument.ask.value(),
        Direction::Sell => instrument.bid.value(),
    };
    get_logger().info(
        LogComponent::Domain("OrderTicket"),
        &format!(
            "📋 simulated {} {} x{:.2} @ {:.4} (SL {:?} / TP {:?}, projected {:.2} / {:.2})",
            draft.direction,
            instrument.symbol.value(),
            draft.size,
            entry,
            draft.stop_loss,
            draft.take_profit,
            potential.sl_value,
            potential.tp_value,
        ),
    );

    potential
}

/// Free-text numeric inputs never propagate a parse error into the
/// calculation path; anything unparseable (or negative) reads as zero.
pub fn parse_or_zero(input: &str) -> f64 {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0).unwrap_or(0.0)
}

/// Empty or zero inputs mean "no level set".
pub fn parse_level(input: &str) -> Option<f64> {
    let value = parse_or_zero(input);
    (value > 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_zero_swallows_garbage() {
        assert_eq!(parse_or_zero("1.25"), 1.25);
        assert_eq!(parse_or_zero("  2 "), 2.0);
        assert_eq!(parse_or_zero("abc"), 0.0);
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("-3"), 0.0);
        assert_eq!(parse_or_zero("NaN"), 0.0);
    }

    #[test]
    fn parse_level_treats_zero_as_unset() {
        assert_eq!(parse_level("0"), None);
        assert_eq!(parse_level("1.2480"), Some(1.2480));
        assert_eq!(parse_level("bogus"), None);
    }
}
