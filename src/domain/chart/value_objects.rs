use crate::domain::market_data::Timestamp;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - Chart type
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
pub enum ChartType {
    #[display(fmt = "Candles")]
    #[strum(serialize = "candles")]
    #[serde(rename = "candles")]
    Candles,
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    #[serde(rename = "line")]
    Line,
    #[display(fmt = "Bars")]
    #[strum(serialize = "bar")]
    #[serde(rename = "bar")]
    Bars,
}

/// Value Object - Pixel size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDimensions {
    pub width: u32,
    pub height: u32,
}

impl ChartDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self { width: 800, height: 460 }
    }
}

/// Value Object - Cursor state for the crosshair overlay
///
/// Transient; cleared on pointer-leave.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub x: f64,
    pub price: f64,
    pub time: Timestamp,
}
