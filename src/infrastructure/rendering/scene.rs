use crate::domain::chart::{ChartDimensions, ChartType, HoverState};
use crate::domain::market_data::{CandleSeries, analysis::calculate_sma};
use crate::time_utils::format_time_label;
use serde::{Deserialize, Serialize};

pub const BACKGROUND_COLOR: &str = "#1a1a1a";
pub const GRID_COLOR: &str = "#2a2a2a";
pub const TEXT_COLOR: &str = "#aaaaaa";
pub const BULLISH_COLOR: &str = "#00ff88";
pub const BEARISH_COLOR: &str = "#ff4444";
pub const WICK_COLOR: &str = "#888888";
pub const LINE_COLOR: &str = "#4a9eff";
pub const SMA_COLOR: &str = "#f0b90b";
pub const CROSSHAIR_COLOR: &str = "#cccccc";
pub const LABEL_BOX_COLOR: &str = "#333333";

/// Number of horizontal gridlines (with price labels)
pub const H_GRIDLINES: usize = 5;
/// Number of vertical gridlines (with time labels)
pub const V_GRIDLINES: usize = 6;
/// Candle body width as a share of the per-bar x step
pub const BODY_WIDTH_RATIO: f64 = 0.8;
/// Padding applied above and below the series price range
pub const RANGE_PAD_RATIO: f64 = 0.05;

/// Text anchor for a label command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One imperative drawing step. The scene builder emits these; a backend
/// (canvas 2D in the browser, a plain vector in tests) executes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Fill { x: f64, y: f64, w: f64, h: f64, color: String },
    Rect { x: f64, y: f64, w: f64, h: f64, color: String },
    Line { x1: f64, y1: f64, x2: f64, y2: f64, color: String, width: f64, dashed: bool },
    Polyline { points: Vec<(f64, f64)>, color: String, width: f64 },
    Label { x: f64, y: f64, text: String, color: String, align: TextAlign },
}

/// Precomputed scaling for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScaleParams {
    min_price: f64,
    max_price: f64,
    x_scale: f64,
    width: f64,
    height: f64,
}

impl ScaleParams {
    fn price_to_y(&self, price: f64) -> f64 {
        let range = self.max_price - self.min_price;
        self.height * (1.0 - (price - self.min_price) / range)
    }
}

/// Per-bar x step; the last bar's center sits on the right edge.
pub fn x_scale_for(candle_count: usize, width: f64) -> f64 {
    if candle_count > 1 { width / (candle_count - 1) as f64 } else { width }
}

/// Map a pointer x coordinate to a bar index, clamped to the series.
/// `x == width` lands on the last bar, never out of range.
pub fn hover_index(x: f64, candle_count: usize, width: f64) -> usize {
    if candle_count == 0 {
        return 0;
    }
    if x >= width {
        return candle_count - 1;
    }
    let idx = (x / x_scale_for(candle_count, width)).floor();
    (idx.max(0.0) as usize).min(candle_count - 1)
}

/// Resolve the hovered bar's close/time for the crosshair overlay. The
/// reported price is the bar's close, not an interpolated sub-bar value.
pub fn hover_state_at(x: f64, series: &CandleSeries, dims: ChartDimensions) -> Option<HoverState> {
    if series.is_empty() {
        return None;
    }
    let candles = series.get_candles();
    let idx = hover_index(x, candles.len(), dims.width as f64);
    let candle = &candles[idx];
    Some(HoverState { x, price: candle.ohlcv.close.value(), time: candle.timestamp })
}

fn scale_params(series: &CandleSeries, dims: ChartDimensions) -> Option<ScaleParams> {
    let (min, max) = series.price_range()?;
    let (min, max) = (min.value(), max.value());
    let range = max - min;
    // Degenerate flat series still needs a non-zero band to divide by
    let padding = if range > 0.0 { range * RANGE_PAD_RATIO } else { max.abs().max(1.0) * RANGE_PAD_RATIO };

    Some(ScaleParams {
        min_price: min - padding,
        max_price: max + padding,
        x_scale: x_scale_for(series.count(), dims.width as f64),
        width: dims.width as f64,
        height: dims.height as f64,
    })
}

/// Build the full frame for one chart state. Pure and deterministic:
/// identical inputs always produce the identical command list, so redrawing
/// is idempotent by construction.
pub fn build_scene(
    series: &CandleSeries,
    dims: ChartDimensions,
    chart_type: ChartType,
    hover: Option<HoverState>,
    sma_period: Option<usize>,
) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Fill {
        x: 0.0,
        y: 0.0,
        w: dims.width as f64,
        h: dims.height as f64,
        color: BACKGROUND_COLOR.to_string(),
    }];

    let Some(scale) = scale_params(series, dims) else {
        commands.push(DrawCommand::Label {
            x: dims.width as f64 / 2.0,
            y: dims.height as f64 / 2.0,
            text: "No data".to_string(),
            color: TEXT_COLOR.to_string(),
            align: TextAlign::Center,
        });
        return commands;
    };

    push_grid(&mut commands, series, &scale);

    match chart_type {
        ChartType::Candles => push_candles(&mut commands, series, &scale),
        ChartType::Line => push_close_line(&mut commands, series, &scale),
        ChartType::Bars => push_bars(&mut commands, series, &scale),
    }

    if let Some(period) = sma_period {
        push_sma(&mut commands, series, &scale, period);
    }

    if let Some(hover) = hover {
        push_crosshair(&mut commands, series, &scale, hover);
    }

    commands
}

fn push_grid(commands: &mut Vec<DrawCommand>, series: &CandleSeries, scale: &ScaleParams) {
    for i in 0..H_GRIDLINES {
        let frac = i as f64 / (H_GRIDLINES - 1) as f64;
        let y = scale.height * frac;
        let price = scale.max_price - (scale.max_price - scale.min_price) * frac;

        commands.push(DrawCommand::Line {
            x1: 0.0,
            y1: y,
            x2: scale.width,
            y2: y,
            color: GRID_COLOR.to_string(),
            width: 1.0,
            dashed: false,
        });
        let text_y = if i == 0 { y + 12.0 } else { y - 4.0 };
        commands.push(DrawCommand::Label {
            x: scale.width - 6.0,
            y: text_y,
            text: format!("{:.4}", price),
            color: TEXT_COLOR.to_string(),
            align: TextAlign::Right,
        });
    }

    let candles = series.get_candles();
    for j in 0..V_GRIDLINES {
        let frac = j as f64 / (V_GRIDLINES - 1) as f64;
        let x = scale.width * frac;

        commands.push(DrawCommand::Line {
            x1: x,
            y1: 0.0,
            x2: x,
            y2: scale.height,
            color: GRID_COLOR.to_string(),
            width: 1.0,
            dashed: false,
        });
        let idx = ((frac * (candles.len() - 1) as f64).round() as usize).min(candles.len() - 1);
        commands.push(DrawCommand::Label {
            x,
            y: scale.height - 6.0,
            text: format_time_label(candles[idx].timestamp.value()),
            color: TEXT_COLOR.to_string(),
            align: TextAlign::Center,
        });
    }
}

fn body_color(bullish: bool) -> String {
    if bullish { BULLISH_COLOR.to_string() } else { BEARISH_COLOR.to_string() }
}

fn push_candles(commands: &mut Vec<DrawCommand>, series: &CandleSeries, scale: &ScaleParams) {
    let body_width = (scale.x_scale * BODY_WIDTH_RATIO).max(1.0);

    for (i, candle) in series.get_candles().iter().enumerate() {
        let x = i as f64 * scale.x_scale;
        let high_y = scale.price_to_y(candle.ohlcv.high.value());
        let low_y = scale.price_to_y(candle.ohlcv.low.value());
        let open_y = scale.price_to_y(candle.ohlcv.open.value());
        let close_y = scale.price_to_y(candle.ohlcv.close.value());

        commands.push(DrawCommand::Line {
            x1: x,
            y1: high_y,
            x2: x,
            y2: low_y,
            color: WICK_COLOR.to_string(),
            width: 1.0,
            dashed: false,
        });

        let body_top = open_y.min(close_y);
        let body_height = (open_y - close_y).abs().max(1.0);
        commands.push(DrawCommand::Rect {
            x: x - body_width / 2.0,
            y: body_top,
            w: body_width,
            h: body_height,
            color: body_color(candle.is_bullish()),
        });
    }
}

fn push_close_line(commands: &mut Vec<DrawCommand>, series: &CandleSeries, scale: &ScaleParams) {
    let points: Vec<(f64, f64)> = series
        .get_candles()
        .iter()
        .enumerate()
        .map(|(i, c)| (i as f64 * scale.x_scale, scale.price_to_y(c.ohlcv.close.value())))
        .collect();

    commands.push(DrawCommand::Polyline { points, color: LINE_COLOR.to_string(), width: 2.0 });
}

fn push_bars(commands: &mut Vec<DrawCommand>, series: &CandleSeries, scale: &ScaleParams) {
    let body_width = (scale.x_scale * BODY_WIDTH_RATIO).max(1.0);

    for (i, candle) in series.get_candles().iter().enumerate() {
        let x = i as f64 * scale.x_scale;
        let close_y = scale.price_to_y(candle.ohlcv.close.value());

        commands.push(DrawCommand::Rect {
            x: x - body_width / 2.0,
            y: close_y,
            w: body_width,
            h: scale.height - close_y,
            color: body_color(candle.is_bullish()),
        });
    }
}

fn push_sma(
    commands: &mut Vec<DrawCommand>,
    series: &CandleSeries,
    scale: &ScaleParams,
    period: usize,
) {
    let candles = series.as_slices();
    let values = calculate_sma(&candles, period);
    if values.is_empty() {
        return;
    }

    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, v)| ((i + period - 1) as f64 * scale.x_scale, scale.price_to_y(v.value())))
        .collect();

    commands.push(DrawCommand::Polyline { points, color: SMA_COLOR.to_string(), width: 1.5 });
}

fn push_crosshair(
    commands: &mut Vec<DrawCommand>,
    series: &CandleSeries,
    scale: &ScaleParams,
    hover: HoverState,
) {
    let idx = hover_index(hover.x, series.count(), scale.width);
    let snap_x = idx as f64 * scale.x_scale;
    let price_y = scale.price_to_y(hover.price);

    commands.push(DrawCommand::Line {
        x1: snap_x,
        y1: 0.0,
        x2: snap_x,
        y2: scale.height,
        color: CROSSHAIR_COLOR.to_string(),
        width: 1.0,
        dashed: true,
    });
    commands.push(DrawCommand::Line {
        x1: 0.0,
        y1: price_y,
        x2: scale.width,
        y2: price_y,
        color: CROSSHAIR_COLOR.to_string(),
        width: 1.0,
        dashed: false,
    });

    // Price badge on the right edge
    commands.push(DrawCommand::Rect {
        x: scale.width - 70.0,
        y: price_y - 9.0,
        w: 70.0,
        h: 18.0,
        color: LABEL_BOX_COLOR.to_string(),
    });
    commands.push(DrawCommand::Label {
        x: scale.width - 6.0,
        y: price_y + 4.0,
        text: format!("{:.4}", hover.price),
        color: CROSSHAIR_COLOR.to_string(),
        align: TextAlign::Right,
    });

    // Time badge on the bottom edge
    commands.push(DrawCommand::Rect {
        x: snap_x - 26.0,
        y: scale.height - 18.0,
        w: 52.0,
        h: 18.0,
        color: LABEL_BOX_COLOR.to_string(),
    });
    commands.push(DrawCommand::Label {
        x: snap_x,
        y: scale.height - 5.0,
        text: format_time_label(hover.time.value()),
        color: CROSSHAIR_COLOR.to_string(),
        align: TextAlign::Center,
    });
}
