use super::scene::{DrawCommand, TextAlign};
use crate::domain::chart::ChartDimensions;
use crate::domain::errors::{AppError, SurfaceResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const LABEL_FONT: &str = "11px 'Courier New', monospace";
const DASH_PATTERN: [f64; 2] = [5.0, 4.0];

/// Canvas 2D executor for a draw-command scene - Infrastructure
/// implementation. Any other backend that can consume [`DrawCommand`]s
/// (a test buffer, SVG, ...) can replace it without touching chart logic.
pub struct CanvasBackend {
    canvas_id: String,
}

impl CanvasBackend {
    pub fn new(canvas_id: impl Into<String>) -> Self {
        Self { canvas_id: canvas_id.into() }
    }

    fn canvas(&self) -> SurfaceResult<HtmlCanvasElement> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| AppError::SurfaceError("document not available".to_string()))?;
        document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| AppError::SurfaceError(format!("canvas '{}' not found", self.canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::SurfaceError("element is not a canvas".to_string()))
    }

    fn context(&self, canvas: &HtmlCanvasElement) -> SurfaceResult<CanvasRenderingContext2d> {
        canvas
            .get_context("2d")
            .map_err(|e| AppError::SurfaceError(format!("get_context failed: {e:?}")))?
            .ok_or_else(|| AppError::SurfaceError("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::SurfaceError("failed to cast 2d context".to_string()))
    }

    /// Resynchronize the canvas pixel size to its container's client size.
    /// Must run before every redraw so a stale surface size is never drawn
    /// into.
    pub fn sync_size(&self) -> SurfaceResult<ChartDimensions> {
        let canvas = self.canvas()?;
        let (width, height) = match canvas.parent_element() {
            Some(parent) if parent.client_width() > 0 && parent.client_height() > 0 => {
                (parent.client_width() as u32, parent.client_height() as u32)
            }
            _ => (canvas.width(), canvas.height()),
        };
        if canvas.width() != width {
            canvas.set_width(width);
        }
        if canvas.height() != height {
            canvas.set_height(height);
        }
        Ok(ChartDimensions::new(width, height))
    }

    /// Execute a scene. Same command list in, same pixels out.
    pub fn render(&self, commands: &[DrawCommand]) -> SurfaceResult<()> {
        let canvas = self.canvas()?;
        let ctx = self.context(&canvas)?;

        for command in commands {
            match command {
                DrawCommand::Fill { x, y, w, h, color }
                | DrawCommand::Rect { x, y, w, h, color } => {
                    ctx.set_fill_style(&JsValue::from_str(color));
                    ctx.fill_rect(*x, *y, *w, *h);
                }
                DrawCommand::Line { x1, y1, x2, y2, color, width, dashed } => {
                    ctx.set_stroke_style(&JsValue::from_str(color));
                    ctx.set_line_width(*width);
                    self.set_dash(&ctx, *dashed)?;
                    ctx.begin_path();
                    ctx.move_to(*x1, *y1);
                    ctx.line_to(*x2, *y2);
                    ctx.stroke();
                    self.set_dash(&ctx, false)?;
                }
                DrawCommand::Polyline { points, color, width } => {
                    let Some((first, rest)) = points.split_first() else {
                        continue;
                    };
                    ctx.set_stroke_style(&JsValue::from_str(color));
                    ctx.set_line_width(*width);
                    ctx.begin_path();
                    ctx.move_to(first.0, first.1);
                    for (x, y) in rest {
                        ctx.line_to(*x, *y);
                    }
                    ctx.stroke();
                }
                DrawCommand::Label { x, y, text, color, align } => {
                    ctx.set_fill_style(&JsValue::from_str(color));
                    ctx.set_font(LABEL_FONT);
                    ctx.set_text_align(match align {
                        TextAlign::Left => "left",
                        TextAlign::Center => "center",
                        TextAlign::Right => "right",
                    });
                    ctx.fill_text(text, *x, *y)
                        .map_err(|e| AppError::SurfaceError(format!("fill_text failed: {e:?}")))?;
                }
            }
        }

        Ok(())
    }

    fn set_dash(&self, ctx: &CanvasRenderingContext2d, dashed: bool) -> SurfaceResult<()> {
        let segments = js_sys::Array::new();
        if dashed {
            for seg in DASH_PATTERN {
                segments.push(&JsValue::from_f64(seg));
            }
        }
        ctx.set_line_dash(&segments)
            .map_err(|e| AppError::SurfaceError(format!("set_line_dash failed: {e:?}")))
    }
}
