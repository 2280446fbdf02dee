//! [`ChartSurface`] implementation over an HTML canvas 2D context.

use countdash_app::ports::{ChartSurface, TextAlign, TextStyle};
use countdash_domain::error::DashboardError;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Drawing surface bound to one `<canvas>`.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Render`] when the browser refuses a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, DashboardError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|err| DashboardError::Render(format!("{err:?}")))?
            .ok_or_else(|| DashboardError::Render("no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| DashboardError::Render("2d context cast failed".to_string()))?;
        Ok(Self { canvas, ctx })
    }
}

impl ChartSurface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn stroke_polyline(&mut self, points: &[(f64, f64)], color: &str, line_width: f64) {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx.begin_path();
        self.ctx.move_to(x0, y0);
        for &(x, y) in rest {
            self.ctx.line_to(x, y);
        }
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, width, height);
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        style: TextStyle,
    ) -> Result<(), DashboardError> {
        self.ctx.set_fill_style_str(style.color);
        self.ctx.set_font(style.font);
        self.ctx.set_text_align(match style.align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        self.ctx
            .fill_text(text, x, y)
            .map_err(|err| DashboardError::Render(format!("{err:?}")))
    }
}
