//! Chart surface port — the handful of 2D drawing calls the line chart needs.

use countdash_domain::error::DashboardError;

/// Horizontal anchoring of text relative to its `x` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Fill colour, CSS font and alignment for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: &'static str,
    pub font: &'static str,
    pub align: TextAlign,
}

/// A 2D drawing target such as an HTML canvas.
pub trait ChartSurface {
    /// Current `(width, height)` in pixels.
    fn size(&self) -> (f64, f64);

    /// Erase everything.
    fn clear(&mut self);

    /// Stroke a connected line through `points`.
    fn stroke_polyline(&mut self, points: &[(f64, f64)], color: &str, line_width: f64);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);

    /// Draw text with its baseline at `y`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Render`] when the surface rejects the call.
    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        style: TextStyle,
    ) -> Result<(), DashboardError>;
}
