//! Line chart renderer — two running-total polylines and a legend.

use countdash_domain::chart::{ChartGeometry, ChartPoint, PlotArea, chronological_points};
use countdash_domain::error::DashboardError;
use countdash_domain::stats::HistoryRecord;

use crate::ports::{ChartSurface, TextAlign, TextStyle};

pub const TOTAL_IN_COLOR: &str = "#3498db";
pub const TOTAL_OUT_COLOR: &str = "#e74c3c";
pub const LINE_WIDTH: f64 = 2.0;

pub const PLACEHOLDER_TEXT: &str = "No data to display";

const PLACEHOLDER_STYLE: TextStyle = TextStyle {
    color: "#666",
    font: "16px Arial",
    align: TextAlign::Center,
};

const LEGEND_STYLE: TextStyle = TextStyle {
    color: "#333",
    font: "12px Arial",
    align: TextAlign::Left,
};

/// Legend entries: label, swatch colour and horizontal offset from the padding.
const LEGEND: [(&str, &str, f64); 2] = [
    ("Total In", TOTAL_IN_COLOR, 0.0),
    ("Total Out", TOTAL_OUT_COLOR, 100.0),
];

/// The chart's data plus its draw routine.
///
/// Data is replaced wholesale on every history load, never appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineChart {
    points: Vec<ChartPoint>,
}

impl LineChart {
    /// Build a chart from newest-first history records.
    #[must_use]
    pub fn from_history(records: &[HistoryRecord]) -> Self {
        Self {
            points: chronological_points(records),
        }
    }

    /// Replace the plotted data with `records` (newest first).
    pub fn set_history(&mut self, records: &[HistoryRecord]) {
        self.points = chronological_points(records);
    }

    #[must_use]
    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    /// Redraw the whole chart onto `surface`.
    ///
    /// Without points only the placeholder is drawn. When every total is
    /// zero the surface is left cleared, with neither lines nor legend.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Render`] when the surface rejects a text call.
    pub fn draw(&self, surface: &mut impl ChartSurface) -> Result<(), DashboardError> {
        surface.clear();
        let (width, height) = surface.size();
        let area = PlotArea::new(width, height);

        if self.points.is_empty() {
            return surface.fill_text(PLACEHOLDER_TEXT, width / 2.0, height / 2.0, PLACEHOLDER_STYLE);
        }
        let Some(geometry) = ChartGeometry::layout(&self.points, area) else {
            return Ok(());
        };

        surface.stroke_polyline(&geometry.total_in, TOTAL_IN_COLOR, LINE_WIDTH);
        surface.stroke_polyline(&geometry.total_out, TOTAL_OUT_COLOR, LINE_WIDTH);

        for (label, color, offset) in LEGEND {
            let x = area.padding + offset;
            surface.fill_rect(x, 10.0, 20.0, 10.0, color);
            surface.fill_text(label, x + 25.0, 20.0, LEGEND_STYLE)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use countdash_domain::area::AreaId;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        Polyline(Vec<(f64, f64)>, String),
        Rect(f64, f64, String),
        Text(String, f64, f64),
    }

    struct RecordingSurface {
        width: f64,
        height: f64,
        calls: Vec<Call>,
        reject_text: bool,
    }

    impl RecordingSurface {
        fn new(width: f64, height: f64) -> Self {
            Self {
                width,
                height,
                calls: Vec::new(),
                reject_text: false,
            }
        }

        fn polylines(&self) -> Vec<&Vec<(f64, f64)>> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Polyline(points, _) => Some(points),
                    _ => None,
                })
                .collect()
        }
    }

    impl ChartSurface for RecordingSurface {
        fn size(&self) -> (f64, f64) {
            (self.width, self.height)
        }

        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn stroke_polyline(&mut self, points: &[(f64, f64)], color: &str, _line_width: f64) {
            self.calls.push(Call::Polyline(points.to_vec(), color.to_string()));
        }

        fn fill_rect(&mut self, x: f64, y: f64, _width: f64, _height: f64, color: &str) {
            self.calls.push(Call::Rect(x, y, color.to_string()));
        }

        fn fill_text(
            &mut self,
            text: &str,
            x: f64,
            y: f64,
            _style: TextStyle,
        ) -> Result<(), DashboardError> {
            if self.reject_text {
                return Err(DashboardError::Render("text rejected".to_string()));
            }
            self.calls.push(Call::Text(text.to_string(), x, y));
            Ok(())
        }
    }

    fn history(totals: &[(u64, u64)]) -> Vec<HistoryRecord> {
        let area_id = AreaId::new(1).unwrap();
        totals
            .iter()
            .enumerate()
            .map(|(i, &(total_in, total_out))| HistoryRecord {
                timestamp: (Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
                    - chrono::Duration::minutes(i64::try_from(i).unwrap()))
                .into(),
                area_id,
                count_in: 0,
                count_out: 0,
                total_in,
                total_out,
            })
            .collect()
    }

    #[test]
    fn should_draw_only_placeholder_when_empty() {
        let mut surface = RecordingSurface::new(800.0, 400.0);
        LineChart::default().draw(&mut surface).unwrap();

        assert_eq!(
            surface.calls,
            vec![
                Call::Clear,
                Call::Text(PLACEHOLDER_TEXT.to_string(), 400.0, 200.0),
            ]
        );
    }

    #[test]
    fn should_draw_two_lines_inside_padding_and_legend() {
        let mut surface = RecordingSurface::new(800.0, 400.0);
        let chart = LineChart::from_history(&history(&[(50, 20), (30, 10), (0, 0)]));
        chart.draw(&mut surface).unwrap();

        let lines = surface.polylines();
        assert_eq!(lines.len(), 2);
        for line in lines {
            assert_eq!(line.len(), 3);
            assert!(line.iter().all(|&(x, y)| (40.0..=760.0).contains(&x) && (40.0..=360.0).contains(&y)));
        }
        assert!(surface.calls.contains(&Call::Rect(40.0, 10.0, TOTAL_IN_COLOR.to_string())));
        assert!(surface.calls.contains(&Call::Rect(140.0, 10.0, TOTAL_OUT_COLOR.to_string())));
        assert!(surface.calls.contains(&Call::Text("Total In".to_string(), 65.0, 20.0)));
        assert!(surface.calls.contains(&Call::Text("Total Out".to_string(), 165.0, 20.0)));
    }

    #[test]
    fn should_leave_surface_cleared_when_all_totals_are_zero() {
        let mut surface = RecordingSurface::new(800.0, 400.0);
        let chart = LineChart::from_history(&history(&[(0, 0), (0, 0), (0, 0)]));
        chart.draw(&mut surface).unwrap();

        assert_eq!(surface.calls, vec![Call::Clear]);
    }

    #[test]
    fn should_plot_in_chronological_order() {
        let chart = LineChart::from_history(&history(&[(9, 0), (4, 0), (1, 0)]));
        let totals: Vec<u64> = chart.points().iter().map(|p| p.total_in).collect();
        assert_eq!(totals, vec![1, 4, 9]);
    }

    #[test]
    fn should_replace_data_wholesale() {
        let mut chart = LineChart::from_history(&history(&[(9, 0), (4, 0)]));
        chart.set_history(&history(&[(2, 1)]));
        assert_eq!(chart.points().len(), 1);
    }

    #[test]
    fn should_surface_text_rejection_as_render_error() {
        let mut surface = RecordingSurface::new(800.0, 400.0);
        surface.reject_text = true;
        let result = LineChart::default().draw(&mut surface);
        assert!(matches!(result, Err(DashboardError::Render(_))));
    }
}
