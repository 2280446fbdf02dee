//! Chart geometry for the two-series running-total line chart.
//!
//! Pure layout math: turning history records into chronological points and
//! points into canvas coordinates. Drawing happens elsewhere.

use crate::stats::HistoryRecord;

/// Inset between the canvas border and the plotted lines, in pixels.
pub const DEFAULT_PADDING: f64 = 40.0;

/// Running totals at one history snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPoint {
    pub total_in: u64,
    pub total_out: u64,
}

impl From<&HistoryRecord> for ChartPoint {
    fn from(record: &HistoryRecord) -> Self {
        Self {
            total_in: record.total_in,
            total_out: record.total_out,
        }
    }
}

/// Turn newest-first history records into chronological chart points.
#[must_use]
pub fn chronological_points(records: &[HistoryRecord]) -> Vec<ChartPoint> {
    records.iter().rev().map(ChartPoint::from).collect()
}

/// Drawable area of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl PlotArea {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: DEFAULT_PADDING,
        }
    }

    /// Width available to the lines, never negative.
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    /// Height available to the lines, never negative.
    #[must_use]
    pub fn inner_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    /// Top edge of the padded region.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.padding
    }

    /// Bottom edge of the padded region (the zero baseline).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.padding + self.inner_height()
    }
}

/// Both polylines scaled into a [`PlotArea`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    /// Value mapped to the top of the padded region.
    pub max_value: u64,
    pub total_in: Vec<(f64, f64)>,
    pub total_out: Vec<(f64, f64)>,
}

impl ChartGeometry {
    /// Scale `points` into `area`. Returns `None` when there is nothing to
    /// plot: no points, or every total is zero.
    ///
    /// Points are spread evenly left to right; a lone point sits in the
    /// middle.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn layout(points: &[ChartPoint], area: PlotArea) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let max_value = points
            .iter()
            .map(|p| p.total_in.max(p.total_out))
            .max()
            .unwrap_or_default();
        if max_value == 0 {
            return None;
        }
        let scale = max_value as f64;
        let last = points.len() - 1;

        let x_at = |index: usize| {
            if last == 0 {
                area.padding + area.inner_width() / 2.0
            } else {
                area.padding + (index as f64 / last as f64) * area.inner_width()
            }
        };
        let y_at = |value: u64| area.bottom() - (value as f64 / scale) * area.inner_height();

        let total_in = points
            .iter()
            .enumerate()
            .map(|(i, p)| (x_at(i), y_at(p.total_in)))
            .collect();
        let total_out = points
            .iter()
            .enumerate()
            .map(|(i, p)| (x_at(i), y_at(p.total_out)))
            .collect();

        Some(Self {
            max_value,
            total_in,
            total_out,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::area::AreaId;

    fn point(total_in: u64, total_out: u64) -> ChartPoint {
        ChartPoint {
            total_in,
            total_out,
        }
    }

    fn within(area: PlotArea, (x, y): (f64, f64)) -> bool {
        x >= area.padding
            && x <= area.width - area.padding
            && y >= area.top()
            && y <= area.bottom()
    }

    #[test]
    fn should_return_none_for_empty_points() {
        assert!(ChartGeometry::layout(&[], PlotArea::new(800.0, 400.0)).is_none());
    }

    #[test]
    fn should_keep_both_lines_inside_padded_region() {
        let area = PlotArea::new(800.0, 400.0);
        let points = [point(0, 0), point(10, 4), point(25, 30), point(40, 33)];
        let geometry = ChartGeometry::layout(&points, area).unwrap();

        assert_eq!(geometry.max_value, 40);
        assert!(geometry.total_in.iter().all(|&p| within(area, p)));
        assert!(geometry.total_out.iter().all(|&p| within(area, p)));
        assert_eq!(geometry.total_in[0], (40.0, 360.0));
        assert_eq!(geometry.total_in[3], (760.0, 40.0));
    }

    #[test]
    fn should_center_a_single_point() {
        let area = PlotArea::new(200.0, 100.0);
        let geometry = ChartGeometry::layout(&[point(5, 2)], area).unwrap();
        assert_eq!(geometry.total_in, vec![(100.0, 40.0)]);
    }

    #[test]
    fn should_plot_nothing_when_all_zero() {
        let area = PlotArea::new(300.0, 200.0);
        assert!(ChartGeometry::layout(&[point(0, 0), point(0, 0)], area).is_none());
        assert!(ChartGeometry::layout(&[point(0, 1)], area).is_some());
    }

    #[test]
    fn should_not_go_negative_on_tiny_canvas() {
        let area = PlotArea::new(50.0, 50.0);
        assert!(area.inner_width().abs() < f64::EPSILON);
        assert!(area.inner_height().abs() < f64::EPSILON);
    }

    #[test]
    fn should_reverse_records_into_chronological_order() {
        let area_id = AreaId::new(1).unwrap();
        let newest_first: Vec<HistoryRecord> = [(2, 9), (1, 6), (0, 2)]
            .into_iter()
            .map(|(minute, total_in)| HistoryRecord {
                timestamp: Utc.with_ymd_and_hms(2026, 10, 17, 8, minute, 0).unwrap().into(),
                area_id,
                count_in: 0,
                count_out: 0,
                total_in,
                total_out: 0,
            })
            .collect();

        let points = chronological_points(&newest_first);
        let totals: Vec<u64> = points.iter().map(|p| p.total_in).collect();
        assert_eq!(totals, vec![2, 6, 9]);
    }
}
