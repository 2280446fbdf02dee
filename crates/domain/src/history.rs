//! History queries and the rows of the history table.

use chrono::{FixedOffset, NaiveDateTime};

use crate::area::{AreaId, parse_area_filter};
use crate::error::ValidationError;
use crate::stats::HistoryRecord;
use crate::time::{QUERY_DATETIME_FORMAT, parse_datetime_local};

/// Records requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Text of the placeholder row shown for an empty result.
pub const EMPTY_PLACEHOLDER: &str = "No data found";

/// Column headers of the history table.
pub const COLUMNS: [&str; 6] = ["Timestamp", "Area", "Count In", "Count Out", "Total In", "Total Out"];

/// Raw values of the history filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryForm {
    pub start_date: String,
    pub end_date: String,
    pub area: String,
}

/// A validated request for `GET /api/stats/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub area_id: Option<AreaId>,
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            area_id: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl HistoryQuery {
    /// Validate the filter inputs; blank inputs are left out of the query.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a date input is malformed or the
    /// area filter is not a positive integer.
    pub fn from_form(form: &HistoryForm, limit: u32) -> Result<Self, ValidationError> {
        Ok(Self {
            start_date: optional_date(&form.start_date)?,
            end_date: optional_date(&form.end_date)?,
            area_id: parse_area_filter(&form.area)?,
            page: 1,
            limit,
        })
    }

    /// The same filter on another page (clamped to page 1).
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Encode as a URL query string (without the leading `?`).
    ///
    /// Dates use a space between date and time, `page` is only sent past
    /// the first page.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<(&str, String)> = Vec::with_capacity(5);
        if let Some(start) = self.start_date {
            params.push(("start_date", start.format(QUERY_DATETIME_FORMAT).to_string()));
        }
        if let Some(end) = self.end_date {
            params.push(("end_date", end.format(QUERY_DATETIME_FORMAT).to_string()));
        }
        if let Some(area) = self.area_id {
            params.push(("area_id", area.to_string()));
        }
        params.push(("limit", self.limit.to_string()));
        if self.page > 1 {
            params.push(("page", self.page.to_string()));
        }

        params
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn optional_date(input: &str) -> Result<Option<NaiveDateTime>, ValidationError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_datetime_local(input).map(Some)
}

/// One rendered row of the history table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub cells: [String; 6],
}

impl HistoryRow {
    /// Render a record, showing its timestamp in the viewer's offset.
    #[must_use]
    pub fn new(record: &HistoryRecord, local_offset: FixedOffset) -> Self {
        Self {
            cells: [
                record.timestamp.display(local_offset),
                record.area_id.to_string(),
                record.count_in.to_string(),
                record.count_out.to_string(),
                record.total_in.to_string(),
                record.total_out.to_string(),
            ],
        }
    }
}

/// Content of the history table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryTable {
    /// A single row spanning every column.
    Placeholder(&'static str),
    Rows(Vec<HistoryRow>),
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::Placeholder(EMPTY_PLACEHOLDER)
    }
}

impl HistoryTable {
    /// Build the table body, keeping the order the backend returned.
    #[must_use]
    pub fn from_records(records: &[HistoryRecord], local_offset: FixedOffset) -> Self {
        if records.is_empty() {
            return Self::default();
        }
        Self::Rows(
            records
                .iter()
                .map(|record| HistoryRow::new(record, local_offset))
                .collect(),
        )
    }

    /// Number of `<tr>` elements the body renders.
    #[must_use]
    pub fn row_count(&self) -> usize {
        match self {
            Self::Placeholder(_) => 1,
            Self::Rows(rows) => rows.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::time::parse_timestamp;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn record(minute: u32, total_in: u64) -> HistoryRecord {
        HistoryRecord {
            timestamp: Utc.with_ymd_and_hms(2026, 10, 17, 10, minute, 0).unwrap().into(),
            area_id: AreaId::new(2).unwrap(),
            count_in: 1,
            count_out: 0,
            total_in,
            total_out: 3,
        }
    }

    #[test]
    fn should_encode_full_query_with_spaced_dates() {
        let form = HistoryForm {
            start_date: "2026-10-16T09:41".to_string(),
            end_date: "2026-10-17T09:41".to_string(),
            area: "2".to_string(),
        };
        let query = HistoryQuery::from_form(&form, DEFAULT_PAGE_SIZE).unwrap();
        assert_eq!(
            query.to_query_string(),
            "start_date=2026-10-16%2009%3A41%3A00&end_date=2026-10-17%2009%3A41%3A00&area_id=2&limit=100"
        );
    }

    #[test]
    fn should_omit_blank_filters() {
        let query = HistoryQuery::from_form(&HistoryForm::default(), DEFAULT_PAGE_SIZE).unwrap();
        assert_eq!(query.to_query_string(), "limit=100");
    }

    #[test]
    fn should_send_page_only_past_the_first() {
        let query = HistoryQuery::default();
        assert_eq!(query.with_page(0).to_query_string(), "limit=100");
        assert_eq!(query.with_page(3).to_query_string(), "limit=100&page=3");
    }

    #[test]
    fn should_reject_malformed_date_input() {
        let form = HistoryForm {
            start_date: "tomorrow".to_string(),
            ..HistoryForm::default()
        };
        assert_eq!(
            HistoryQuery::from_form(&form, DEFAULT_PAGE_SIZE),
            Err(ValidationError::InvalidDate("tomorrow".to_string()))
        );
    }

    #[test]
    fn should_render_single_placeholder_row_when_empty() {
        let table = HistoryTable::from_records(&[], utc());
        assert_eq!(table, HistoryTable::Placeholder("No data found"));
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn should_keep_received_order_with_all_fields() {
        let records = vec![record(5, 9), record(0, 7)];
        let HistoryTable::Rows(rows) = HistoryTable::from_records(&records, utc()) else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].cells,
            [
                "2026-10-17 10:05:00".to_string(),
                "2".to_string(),
                "1".to_string(),
                "0".to_string(),
                "9".to_string(),
                "3".to_string(),
            ]
        );
        assert_eq!(rows[1].cells[4], "7");
        assert!(rows.iter().all(|row| row.cells.iter().all(|c| !c.is_empty())));
    }

    #[test]
    fn should_show_naive_and_zoned_times_on_the_local_clock() {
        let utc_plus_seven = FixedOffset::east_opt(7 * 3600).unwrap();
        let naive = HistoryRecord {
            timestamp: parse_timestamp("2026-10-17T07:00:00").unwrap(),
            ..record(0, 1)
        };
        let zoned = HistoryRecord {
            timestamp: parse_timestamp("2026-10-17T00:30:00Z").unwrap(),
            ..record(0, 2)
        };

        let HistoryTable::Rows(rows) = HistoryTable::from_records(&[naive, zoned], utc_plus_seven) else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].cells[0], "2026-10-17 07:00:00");
        assert_eq!(rows[1].cells[0], "2026-10-17 07:30:00");
    }
}
