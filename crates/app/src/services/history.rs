//! History service — filtered, paged history feeding both table and chart.

use countdash_domain::error::DashboardError;
use countdash_domain::history::{HistoryForm, HistoryQuery, HistoryTable};

use crate::chart::LineChart;
use crate::ports::{Clock, StatsApi};

/// Everything the history panel renders from one response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryView {
    /// The query that produced this view, kept for paging.
    pub query: HistoryQuery,
    pub table: HistoryTable,
    pub chart: LineChart,
    /// Number of records received.
    pub len: usize,
}

impl HistoryView {
    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.query.page > 1
    }

    /// A full page suggests more records may follow.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.len > 0 && self.len == self.query.limit as usize
    }
}

/// Application service loading history records.
pub struct HistoryService<A, C> {
    api: A,
    clock: C,
    page_size: u32,
}

impl<A: StatsApi, C: Clock> HistoryService<A, C> {
    /// Create a new service backed by the given API. The clock supplies the
    /// offset timestamps are displayed in.
    pub fn new(api: A, clock: C, page_size: u32) -> Self {
        Self {
            api,
            clock,
            page_size,
        }
    }

    /// Validate the filter inputs into a first-page query.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] for malformed inputs.
    pub fn query_from_form(&self, form: &HistoryForm) -> Result<HistoryQuery, DashboardError> {
        Ok(HistoryQuery::from_form(form, self.page_size)?)
    }

    /// Fetch one page and build the table and chart from the same response.
    ///
    /// # Errors
    ///
    /// Returns the [`DashboardError`] of the failed request; it is logged
    /// before being returned.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self, query: HistoryQuery) -> Result<HistoryView, DashboardError> {
        let records = self.api.fetch_history(&query).await.inspect_err(|err| {
            tracing::error!(error = %err, page = query.page, "failed to load history");
        })?;
        tracing::debug!(records = records.len(), page = query.page, "history loaded");

        Ok(HistoryView {
            table: HistoryTable::from_records(&records, self.clock.local_offset()),
            chart: LineChart::from_history(&records),
            len: records.len(),
            query,
        })
    }

    /// Validate the form and load its first page.
    ///
    /// # Errors
    ///
    /// Returns a validation error or the failed request's error.
    #[tracing::instrument(skip(self))]
    pub async fn load_form(&self, form: &HistoryForm) -> Result<HistoryView, DashboardError> {
        let query = self.query_from_form(form).inspect_err(|err| {
            tracing::error!(error = %err, "invalid history filter");
        })?;
        self.load(query).await
    }
}
