mod count_chart;
mod header;
mod history_filter;
mod history_table;
mod live_panel;
mod pager;
mod stat_card;
mod status_indicator;

pub use count_chart::CountChart;
pub use header::Header;
pub use history_filter::HistoryFilter;
pub use history_table::HistoryTable;
pub use live_panel::LivePanel;
pub use pager::Pager;
pub use stat_card::StatCard;
pub use status_indicator::StatusIndicator;
