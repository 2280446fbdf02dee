//! # countdash-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `StatsApi` — the backend's live, history and health endpoints
//!   - `ChartSurface` — a 2D drawing target
//!   - `Clock` — the source of "now"
//! - Define **use-case services**:
//!   - `LiveStatsService` — load live counts and derive the system status
//!   - `HistoryService` — load filtered history for the table and chart
//!   - `health::probe` — one-shot backend health check
//! - Own the **line chart renderer** and the dashboard **configuration**
//!
//! ## Dependency rule
//! Depends on `countdash-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod chart;
pub mod config;
pub mod ports;
pub mod services;
