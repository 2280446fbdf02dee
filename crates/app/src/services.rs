//! Application services (use-cases).

pub mod health;
pub mod history;
pub mod live_stats;

#[cfg(test)]
pub(crate) mod fake_api;
