//! # countdash-domain
//!
//! Pure domain model for the countdash people-counting dashboard.
//!
//! ## Responsibilities
//! - Foundational types: area ids, error conventions, timestamps
//! - Define **live stats**, **history records** and the health probe payload
//! - Derive the **system status** from the latest detection
//! - Build **history queries** and the rows of the history table
//! - Lay out the **chart geometry** for the running-total lines
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod area;
pub mod chart;
pub mod history;
pub mod stats;
pub mod status;
