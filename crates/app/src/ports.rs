//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod chart_surface;
pub mod clock;
pub mod stats_api;

pub use chart_surface::{ChartSurface, TextAlign, TextStyle};
pub use clock::{Clock, SystemClock};
pub use stats_api::StatsApi;
