//! Time-series chart screens for Iced with calendar-aligned axis ticks.
//!
//! - Tick generation that aligns to whole hours or whole days in UTC
//! - Per-domain tick sets, so a zoomed chart gets its own ticks and labels
//! - Four demo screens: a zoomable area chart, duration marks, and two ways
//!   of scrubbing through stacked charts
//!
//! Quick start:
//!
//! ```no_run
//! use time_charts::{Granularity, TimeAxis, TimeChartBuilder, TimeDomain};
//! use iced_plot::{LineStyle, Series};
//!
//! let domain = TimeDomain::from_millis(1_588_204_800_000, 1_588_291_199_000).unwrap();
//! let axis = TimeAxis::new(domain, Granularity::Hours).unwrap();
//!
//! TimeChartBuilder::new()
//!     .with_axis(axis)
//!     .add_series(Series::line_only(vec![[1_588_204_800_000.0, 1.0]], LineStyle::Solid))
//!     .build()
//!     .unwrap();
//! ```
//!
//! See `demos/` for the screens running as applications.
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod scale;
pub mod screens;
pub mod state;
pub mod ticks;

pub use chart::{TimeAxis, TimeChartBuilder};
pub use config::Config;
pub use data::SampleData;
pub use error::{Error, Result};
pub use format::LabelFormat;
pub use state::{HoverFocus, ZoomState};
pub use ticks::{Granularity, TimeDomain, ticks_for_domain, ticks_for_millis};
