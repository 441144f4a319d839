//! Synthetic energy dashboard for warehouse operations.
//!
//! The [`metrics`] model samples sector readings, facility benchmarks, and a
//! cumulative twelve-month projection; everything else renders or exports
//! [`snapshot::DashboardSnapshot`]s built from it.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod metrics;
mod report;
pub mod snapshot;
#[cfg(feature = "tui")]
pub mod tui;
