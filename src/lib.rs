// Library interface for spacex-dash
// The binary and the integration tests both build on these modules.

pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;

// Re-export commonly used types
pub use chart::{aggregate_outcomes, filter_for_scatter, PieChart, ScatterChart};
pub use data::{DatasetError, LaunchRecord, LaunchTable, Outcome, PayloadRange, SiteSelection};
