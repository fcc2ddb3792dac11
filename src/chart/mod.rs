/// Chart specifications derived from the launch table.
///
/// Both derivations are pure functions of `(&LaunchTable, selection)`:
/// the UI calls them whenever their inputs change and renders whatever
/// they return.

pub mod pie;
pub mod scatter;

pub use pie::{aggregate_outcomes, PieChart, PieSlice};
pub use scatter::{filter_for_scatter, ScatterChart, ScatterPoint, ScatterSeries};
