use serde::Serialize;

use crate::data::filter::SiteSelection;
use crate::data::model::{LaunchTable, Outcome};

pub const ALL_SITES_TITLE: &str = "Total Successful Launches by Site";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Sum of all slice values.
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Share of the total per slice. All zero when the total is zero.
    pub fn fractions(&self) -> Vec<f64> {
        let total = self.total();
        self.slices
            .iter()
            .map(|s| if total > 0.0 { s.value / total } else { 0.0 })
            .collect()
    }

    /// Index of the slice covering `turn`, the position around the circle
    /// as a fraction of a full turn starting from the first slice's edge.
    pub fn slice_at(&self, turn: f64) -> Option<usize> {
        let turn = turn.rem_euclid(1.0);
        let mut end = 0.0;
        for (i, frac) in self.fractions().into_iter().enumerate() {
            end += frac;
            if frac > 0.0 && turn < end {
                return Some(i);
            }
        }
        None
    }
}

/// Build the pie chart for the selected site.
///
/// * `All` – one slice per site (first-appearance order) sized by its
///   number of successful launches. Sites without a success keep a
///   zero-sized slice.
/// * `Site(s)` – one slice per outcome class present at `s`, sized by the
///   number of launches; labels are the class values `"0"` / `"1"`.
///
/// A site with no rows yields a chart without slices.
pub fn aggregate_outcomes(table: &LaunchTable, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => {
            let slices = table
                .sites()
                .iter()
                .map(|name| PieSlice {
                    label: name.clone(),
                    value: table
                        .records()
                        .iter()
                        .filter(|r| r.launch_site == *name)
                        .map(|r| f64::from(r.outcome.class()))
                        .sum(),
                })
                .collect();

            PieChart {
                title: ALL_SITES_TITLE.to_string(),
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let mut counts = [0usize; 2];
            for rec in table.records().iter().filter(|r| site.matches(r)) {
                counts[usize::from(rec.outcome.class())] += 1;
            }

            let slices = [Outcome::Failure, Outcome::Success]
                .into_iter()
                .zip(counts)
                .filter(|(_, n)| *n > 0)
                .map(|(outcome, n)| PieSlice {
                    label: outcome.to_string(),
                    value: n as f64,
                })
                .collect();

            PieChart {
                title: format!("Success vs Failure for {name}"),
                slices,
            }
        }
    }
}
