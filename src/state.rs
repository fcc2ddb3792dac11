use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;

use crate::chart::{aggregate_outcomes, filter_for_scatter, PieChart, ScatterChart};
use crate::color::ColorMap;
use crate::config::SliderSpec;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::loader::load_file;
use crate::data::model::LaunchTable;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Owns the control values and the two derived charts. The setters are the
/// only way to change a control, and each one recomputes exactly the charts
/// that depend on it: the site feeds both charts, the payload range only
/// the scatter.
pub struct AppState {
    table: Arc<LaunchTable>,
    dataset_path: PathBuf,
    slider: SliderSpec,

    site: SiteSelection,
    payload_range: PayloadRange,

    pie: PieChart,
    scatter: ScatterChart,
    pie_revision: u64,
    scatter_revision: u64,

    /// Colours per launch site (pie, all sites).
    pub site_colors: ColorMap,
    /// Colours per outcome class label (pie, single site).
    pub outcome_colors: ColorMap,
    /// Colours per booster version category (scatter).
    pub booster_colors: ColorMap,

    /// Text typed into the site dropdown's search box.
    pub site_search: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

/// Both charts as written by "Export charts…".
#[derive(Serialize)]
struct ChartExport<'a> {
    site: &'a str,
    payload_low: f64,
    payload_high: f64,
    pie: &'a PieChart,
    scatter: &'a ScatterChart,
}

impl AppState {
    pub fn new(table: Arc<LaunchTable>, dataset_path: PathBuf, slider: SliderSpec) -> Self {
        let site = SiteSelection::All;
        let payload_range = default_range(&table, &slider);
        let pie = aggregate_outcomes(&table, &site);
        let scatter = filter_for_scatter(&table, &site, payload_range);

        Self {
            site_colors: ColorMap::new(table.sites()),
            outcome_colors: ColorMap::new(&["0", "1"]),
            booster_colors: ColorMap::new(&table.booster_categories()),
            table,
            dataset_path,
            slider,
            site,
            payload_range,
            pie,
            scatter,
            pie_revision: 0,
            scatter_revision: 0,
            site_search: String::new(),
            status_message: None,
        }
    }

    // -- Accessors --

    pub fn table(&self) -> &LaunchTable {
        &self.table
    }

    pub fn dataset_path(&self) -> &Path {
        &self.dataset_path
    }

    pub fn slider(&self) -> &SliderSpec {
        &self.slider
    }

    pub fn site(&self) -> &SiteSelection {
        &self.site
    }

    pub fn payload_range(&self) -> PayloadRange {
        self.payload_range
    }

    pub fn pie(&self) -> &PieChart {
        &self.pie
    }

    pub fn scatter(&self) -> &ScatterChart {
        &self.scatter
    }

    /// Bumped every time the pie is recomputed.
    pub fn pie_revision(&self) -> u64 {
        self.pie_revision
    }

    /// Bumped every time the scatter is recomputed.
    pub fn scatter_revision(&self) -> u64 {
        self.scatter_revision
    }

    /// Dropdown entries: `(label, value)`, "All Sites" first.
    pub fn site_options(&self) -> Vec<(String, SiteSelection)> {
        std::iter::once(("All Sites".to_string(), SiteSelection::All))
            .chain(
                self.table
                    .sites()
                    .iter()
                    .map(|s| (s.clone(), SiteSelection::Site(s.clone()))),
            )
            .collect()
    }

    /// Dropdown entries whose label contains the search text, ignoring case.
    /// The "All Sites" entry always stays.
    pub fn searched_site_options(&self) -> Vec<(String, SiteSelection)> {
        let query = self.site_search.trim().to_lowercase();
        self.site_options()
            .into_iter()
            .filter(|(label, value)| {
                *value == SiteSelection::All
                    || query.is_empty()
                    || label.to_lowercase().contains(&query)
            })
            .collect()
    }

    // -- Control changes --

    /// Change the selected site. Returns whether anything changed.
    pub fn set_site(&mut self, site: SiteSelection) -> bool {
        if site == self.site {
            return false;
        }
        log::debug!("Site selection changed to {site}");
        self.site = site;
        self.recompute_pie();
        self.recompute_scatter();
        true
    }

    /// Change the payload range. Returns whether anything changed.
    pub fn set_payload_range(&mut self, range: PayloadRange) -> bool {
        let range = PayloadRange::clamped(
            range.low(),
            range.high(),
            self.slider.min,
            self.slider.max,
        );
        if range == self.payload_range {
            return false;
        }
        log::debug!(
            "Payload range changed to [{}, {}]",
            range.low(),
            range.high()
        );
        self.payload_range = range;
        self.recompute_scatter();
        true
    }

    /// Swap in a freshly loaded table and reset the controls to their defaults.
    pub fn replace_table(&mut self, table: Arc<LaunchTable>, dataset_path: PathBuf) {
        *self = Self::new(table, dataset_path, self.slider);
    }

    fn recompute_pie(&mut self) {
        self.pie = aggregate_outcomes(&self.table, &self.site);
        self.pie_revision += 1;
        if self.pie.is_empty() {
            log::warn!("No launches for site {}", self.site);
        }
    }

    fn recompute_scatter(&mut self) {
        self.scatter = filter_for_scatter(&self.table, &self.site, self.payload_range);
        self.scatter_revision += 1;
        if self.scatter.is_empty() {
            log::warn!(
                "No launches for site {} with payload in [{}, {}]",
                self.site,
                self.payload_range.low(),
                self.payload_range.high()
            );
        }
    }

    // -- File operations --

    /// Load a replacement dataset. On failure the current table is kept and
    /// the error is shown in the status line.
    pub fn open_dataset(&mut self, path: &Path) {
        match load_file(path) {
            Ok(table) => {
                self.replace_table(Arc::new(table), path.to_path_buf());
            }
            Err(e) => {
                let e = anyhow::Error::new(e);
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Write both current charts as pretty JSON.
    pub fn export_charts(&self, path: &Path) -> anyhow::Result<()> {
        let export = ChartExport {
            site: self.site.token(),
            payload_low: self.payload_range.low(),
            payload_high: self.payload_range.high(),
            pie: &self.pie,
            scatter: &self.scatter,
        };
        let json = serde_json::to_string_pretty(&export).context("serializing charts")?;
        std::fs::write(path, json)
            .with_context(|| format!("writing charts to {}", path.display()))?;
        log::info!("Exported charts to {}", path.display());
        Ok(())
    }
}

/// Initial range: the data's payload bounds, or the whole slider domain for
/// an empty table.
pub fn default_range(table: &LaunchTable, slider: &SliderSpec) -> PayloadRange {
    match table.payload_bounds() {
        Some(b) => PayloadRange::clamped(b.min, b.max, slider.min, slider.max),
        None => PayloadRange::new(slider.min, slider.max),
    }
}
