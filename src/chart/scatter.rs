use serde::Serialize;

use crate::data::filter::{filtered_records, PayloadRange, SiteSelection};
use crate::data::model::LaunchTable;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// Payload mass in kg.
    pub x: f64,
    /// Outcome class, 0 or 1.
    pub y: f64,
    pub flight_number: i64,
}

/// Points sharing one booster version category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub category: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// Every point tagged with its category, series by series.
    pub fn points(&self) -> impl Iterator<Item = (&str, &ScatterPoint)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(move |p| (s.category.as_str(), p)))
    }

    /// Point of `category` closest to `(x, y)`, distances scaled per axis by
    /// `(x_scale, y_scale)` so that payload kilograms and classes compare.
    pub fn nearest_point(
        &self,
        category: &str,
        x: f64,
        y: f64,
        x_scale: f64,
        y_scale: f64,
    ) -> Option<&ScatterPoint> {
        let series = self.series.iter().find(|s| s.category == category)?;
        let dist = |p: &ScatterPoint| {
            let dx = (p.x - x) / x_scale;
            let dy = (p.y - y) / y_scale;
            dx * dx + dy * dy
        };
        series
            .points
            .iter()
            .min_by(|a, b| dist(*a).total_cmp(&dist(*b)))
    }
}

/// Build the payload-vs-outcome scatter chart.
///
/// Keeps rows whose payload lies in `range` (inclusive) and, unless the
/// selection is `All`, rows of the selected site. Points are grouped by
/// booster version category in first-appearance order. The title echoes the
/// selection token verbatim, `ALL` included.
pub fn filter_for_scatter(
    table: &LaunchTable,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let mut series: Vec<ScatterSeries> = Vec::new();

    for rec in filtered_records(table, site, range) {
        let point = ScatterPoint {
            x: rec.payload_mass_kg,
            y: f64::from(rec.outcome.class()),
            flight_number: rec.flight_number,
        };
        match series
            .iter()
            .position(|s| s.category == rec.booster_version_category)
        {
            Some(i) => series[i].points.push(point),
            None => series.push(ScatterSeries {
                category: rec.booster_version_category.clone(),
                points: vec![point],
            }),
        }
    }

    ScatterChart {
        title: format!("Payload vs. Outcome for {}", site.token()),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn record(site: &str, payload: f64, outcome: Outcome, booster: &str, flight: i64) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            outcome,
            booster_version_category: booster.to_string(),
            flight_number: flight,
        }
    }

    fn sample_table() -> LaunchTable {
        LaunchTable::from_records(vec![
            record("siteA", 500.0, Outcome::Success, "v1", 1),
            record("siteA", 1500.0, Outcome::Failure, "v2", 2),
            record("siteB", 800.0, Outcome::Success, "v1", 3),
        ])
    }

    #[test]
    fn test_all_sites_range_filter() {
        let chart = filter_for_scatter(
            &sample_table(),
            &SiteSelection::All,
            PayloadRange::new(0.0, 1000.0),
        );
        assert_eq!(chart.title, "Payload vs. Outcome for ALL");
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].category, "v1");
        let flights: Vec<i64> = chart.points().map(|(_, p)| p.flight_number).collect();
        assert_eq!(flights, [1, 3]);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let chart = filter_for_scatter(
            &sample_table(),
            &SiteSelection::All,
            PayloadRange::new(500.0, 1500.0),
        );
        assert_eq!(chart.point_count(), 3);
    }

    #[test]
    fn test_site_filter_groups_by_booster() {
        let chart = filter_for_scatter(
            &sample_table(),
            &SiteSelection::Site("siteA".into()),
            PayloadRange::new(0.0, 10000.0),
        );
        assert_eq!(chart.title, "Payload vs. Outcome for siteA");
        let categories: Vec<&str> = chart.series.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, ["v1", "v2"]);
        assert_eq!(
            chart.series[1].points,
            vec![ScatterPoint {
                x: 1500.0,
                y: 0.0,
                flight_number: 2
            }]
        );
    }

    #[test]
    fn test_empty_selection_gives_empty_chart() {
        let chart = filter_for_scatter(
            &sample_table(),
            &SiteSelection::All,
            PayloadRange::new(5000.0, 6000.0),
        );
        assert!(chart.is_empty());
        assert_eq!(chart.point_count(), 0);
    }

    #[test]
    fn test_unknown_site_gives_empty_chart() {
        let chart = filter_for_scatter(
            &sample_table(),
            &SiteSelection::Site("nowhere".into()),
            PayloadRange::new(0.0, 10000.0),
        );
        assert!(chart.is_empty());
        assert_eq!(chart.title, "Payload vs. Outcome for nowhere");
    }

    #[test]
    fn test_empty_table_gives_empty_chart() {
        let table = LaunchTable::default();
        for site in [SiteSelection::All, SiteSelection::Site("siteA".into())] {
            let chart = filter_for_scatter(&table, &site, PayloadRange::new(0.0, 10000.0));
            assert!(chart.is_empty());
            assert_eq!(chart.point_count(), 0);
        }
    }

    #[test]
    fn test_nearest_point() {
        let chart = filter_for_scatter(
            &sample_table(),
            &SiteSelection::All,
            PayloadRange::new(0.0, 10000.0),
        );
        let p = chart.nearest_point("v1", 780.0, 0.9, 10000.0, 1.0).unwrap();
        assert_eq!(p.flight_number, 3);
        assert!(chart.nearest_point("B5", 780.0, 0.9, 10000.0, 1.0).is_none());
    }
}
