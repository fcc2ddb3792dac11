use std::fmt;

use super::model::{LaunchRecord, LaunchTable};

// ---------------------------------------------------------------------------
// Site selection – the dropdown value
// ---------------------------------------------------------------------------

/// Token the dropdown uses for "no particular site".
pub const ALL_SITES: &str = "ALL";

/// Which launch site the dashboard is focused on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a dropdown value; the `ALL` token selects every site.
    pub fn from_token(token: &str) -> Self {
        if token == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(token.to_string())
        }
    }

    /// The dropdown value, `ALL` for [`SiteSelection::All`].
    pub fn token(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    /// Whether a row belongs to the selection.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.launch_site == *site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ---------------------------------------------------------------------------
// Payload range – the range slider value
// ---------------------------------------------------------------------------

/// Inclusive payload interval in kilograms. `low <= high` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Build a range, swapping the ends if they arrive reversed.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            PayloadRange { low: a, high: b }
        } else {
            PayloadRange { low: b, high: a }
        }
    }

    /// Build a range clamped into `[min, max]`.
    pub fn clamped(a: f64, b: f64, min: f64, max: f64) -> Self {
        Self::new(a.clamp(min, max), b.clamp(min, max))
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Inclusive at both ends.
    pub fn contains(&self, payload: f64) -> bool {
        self.low <= payload && payload <= self.high
    }
}

// ---------------------------------------------------------------------------
// Row filtering
// ---------------------------------------------------------------------------

/// Rows passing both the payload range and the site selection, in table order.
pub fn filtered_records<'a>(
    table: &'a LaunchTable,
    site: &'a SiteSelection,
    range: PayloadRange,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    table
        .records()
        .iter()
        .filter(move |r| range.contains(r.payload_mass_kg))
        .filter(move |r| site.matches(r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;

    fn record(site: &str, payload: f64) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            outcome: Outcome::Success,
            booster_version_category: "FT".to_string(),
            flight_number: 1,
        }
    }

    #[test]
    fn test_site_tokens() {
        assert_eq!(SiteSelection::from_token("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::from_token("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".into())
        );
        assert_eq!(SiteSelection::All.to_string(), "ALL");
        assert_eq!(SiteSelection::Site("CCAFS LC-40".into()).token(), "CCAFS LC-40");
    }

    #[test]
    fn test_range_is_inclusive_and_ordered() {
        let range = PayloadRange::new(5000.0, 1000.0);
        assert_eq!((range.low(), range.high()), (1000.0, 5000.0));
        assert!(range.contains(1000.0));
        assert!(range.contains(5000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(5000.1));
    }

    #[test]
    fn test_range_clamped_to_domain() {
        let range = PayloadRange::clamped(-200.0, 15600.0, 0.0, 10000.0);
        assert_eq!((range.low(), range.high()), (0.0, 10000.0));
    }

    #[test]
    fn test_filtered_records_applies_both_predicates() {
        let table = LaunchTable::from_records(vec![
            record("A", 500.0),
            record("B", 700.0),
            record("A", 2000.0),
            record("A", 900.0),
        ]);
        let site = SiteSelection::Site("A".into());
        let payloads: Vec<f64> = filtered_records(&table, &site, PayloadRange::new(0.0, 1000.0))
            .map(|r| r.payload_mass_kg)
            .collect();
        assert_eq!(payloads, [500.0, 900.0]);
    }
}
