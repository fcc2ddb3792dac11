use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Column names of the source table
// ---------------------------------------------------------------------------

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_FLIGHT_NUMBER: &str = "Flight Number";

/// Every column a dataset must carry, in the order errors report them.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    COL_LAUNCH_SITE,
    COL_PAYLOAD_MASS,
    COL_CLASS,
    COL_BOOSTER_CATEGORY,
    COL_FLIGHT_NUMBER,
];

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret a raw `class` cell. Only exact 0 and 1 are accepted.
    pub fn from_class(value: f64) -> Option<Self> {
        if value == 0.0 {
            Some(Outcome::Failure)
        } else if value == 1.0 {
            Some(Outcome::Success)
        } else {
            None
        }
    }

    /// The numeric class: 0 for failure, 1 for success.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
    /// Shown on hover only.
    pub flight_number: i64,
}

// ---------------------------------------------------------------------------
// PayloadBounds – min / max of the payload column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

impl PayloadBounds {
    /// Bounds over a sequence of payloads, `None` when it is empty.
    pub fn from_payloads(payloads: impl IntoIterator<Item = f64>) -> Option<Self> {
        payloads.into_iter().fold(None, |acc, p| match acc {
            None => Some(PayloadBounds { min: p, max: p }),
            Some(b) => Some(PayloadBounds {
                min: b.min.min(p),
                max: b.max.max(p),
            }),
        })
    }
}

// ---------------------------------------------------------------------------
// LaunchTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The loaded dataset. Built once, never mutated afterwards; every filter
/// borrows it and produces new values.
#[derive(Debug, Clone, Default)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    /// Distinct sites in order of first appearance.
    sites: Vec<String>,
    bounds: Option<PayloadBounds>,
}

impl LaunchTable {
    /// Build the table and its derived indices from rows in source order.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut sites = Vec::new();
        for rec in &records {
            if seen.insert(rec.launch_site.as_str()) {
                sites.push(rec.launch_site.clone());
            }
        }
        let bounds = PayloadBounds::from_payloads(records.iter().map(|r| r.payload_mass_kg));

        LaunchTable {
            records,
            sites,
            bounds,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites, first-appearance order.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Distinct booster version categories, first-appearance order.
    pub fn booster_categories(&self) -> Vec<String> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.booster_version_category.as_str()))
            .map(|r| r.booster_version_category.clone())
            .collect()
    }

    /// Min / max payload, `None` for an empty table.
    pub fn payload_bounds(&self) -> Option<PayloadBounds> {
        self.bounds
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
