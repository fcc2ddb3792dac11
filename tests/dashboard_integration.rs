// Integration tests for the load → select → chart workflow
//
// 1. Write a launch CSV shaped like the published dataset
// 2. Load it and build the dashboard state
// 3. Drive the controls and check both charts follow

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use spacex_dash::config::SliderSpec;
use spacex_dash::data::loader::load_file;
use spacex_dash::state::AppState;
use spacex_dash::{DatasetError, PayloadRange, SiteSelection};

const LAUNCHES_CSV: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,4,CCAFS LC-40,0,500.0,F9 v1.0  B0006,v1.0
4,5,CCAFS LC-40,0,677.0,F9 v1.0  B0007,v1.0
5,6,VAFB SLC-4E,0,500.0,F9 v1.1B1003,v1.1
6,7,CCAFS LC-40,1,3170.0,F9 v1.1,v1.1
7,8,CCAFS LC-40,0,3325.0,F9 v1.1,v1.1
8,9,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
9,10,KSC LC-39A,1,5600.0,F9 FT B1030,FT
10,11,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT
11,12,CCAFS SLC-40,1,3669.0,F9 B4 B1041.2,B4
";

fn write_dataset(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("spacex_launch_dash.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn load_state(dir: &tempfile::TempDir) -> AppState {
    let path = write_dataset(dir, LAUNCHES_CSV);
    let table = load_file(&path).unwrap();
    AppState::new(Arc::new(table), path, SliderSpec::default())
}

#[test]
fn test_startup_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let state = load_state(&dir);

    assert_eq!(state.table().len(), 12);
    assert_eq!(
        state.table().sites(),
        ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
    );
    assert_eq!(state.payload_range(), PayloadRange::new(0.0, 9600.0));

    let pie = state.pie();
    assert_eq!(pie.title, "Total Successful Launches by Site");
    let values: Vec<f64> = pie.slices.iter().map(|s| s.value).collect();
    assert_eq!(values, [1.0, 1.0, 2.0, 1.0]);

    let scatter = state.scatter();
    assert_eq!(scatter.title, "Payload vs. Outcome for ALL");
    assert_eq!(scatter.point_count(), 12);
    let categories: Vec<&str> = scatter.series.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(categories, ["v1.0", "v1.1", "FT", "B4"]);
}

#[test]
fn test_selecting_a_site() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = load_state(&dir);

    state.set_site(SiteSelection::from_token("CCAFS LC-40"));

    let pie = state.pie();
    assert_eq!(pie.title, "Success vs Failure for CCAFS LC-40");
    let slices: Vec<(&str, f64)> = pie.slices.iter().map(|s| (s.label.as_str(), s.value)).collect();
    assert_eq!(slices, [("0", 6.0), ("1", 1.0)]);

    assert_eq!(state.scatter().point_count(), 7);

    state.set_payload_range(PayloadRange::new(1000.0, 4000.0));
    let flights: Vec<i64> = state
        .scatter()
        .points()
        .map(|(_, p)| p.flight_number)
        .collect();
    assert_eq!(flights, [7, 8]);
    // The pie does not depend on the payload range.
    assert_eq!(state.pie_revision(), 1);
}

#[test]
fn test_range_excluding_everything() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = load_state(&dir);

    state.set_payload_range(PayloadRange::new(9700.0, 10000.0));
    assert!(state.scatter().is_empty());
    assert_eq!(state.pie().slices.len(), 4);
}

#[test]
fn test_reopen_resets_controls() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = load_state(&dir);
    state.set_site(SiteSelection::from_token("KSC LC-39A"));

    let other = dir.path().join("other.csv");
    std::fs::write(
        &other,
        "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category\n\
         1,KSC LC-39A,1,4000,B5\n",
    )
    .unwrap();
    state.open_dataset(&other);

    assert_eq!(state.site(), &SiteSelection::All);
    assert_eq!(state.table().len(), 1);
    assert_eq!(state.payload_range(), PayloadRange::new(4000.0, 4000.0));
    assert!(state.status_message.is_none());
}

#[test]
fn test_missing_column_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(
        &dir,
        "Flight Number,Launch Site,Payload Mass (kg)\n1,CCAFS LC-40,0.0\n",
    );

    let err = load_file(&path).unwrap_err();
    assert!(matches!(err, DatasetError::MissingColumns(_)));
    assert_eq!(
        err.to_string(),
        "dataset is missing required column(s): class, Booster Version Category"
    );
}
