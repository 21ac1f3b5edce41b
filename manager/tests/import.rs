use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;
use town_graph_manager::{ManagerError, Settings, TownGraphManager};

const ROADS: &str = "\
Street_1,3;City_1;City_2
Street_2,7;City_1;City_3
Street_3,9;City_1;City_5
Street_4,2;City_3;City_7
Street_5,4;City_3;City_8
Street_6,6;City_4;City_8
Street_7,7;City_6;City_9
Street_8,4;City_9;City_10
Street_9,2;City_8;City_10
Street_10,5;City_5;City_10
Street_11,3;City_10;City_11
Street_12,8;City_2;City_11
";

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_populate_from_file() {
    let file = write_temp(ROADS);
    let mut m = TownGraphManager::new();
    let summary = m.populate_town_graph(file.path()).unwrap();

    assert_eq!(summary.lines_read, 12);
    assert_eq!(summary.roads_imported, 12);
    assert_eq!(summary.lines_skipped, 0);
    assert_eq!(m.all_towns().len(), 11);
    assert_eq!(m.all_roads().len(), 12);

    let status = m.status();
    assert_eq!(status.status, "loaded");
    assert_eq!(status.source, Some(file.path().display().to_string()));
    assert_eq!(status.town_count, 11);
}

#[test]
fn test_paths_after_import() {
    let file = write_temp(ROADS);
    let mut m = TownGraphManager::new();
    m.populate_town_graph(file.path()).unwrap();

    assert_eq!(
        m.get_path("City_1", "City_11").unwrap(),
        vec![
            "City_1 via Street_1 to City_2 3 mi",
            "City_2 via Street_12 to City_11 8 mi",
        ]
    );
    assert_eq!(
        m.get_path("City_1", "City_10").unwrap(),
        vec![
            "City_1 via Street_2 to City_3 7 mi",
            "City_3 via Street_5 to City_8 4 mi",
            "City_8 via Street_9 to City_10 2 mi",
        ]
    );
}

#[test]
fn test_malformed_lines_skipped() {
    let file = write_temp("header;line\nMain St,4; Alpha ; Beta \n\nno delimiters\nSide,2;Beta;Gamma\n");
    let mut m = TownGraphManager::new();
    let summary = m.populate_town_graph(file.path()).unwrap();

    assert_eq!(summary.lines_read, 5);
    assert_eq!(summary.lines_skipped, 3);
    assert_eq!(m.all_towns(), vec!["Alpha", "Beta", "Gamma"]);
    assert_eq!(m.get_road("Beta", "Alpha"), Some("Main St"));
}

#[test]
fn test_import_respects_max_towns() {
    let file = write_temp(ROADS);
    let settings = Settings {
        max_towns: 10,
        ..Settings::default()
    };
    let mut m = TownGraphManager::with_settings(&settings);
    let err = m.populate_town_graph(file.path()).unwrap_err();
    assert!(matches!(err, ManagerError::TooManyTowns { count: 11, max: 10 }));
    assert_eq!(m.status().status, "empty");
}

#[test]
fn test_missing_file() {
    let mut m = TownGraphManager::new();
    let err = m
        .populate_town_graph(std::path::Path::new("/no/such/roads.txt"))
        .unwrap_err();
    assert!(matches!(err, ManagerError::Io(_)));
}

#[test]
fn test_settings_file() {
    let file = write_temp("max_towns = 42\nlog_filter = \"info\"\n");
    let settings = Settings::load(file.path()).unwrap();
    assert_eq!(settings.max_towns, 42);
    assert_eq!(settings.log_filter, "info");
}
