use std::fs;

use engine_logging::{engine_debug, engine_warn, LogDestination};
use log::LevelFilter;
use tempfile::TempDir;

#[test]
fn both_destination_still_writes_the_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("debug.log");

    engine_logging::initialize(LogDestination::Both(path.clone()), LevelFilter::Debug);
    engine_debug!("hop {}: GET {}", 1, "https://a.example/");
    engine_warn!("fetch failed");

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("hop 1: GET https://a.example/"));
    assert!(content.contains("fetch failed"));
}
