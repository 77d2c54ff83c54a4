//! State file persistence through the configured data directory.

use chrono::NaiveDate;
use tempfile::TempDir;

use shiftplan::config::Config;
use shiftplan::{apply_range, group_into_blocks, Birthday, EventAnnotation, PlannerState};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Helper to create a test configuration.
fn create_test_config(data_dir: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.storage.data_dir = data_dir.to_string_lossy().to_string();
    config.calendar.year = 2025;
    config
}

#[test]
fn test_state_survives_restart() {
    let dir = TempDir::new().unwrap();
    let config = create_test_config(dir.path());
    let path = config.state_path();

    let mut state = PlannerState::load(&path).unwrap();
    assert!(state.events.is_empty());

    apply_range(
        &mut state.events,
        date(2025, 3, 6),
        date(2025, 3, 9),
        config.calendar.resolve_anchor(),
    )
    .unwrap();
    state
        .events
        .upsert(date(2025, 4, 1), EventAnnotation::new().with_colleague("Mia"));
    state.birthdays.save(Birthday::new(6, 14, "Paul").unwrap());
    state.birthdays.save(Birthday::new(6, 14, "Pauline").unwrap());
    state.save(&path).unwrap();

    let reloaded = PlannerState::load(&path).unwrap();
    assert_eq!(reloaded, state);
    assert_eq!(group_into_blocks(&reloaded.events, 2025).len(), 1);
    assert_eq!(reloaded.birthdays.len(), 1);
    assert_eq!(reloaded.birthdays.find(6, 14).unwrap().name, "Pauline");
}

#[test]
fn test_config_file_on_disk() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("shiftplan.toml");
    std::fs::write(
        &config_path,
        format!(
            "[calendar]\ngroup = \"4\"\n\n[storage]\ndata_dir = \"{}\"\n",
            dir.path().join("data").display()
        ),
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();
    assert_eq!(config.calendar.resolve_anchor(), Some(date(2025, 1, 9)));
    assert_eq!(config.state_path(), dir.path().join("data/state.json"));
}

#[test]
fn test_missing_config_file_is_error() {
    let dir = TempDir::new().unwrap();
    assert!(Config::from_file(dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_camel_case_field_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(
        &path,
        r#"{
            "events": {
                "2025-03-06": {"note": "", "hasVacation": true, "colleagues": ["Ana"], "isAfz": false, "isPersonalVacation": true}
            },
            "birthdays": []
        }"#,
    )
    .unwrap();

    let state = PlannerState::load(&path).unwrap();
    let entry = state.events.get(date(2025, 3, 6)).unwrap();
    assert!(entry.colleague_vacation);
    assert!(entry.personal_vacation);
    assert_eq!(entry.colleagues, ["Ana"]);
}
