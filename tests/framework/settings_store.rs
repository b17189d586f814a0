//! Settings store persistence behaviors.

use switchboard::{Settings, Value};

#[test]
fn save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut settings = Settings::new(&path);
    settings.define("source", Value::String("data.json".into()), "Input path");
    settings.define("retries", Value::Int(3), "Attempt count");
    assert!(settings.save(None));

    let mut reloaded = Settings::new(&path);
    assert!(reloaded.load());
    assert_eq!(
        reloaded.get("source"),
        Some(&Value::String("data.json".into()))
    );
    assert_eq!(reloaded.get("retries"), Some(&Value::Int(3)));
    assert_eq!(reloaded.describe("retries"), Some("Attempt count"));
}

#[test]
fn set_persists_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut settings = Settings::new(&path);
    settings.define("limit", Value::Int(10), "Row limit");
    assert!(settings.set("limit", Value::Int(99)));

    let mut reloaded = Settings::new(&path);
    assert!(reloaded.load());
    assert_eq!(reloaded.get("limit"), Some(&Value::Int(99)));
}

#[test]
fn set_on_an_undefined_name_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = Settings::new(dir.path().join("settings.json"));
    assert!(!settings.set("ghost", Value::Int(1)));
    assert!(!dir.path().join("settings.json").exists());
}

#[test]
fn non_json_paths_are_refused_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = Settings::new(dir.path().join("settings.db"));
    settings.define("a", Value::Int(1), "");
    assert!(!settings.save(None));
    assert!(!settings.load());
}

#[test]
fn loading_a_missing_file_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = Settings::new(dir.path().join("never-written.json"));
    assert!(!settings.load());
}
