//! Key/value settings store with JSON persistence.
//!
//! Each setting is a named value with a human-readable description. The
//! store persists itself as a JSON document mapping every name to the
//! two-element array `[value, description]`. Persistence is deliberately
//! forgiving: `save` and `load` report failure with `false` instead of
//! erroring, so a missing or mis-suffixed settings file never takes the
//! shell down.

use std::fs;
use std::path::{Path, PathBuf};

use switchboard_core::Value;

/// Named values with descriptions, persisted beside the shell.
#[derive(Debug)]
pub struct Settings {
    source: PathBuf,
    tags: Vec<(String, Value, String)>,
}

impl Settings {
    /// Create an empty store backed by `source`.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Settings {
            source: source.into(),
            tags: Vec::new(),
        }
    }

    /// Define a setting, replacing any previous definition. Does not
    /// persist; call [`Settings::save`] once the defaults are in place.
    pub fn define(&mut self, name: &str, value: Value, description: &str) {
        if let Some(slot) = self.tags.iter_mut().find(|(n, _, _)| n == name) {
            slot.1 = value;
            slot.2 = description.to_string();
        } else {
            self.tags
                .push((name.to_string(), value, description.to_string()));
        }
    }

    /// The value of a setting, if defined.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.tags
            .iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, v, _)| v)
    }

    /// The description of a setting, if defined.
    pub fn describe(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, _, d)| d.as_str())
    }

    /// Change the value of an existing setting and persist immediately.
    ///
    /// Returns `false` when the name was never defined; defining new
    /// settings goes through [`Settings::define`].
    pub fn set(&mut self, name: &str, value: Value) -> bool {
        let Some(slot) = self.tags.iter_mut().find(|(n, _, _)| n == name) else {
            return false;
        };
        slot.1 = value;
        self.save(None);
        true
    }

    /// Persist the store as JSON, to `target` or the backing path.
    ///
    /// Returns `false` when the path does not end in `.json` or the write
    /// fails.
    pub fn save(&self, target: Option<&Path>) -> bool {
        let target = target.unwrap_or(&self.source);
        if !is_json_path(target) {
            return false;
        }
        let mut doc = serde_json::Map::new();
        for (name, value, description) in &self.tags {
            doc.insert(
                name.clone(),
                serde_json::Value::Array(vec![
                    serde_json::Value::from(value),
                    serde_json::Value::String(description.clone()),
                ]),
            );
        }
        match serde_json::to_string_pretty(&serde_json::Value::Object(doc)) {
            Ok(text) => match fs::write(target, text) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(path = %target.display(), error = %e, "settings save failed");
                    false
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "settings save failed");
                false
            }
        }
    }

    /// Replace the store's contents from the backing path.
    ///
    /// Returns `false` when the path does not end in `.json`, does not
    /// exist, or does not hold a `name → [value, description]` document.
    pub fn load(&mut self) -> bool {
        if !is_json_path(&self.source) || !self.source.is_file() {
            return false;
        }
        let text = match fs::read_to_string(&self.source) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %self.source.display(), error = %e, "settings load failed");
                return false;
            }
        };
        let doc: serde_json::Value = match serde_json::from_str(&text) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(path = %self.source.display(), error = %e, "settings load failed");
                return false;
            }
        };
        let serde_json::Value::Object(map) = doc else {
            return false;
        };
        let mut tags = Vec::with_capacity(map.len());
        for (name, entry) in map {
            let serde_json::Value::Array(pair) = entry else {
                return false;
            };
            let [value, serde_json::Value::String(description)] = pair.as_slice() else {
                return false;
            };
            tags.push((name, Value::from(value.clone()), description.clone()));
        }
        self.tags = tags;
        true
    }

    /// Iterate `(name, value, description)` in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value, &str)> {
        self.tags
            .iter()
            .map(|(n, v, d)| (n.as_str(), v, d.as_str()))
    }

    /// Number of defined settings.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether no settings are defined.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

fn is_json_path(path: &Path) -> bool {
    path.extension().map(|e| e == "json").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_describe_read_definitions() {
        let mut settings = Settings::new("settings.json");
        settings.define("source", Value::String("data.json".into()), "Input path");
        assert_eq!(
            settings.get("source"),
            Some(&Value::String("data.json".into()))
        );
        assert_eq!(settings.describe("source"), Some("Input path"));
        assert_eq!(settings.get("missing"), None);
        assert_eq!(settings.describe("missing"), None);
    }

    #[test]
    fn set_rejects_undefined_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::new(dir.path().join("settings.json"));
        assert!(!settings.set("ghost", Value::Int(1)));
    }

    #[test]
    fn set_updates_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings::new(&path);
        settings.define("limit", Value::Int(10), "Row limit");
        assert!(settings.set("limit", Value::Int(25)));
        assert!(path.is_file());

        let mut reloaded = Settings::new(&path);
        assert!(reloaded.load());
        assert_eq!(reloaded.get("limit"), Some(&Value::Int(25)));
        assert_eq!(reloaded.describe("limit"), Some("Row limit"));
    }

    #[test]
    fn save_requires_a_json_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::new(dir.path().join("settings.toml"));
        assert!(!settings.save(None));
        assert!(!settings.save(Some(&dir.path().join("other.txt"))));
        assert!(settings.save(Some(&dir.path().join("other.json"))));
    }

    #[test]
    fn load_requires_an_existing_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::new(dir.path().join("absent.json"));
        assert!(!settings.load());

        let mut settings = Settings::new(dir.path().join("settings.yaml"));
        assert!(!settings.load());
    }

    #[test]
    fn load_rejects_documents_of_the_wrong_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"name": "just a value"}"#).unwrap();
        let mut settings = Settings::new(&path);
        assert!(!settings.load());
    }

    #[test]
    fn persists_as_name_to_value_description_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = Settings::new(&path);
        settings.define("flag", Value::Bool(true), "A switch");
        assert!(settings.save(None));

        let doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["flag"][0], serde_json::Value::Bool(true));
        assert_eq!(doc["flag"][1], serde_json::Value::String("A switch".into()));
    }

    #[test]
    fn definition_order_is_stable() {
        let mut settings = Settings::new("settings.json");
        for name in ["zeta", "alpha", "mid"] {
            settings.define(name, Value::Int(0), "");
        }
        let names: Vec<_> = settings.iter().map(|(n, _, _)| n).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }
}
