//! Codec registry round-trips through real files.

use std::path::Path;

use switchboard::{CodecRegistry, Error, Value};

fn sample_values() -> Value {
    Value::Array(vec![
        Value::Bool(true),
        Value::Bool(false),
        Value::Int(42),
        Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
        Value::String("abc".into()),
    ])
}

#[test]
fn json_write_then_read_is_structurally_equal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round.json");
    let registry = CodecRegistry::with_builtins();

    let original = sample_values();
    registry.write(&original, &path).unwrap();
    assert_eq!(registry.read(&path).unwrap(), original);
}

#[test]
fn binary_write_then_read_is_structurally_equal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round.pkl");
    let registry = CodecRegistry::with_builtins();

    let original = sample_values();
    registry.write(&original, &path).unwrap();
    assert_eq!(registry.read(&path).unwrap(), original);
}

#[test]
fn unsupported_extension_fails_without_touching_the_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    let registry = CodecRegistry::with_builtins();

    let err = registry.read(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { ref extension } if extension == ".csv"));

    let err = registry.write(&Value::Int(1), &path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
    assert!(!path.exists());
}

#[test]
fn extensionless_path_is_an_input_error() {
    let registry = CodecRegistry::with_builtins();
    let err = registry.read(Path::new("data")).unwrap_err();
    assert!(matches!(err, Error::MissingExtension { .. }));
}

#[test]
fn json_and_binary_codecs_agree_on_content() {
    let dir = tempfile::tempdir().unwrap();
    let registry = CodecRegistry::with_builtins();

    let original = sample_values();
    registry.write(&original, &dir.path().join("a.json")).unwrap();
    registry.write(&original, &dir.path().join("a.pkl")).unwrap();

    assert_eq!(
        registry.read(&dir.path().join("a.json")).unwrap(),
        registry.read(&dir.path().join("a.pkl")).unwrap()
    );
}
