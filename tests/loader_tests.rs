use flate2::write::GzEncoder;
use flate2::Compression;
use objpluck::config::{Config, OutputFormat};
use objpluck::file::loader::load_document;
use objpluck::file::writer::render_value;
use objpluck::pluck;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper function to write a fixture file into the temp directory
fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// Helper function to write a gzipped fixture file into the temp directory
fn write_gzipped_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(content.as_bytes())
        .expect("Failed to compress fixture");
    fs::write(&path, encoder.finish().expect("Failed to finish gzip"))
        .expect("Failed to write fixture");
    path
}

fn pluck_str(doc: &serde_yaml::Value, path: &str) -> Option<String> {
    pluck(doc, path)
        .expect("valid pluck call")
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

#[test]
fn test_load_json_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_fixture(
        &temp_dir,
        "users.json",
        r#"{"users": [{"name": "Alice"}, {"name": "Bob"}]}"#,
    );

    let doc = load_document(&path).expect("Failed to load JSON");
    assert_eq!(pluck_str(&doc, "users[1].name").as_deref(), Some("Bob"));
}

#[test]
fn test_load_yaml_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_fixture(
        &temp_dir,
        "config.yaml",
        "server:\n  log.level: debug\n  hosts:\n    - alpha\n    - beta\n",
    );

    let doc = load_document(&path).expect("Failed to load YAML");
    assert_eq!(pluck_str(&doc, "server['log.level']").as_deref(), Some("debug"));
    assert_eq!(pluck_str(&doc, "server.hosts.1").as_deref(), Some("beta"));
}

#[test]
fn test_load_multi_document_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_fixture(
        &temp_dir,
        "stream.yml",
        "---\nkind: Service\n---\nkind: Deployment\n",
    );

    let doc = load_document(&path).expect("Failed to load YAML stream");
    assert_eq!(pluck_str(&doc, "[1].kind").as_deref(), Some("Deployment"));
}

#[test]
fn test_load_gzipped_jsonl() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_gzipped_fixture(
        &temp_dir,
        "events.jsonl.gz",
        "{\"id\": 1, \"kind\": \"open\"}\n\n{\"id\": 2, \"kind\": \"close\"}\n",
    );

    let doc = load_document(&path).expect("Failed to load gzipped JSONL");
    assert_eq!(pluck_str(&doc, "1.kind").as_deref(), Some("close"));
    assert_eq!(pluck(&doc, 2usize).unwrap(), None);
}

#[test]
fn test_load_gzipped_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_gzipped_fixture(&temp_dir, "data.json.gz", r#"{"a": {"b": "c"}}"#);

    let doc = load_document(&path).expect("Failed to load gzipped JSON");
    assert_eq!(pluck_str(&doc, "a.b").as_deref(), Some("c"));
}

#[test]
fn test_load_invalid_json_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_fixture(&temp_dir, "broken.json", "{\"a\": ");
    assert!(load_document(&path).is_err());
}

#[test]
fn test_load_missing_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = load_document(temp_dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}

#[test]
fn test_pluck_and_render_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_fixture(&temp_dir, "doc.yaml", "a:\n  b:\n    x: 1\n    y: [true, null]\n");

    let doc = load_document(&path).unwrap();
    let value = pluck(&doc, "a.b").unwrap().expect("value present");
    let rendered = render_value(value, OutputFormat::Json, false).unwrap();
    assert_eq!(rendered, r#"{"x":1,"y":[true,null]}"#);
}

// ============================================================================
// Config File Tests
// ============================================================================

#[test]
fn test_config_save_and_load_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("config.toml");

    let config = Config {
        output: OutputFormat::Raw,
        pretty_json: false,
        log_level: "objpluck=debug".to_string(),
        missing_exit_code: 4,
    };
    config.save_to(&path).expect("Failed to save config");

    assert_eq!(Config::load_from(&path), config);
}

#[test]
fn test_config_invalid_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_fixture(&temp_dir, "config.toml", "output = 12\n");
    assert_eq!(Config::load_from(&path), Config::default());
}
