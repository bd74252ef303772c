use anyhow::Result;
use lottie_unmark::core::Storage;
use lottie_unmark::{CliConfig, EtlEngine, EtlError, LocalStorage, RemovalReport, WatermarkPipeline};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TARGET: &str = "public/lottie/travel-smart.json";

fn write_target(dir: &Path, content: &str) -> Result<()> {
    let path = dir.join(TARGET);
    fs::create_dir_all(path.parent().unwrap())?;
    fs::write(path, content)?;
    Ok(())
}

fn engine_for(dir: &Path, dry_run: bool) -> EtlEngine<WatermarkPipeline<LocalStorage, CliConfig>> {
    let base_dir = dir.to_string_lossy().into_owned();
    let config = CliConfig {
        base_dir: base_dir.clone(),
        dry_run,
        ..CliConfig::default()
    };
    EtlEngine::new(WatermarkPipeline::new(LocalStorage::new(base_dir), config))
}

#[test]
fn test_end_to_end_removes_watermark() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_target(
        temp_dir.path(),
        r#"{"v":"5.7.4","fr":29.970,"w":512,"h":512,"layers":[{"nm":"A","ind":1},{"nm":"Group Layer 8","ind":2},{"nm":"B","ind":3}],"markers":[]}"#,
    )?;

    let report = engine_for(temp_dir.path(), false).run()?;

    assert_eq!(report.removed(), 1);
    assert_eq!(report.to_string(), "Removed 1 layer(s) named 'Group Layer 8'.");

    let written = fs::read_to_string(temp_dir.path().join(TARGET))?;
    let expected = r#"{
  "v": "5.7.4",
  "fr": 29.970,
  "w": 512,
  "h": 512,
  "layers": [
    {
      "nm": "A",
      "ind": 1
    },
    {
      "nm": "B",
      "ind": 3
    }
  ],
  "markers": []
}"#;
    assert_eq!(written, expected);
    Ok(())
}

#[test]
fn test_second_run_is_a_no_op() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_target(
        temp_dir.path(),
        r#"{"layers":[{"nm":"Group Layer 8"},{"nm":"Logo"}]}"#,
    )?;

    let first = engine_for(temp_dir.path(), false).run()?;
    let after_first = fs::read_to_string(temp_dir.path().join(TARGET))?;
    let second = engine_for(temp_dir.path(), false).run()?;
    let after_second = fs::read_to_string(temp_dir.path().join(TARGET))?;

    assert_eq!(first.removed(), 1);
    assert!(second.nothing_removed());
    assert_eq!(
        second.to_string(),
        "No layer named 'Group Layer 8' found. Nothing removed."
    );
    assert_eq!(after_first, after_second);
    Ok(())
}

#[test]
fn test_missing_file_reports_not_found_and_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let err = engine_for(temp_dir.path(), false).run().unwrap_err();

    match &err {
        EtlError::FileNotFound { path } => assert_eq!(path, TARGET),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
    assert_eq!(err.exit_code(), 1);
    assert!(!temp_dir.path().join("public").exists());
    Ok(())
}

#[test]
fn test_dry_run_leaves_file_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let original = r#"{"layers":[{"nm":"Group Layer 8"}]}"#;
    write_target(temp_dir.path(), original)?;

    let report = engine_for(temp_dir.path(), true).run()?;

    assert_eq!(report.removed(), 1);
    assert_eq!(fs::read_to_string(temp_dir.path().join(TARGET))?, original);
    Ok(())
}

#[test]
fn test_malformed_json_fails_without_writing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let original = r#"{"layers":[{"nm":"Group Layer 8"}"#;
    write_target(temp_dir.path(), original)?;

    let err = engine_for(temp_dir.path(), false).run().unwrap_err();

    assert!(matches!(err, EtlError::SerializationError(_)));
    assert_eq!(fs::read_to_string(temp_dir.path().join(TARGET))?, original);
    Ok(())
}

#[test]
fn test_non_object_layer_fails_without_writing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let original = r#"{"layers":[{"nm":"A"},"Group Layer 8"]}"#;
    write_target(temp_dir.path(), original)?;

    let err = engine_for(temp_dir.path(), false).run().unwrap_err();

    assert!(matches!(err, EtlError::InvalidDocument { .. }));
    assert_eq!(fs::read_to_string(temp_dir.path().join(TARGET))?, original);
    Ok(())
}

/// Reads through to disk but refuses every write.
struct ReadOnlyStorage(LocalStorage);

impl Storage for ReadOnlyStorage {
    fn exists(&self, path: &str) -> bool {
        self.0.exists(path)
    }

    fn read_file(&self, path: &str) -> lottie_unmark::Result<Vec<u8>> {
        self.0.read_file(path)
    }

    fn write_file(&self, _path: &str, _data: &[u8]) -> lottie_unmark::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
    }
}

#[test]
fn test_report_is_emitted_before_a_failed_write() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let original = r#"{"layers":[{"nm":"A"},{"nm":"Group Layer 8"}]}"#;
    write_target(temp_dir.path(), original)?;

    let base_dir = temp_dir.path().to_string_lossy().into_owned();
    let config = CliConfig {
        base_dir: base_dir.clone(),
        ..CliConfig::default()
    };
    let engine = EtlEngine::new(WatermarkPipeline::new(
        ReadOnlyStorage(LocalStorage::new(base_dir)),
        config,
    ));

    let mut reported: Vec<RemovalReport> = Vec::new();
    let err = engine
        .run_with_report(|report| reported.push(report.clone()))
        .unwrap_err();

    assert!(matches!(err, EtlError::IoError(_)));
    assert_eq!(reported.len(), 1);
    assert_eq!(
        reported[0].to_string(),
        "Removed 1 layer(s) named 'Group Layer 8'."
    );
    assert_eq!(fs::read_to_string(temp_dir.path().join(TARGET))?, original);
    Ok(())
}

#[test]
fn test_non_ascii_names_and_trailing_keys_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_target(
        temp_dir.path(),
        r#"{"nm":"Voyage été","layers":[{"nm":"Café ✓","ind":1},{"nm":"Group Layer 8","ind":2}],"assets":[{"id":"図"}],"op":120.50}"#,
    )?;

    let report = engine_for(temp_dir.path(), false).run()?;

    assert_eq!(report.removed(), 1);
    let written = fs::read(temp_dir.path().join(TARGET))?;
    let expected = r#"{
  "nm": "Voyage été",
  "layers": [
    {
      "nm": "Café ✓",
      "ind": 1
    }
  ],
  "assets": [
    {
      "id": "図"
    }
  ],
  "op": 120.50
}"#;
    assert_eq!(written, expected.as_bytes());
    Ok(())
}
