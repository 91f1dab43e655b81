//! Config hash stability
//!
//! GREEN when:
//! - the same inputs hash identically across calls
//! - key order inside the YAML does not change the hash
//! - different values produce different hashes
//! - overlays take effect and hash deterministically

use wood_config::{load_layered_yaml, load_layered_yaml_from_strings, AppConfig};

const BASE_YAML: &str = r#"
shell:
  main_title: "Wood Store"
  main_width: 400
  main_height: 300
  viewer_fraction: 0.8
display:
  screen_width: 1920
  screen_height: 1080
"#;

const BASE_YAML_REORDERED: &str = r#"
display:
  screen_height: 1080
  screen_width: 1920
shell:
  viewer_fraction: 0.8
  main_height: 300
  main_width: 400
  main_title: "Wood Store"
"#;

const OVERLAY_YAML: &str = r#"
display:
  screen_width: 2560
  screen_height: 1440
logging:
  filter: "debug"
"#;

#[test]
fn same_input_produces_identical_hash() {
    let a = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    let b = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    assert_eq!(a.config_hash, b.config_hash);
    assert_eq!(a.canonical_json, b.canonical_json);
}

#[test]
fn reordered_keys_produce_same_hash() {
    let original = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    let reordered = load_layered_yaml_from_strings(&[BASE_YAML_REORDERED]).unwrap();
    assert_eq!(
        original.config_hash, reordered.config_hash,
        "reordering keys in YAML must not change the hash"
    );
}

#[test]
fn different_values_produce_different_hash() {
    let a = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    let b = load_layered_yaml_from_strings(&[BASE_YAML, OVERLAY_YAML]).unwrap();
    assert_ne!(a.config_hash, b.config_hash);
}

#[test]
fn overlay_takes_effect_in_typed_config() {
    let loaded = load_layered_yaml_from_strings(&[BASE_YAML, OVERLAY_YAML]).unwrap();
    let cfg = AppConfig::from_loaded(&loaded).unwrap();
    assert_eq!(cfg.display.screen_width, 2560);
    assert_eq!(cfg.display.screen_height, 1440);
    assert_eq!(cfg.logging.filter, "debug");
    assert_eq!(cfg.shell.main_title, "Wood Store", "base value survives overlay");
}

#[test]
fn hash_is_64_hex_chars() {
    let loaded = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    assert_eq!(loaded.config_hash.len(), 64);
    assert!(loaded.config_hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn files_on_disk_load_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.yaml");
    let overlay = dir.path().join("overlay.yaml");
    std::fs::write(&base, BASE_YAML).unwrap();
    std::fs::write(&overlay, OVERLAY_YAML).unwrap();

    let base_s = base.to_string_lossy().to_string();
    let overlay_s = overlay.to_string_lossy().to_string();
    let from_disk = load_layered_yaml(&[base_s.as_str(), overlay_s.as_str()]).unwrap();
    let from_str = load_layered_yaml_from_strings(&[BASE_YAML, OVERLAY_YAML]).unwrap();
    assert_eq!(from_disk.config_hash, from_str.config_hash);
}

#[test]
fn missing_file_is_an_error_naming_the_path() {
    let err = load_layered_yaml(&["/definitely/not/here.yaml"]).unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.yaml"));
}
