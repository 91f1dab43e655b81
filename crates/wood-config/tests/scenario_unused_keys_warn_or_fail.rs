//! Unused-key guard
//!
//! Validates:
//! 1) Unused keys are detected under Warn without error.
//! 2) Unused keys cause failure under Fail.
//! 3) Keys the app reads are never flagged.
//! 4) Unused pointers come back sorted.

use wood_config::{load_layered_yaml_from_strings, report_unused_keys, UnusedKeyPolicy};

const WITH_TYPOS: &str = r#"
shell:
  main_title: "Wood Store"
  viewer_fration: 0.5
pricing:
  factor: 12
"#;

#[test]
fn warn_reports_unused_keys_without_error() {
    let loaded = load_layered_yaml_from_strings(&[WITH_TYPOS]).unwrap();
    let report = report_unused_keys(&loaded.config_json, UnusedKeyPolicy::Warn)
        .expect("warn must not error");

    assert!(!report.is_clean());
    assert_eq!(
        report.unused_leaf_pointers,
        vec![
            "/pricing/factor".to_string(),
            "/shell/viewer_fration".to_string()
        ]
    );
}

#[test]
fn fail_rejects_unused_keys() {
    let loaded = load_layered_yaml_from_strings(&[WITH_TYPOS]).unwrap();
    let err = report_unused_keys(&loaded.config_json, UnusedKeyPolicy::Fail).unwrap_err();
    assert!(err.to_string().contains("CONFIG_UNUSED_KEYS"));
}

#[test]
fn consumed_keys_are_clean() {
    let yaml = r#"
shell:
  main_title: "Timber Yard"
  main_width: 640
  main_height: 480
  viewer_fraction: 0.5
display:
  screen_width: 1280
  screen_height: 800
logging:
  filter: "wood_shell=debug"
"#;
    let loaded = load_layered_yaml_from_strings(&[yaml]).unwrap();
    let report = report_unused_keys(&loaded.config_json, UnusedKeyPolicy::Fail).unwrap();
    assert!(report.is_clean());
}
