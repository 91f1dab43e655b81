//! Scenario: window sizes follow the layered config
//!
//! The order viewer takes `shell.viewer_fraction` of the configured screen
//! on both axes (truncated); the main window uses `shell.main_*` verbatim.

use wood_config::{load_layered_yaml_from_strings, AppConfig};
use wood_shell::{AppShell, Geometry};

fn shell_from(yaml: &str) -> AppShell {
    let loaded = load_layered_yaml_from_strings(&[yaml]).unwrap();
    AppShell::new(AppConfig::from_loaded(&loaded).unwrap())
}

#[test]
fn defaults_give_eighty_percent_of_1080p() {
    let shell = shell_from("{}");
    assert_eq!(shell.viewer_geometry(), Geometry::new(1536, 864));
    assert_eq!(shell.main_window().geometry, Geometry::new(400, 300));
}

#[test]
fn configured_screen_and_fraction() {
    let shell = shell_from(
        r#"
shell:
  viewer_fraction: 0.5
display:
  screen_width: 1366
  screen_height: 768
"#,
    );
    assert_eq!(shell.viewer_geometry(), Geometry::new(683, 384));
}

#[test]
fn main_window_title_and_size() {
    let shell = shell_from(
        r#"
shell:
  main_title: "Timber Yard"
  main_width: 640
  main_height: 480
"#,
    );
    let w = shell.main_window();
    assert_eq!(w.title, "Timber Yard");
    assert_eq!(w.geometry.to_string(), "640x480");
}
