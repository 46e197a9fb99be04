// SPDX-License-Identifier: MPL-2.0

//! Integration tests for configuration and its persistence store

use depthsense::Config;
use depthsense::storage::{ConfigStore, JsonConfigStore};

#[test]
fn test_config_default() {
    let config = Config::default();

    assert!(
        config.haptics_enabled,
        "Haptic feedback should be enabled by default"
    );
    assert!(
        !config.object_detection_enabled,
        "Object detection should be opt-in"
    );
    assert!(
        config.pulse_cooldown_ms > 0,
        "Default cooldown should throttle pulses"
    );
    assert!(config.visualization.max_m > config.visualization.min_m);
}

#[test]
fn test_config_roundtrip_through_store() {
    let dir = std::env::temp_dir().join(format!("depthsense-config-test-{}", std::process::id()));
    let store = JsonConfigStore::new(dir.join("config.json"));

    let mut config = Config::default();
    config.haptics_enabled = false;
    config.pulse_cooldown_ms = 1234;
    config.visualization.grayscale = true;

    store.save(&config).expect("save should succeed");
    let loaded = store.load().expect("load should succeed");
    assert_eq!(loaded, config);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_file_falls_back_to_default() {
    let store = JsonConfigStore::new(
        std::env::temp_dir().join("depthsense-no-such-dir/no-such-config.json"),
    );
    assert!(store.load().is_err());
    assert_eq!(store.load_or_default(), Config::default());
}
