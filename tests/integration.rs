// SPDX-License-Identifier: MPL-2.0
use iced_vitrine::config::{self, Config, GeneralConfig, MotionConfig, WindowConfig};
use iced_vitrine::i18n::fluent::I18n;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    // Load i18n with initial config
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    // Load i18n with french config
    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_motion_settings_survive_a_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        motion: MotionConfig {
            reveal_enabled: Some(false),
            base_delay_ms: Some(250),
            step_delay_ms: Some(75),
        },
        window: WindowConfig {
            width: Some(1024.0),
            height: Some(768.0),
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert!(!loaded.motion.is_reveal_enabled());
    assert_eq!(loaded.motion.effective_base_delay_ms(), 250);
    assert_eq!(loaded.motion.effective_step_delay_ms(), 75);
    assert_eq!(loaded.window.effective_size(), (1024.0, 768.0));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_corrupt_config_file_is_an_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    std::fs::write(&path, "this is not { toml").expect("Failed to write corrupt file");

    assert!(config::load_from_path(&path).is_err());

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_both_bundled_locales_translate_the_page() {
    // Pin the starting locale so the OS locale cannot leak in.
    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    let mut i18n = I18n::new(None, &config);

    let english = i18n.tr("nav-projects");
    assert!(!english.starts_with("MISSING:"));

    i18n.set_locale("fr".parse().expect("valid locale"));
    let french = i18n.tr("nav-projects");
    assert!(!french.starts_with("MISSING:"));
    assert_ne!(english, french);
}
