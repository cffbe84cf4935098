// SPDX-License-Identifier: MPL-2.0
use iced_compare::config::{self, Config, MAX_SLIDER_HEIGHT};
use iced_compare::domain::ui::DividerPercent;
use iced_compare::i18n::fluent::I18n;
use iced_compare::media;
use iced_compare::ui::comparison::{LayerStatus, Message, Side, SliderConfig, State};
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn write_png(path: &std::path::Path, width: u32, height: u32) {
    let image = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([200, 40, 40, 255]));
    image.save(path).expect("failed to write png");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("label-before"), "Before");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn hand_written_settings_are_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        r#"
[slider]
height = 99999.0
auto_demo = false

[auto_demo]
step_percent = 500.0
tick_ms = 1
visibility_threshold = 0.5
"#,
    )
    .expect("Failed to write settings");

    let config = config::load_from_path(&path).expect("settings should parse");
    assert_eq!(config.slider_height(), MAX_SLIDER_HEIGHT);
    assert!(!config.auto_demo_enabled());

    let timing = config.demo_timing();
    assert_eq!(timing.step_percent(), 25.0);
    assert_eq!(timing.tick(), Duration::from_millis(10));
    assert!(!config.visibility_threshold().is_met_by(0.49));
    assert!(config.visibility_threshold().is_met_by(0.5));
}

#[test]
fn decoded_layers_reach_the_widget() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let before = dir.path().join("before.png");
    let after = dir.path().join("after.png");
    write_png(&before, 64, 32);
    write_png(&after, 32, 32);

    let (mut state, _task) = State::new(SliderConfig::new(&before, &after));
    let mount = state.mount_id();

    for (side, path) in [(Side::Before, &before), (Side::After, &after)] {
        state.update(Message::ImageLoaded {
            mount,
            side,
            result: media::load_image(path),
        });
    }

    match state.layer(Side::Before) {
        LayerStatus::Ready(image) => assert_eq!((image.width, image.height), (64, 32)),
        other => panic!("before layer not ready: {other:?}"),
    }
    assert!(matches!(state.layer(Side::After), LayerStatus::Ready(_)));
}

#[test]
fn missing_image_marks_only_that_layer_failed() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let before = dir.path().join("before.png");
    let after = dir.path().join("does-not-exist.png");
    write_png(&before, 8, 8);

    let (mut state, _task) = State::new(SliderConfig::new(&before, &after));
    let mount = state.mount_id();
    state.update(Message::ImageLoaded {
        mount,
        side: Side::Before,
        result: media::load_image(&before),
    });
    state.update(Message::ImageLoaded {
        mount,
        side: Side::After,
        result: media::load_image(&after),
    });

    assert!(matches!(state.layer(Side::Before), LayerStatus::Ready(_)));
    assert!(matches!(state.layer(Side::After), LayerStatus::Failed(_)));

    // The divider keeps working with a failed layer.
    state.update(Message::PointerPressed { x: 30.0, width: 100.0 });
    assert_eq!(state.position().value(), 30.0);
}

#[test]
fn full_reveal_animation_runs_once() {
    let (mut state, _task) = State::new(SliderConfig::new("a.png", "b.png"));
    state.update(Message::VisibilityChanged(0.5));

    let mut now = Instant::now();
    let mut peak = DividerPercent::MIN;
    for _ in 0..500 {
        now += Duration::from_millis(30);
        state.update(Message::Tick(now));
        if state.position() > peak {
            peak = state.position();
        }
    }

    assert_eq!(peak, DividerPercent::MAX);
    assert_eq!(state.position(), DividerPercent::CENTER);
    assert!(state.demo().has_played());
    assert!(!state.demo().is_running());

    state.update(Message::VisibilityChanged(0.0));
    state.update(Message::VisibilityChanged(1.0));
    assert!(!state.demo().is_running());
}
