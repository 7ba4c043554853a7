use super::*;
use crate::scene::model::LayerRole;
use crate::style::window::GlassIntensity;

#[test]
fn minimal_config_uses_defaults() {
    let cfg = ChromeConfig::from_json_str(
        r##"{ "content": { "kind": "solid", "width": 320, "height": 200, "color": "#336699" } }"##,
    )
    .unwrap();
    assert_eq!(cfg.size, WindowSize::FitContent);
    assert_eq!(cfg.style, WindowStyle::TitleBar);
    assert_eq!(cfg.background, BackgroundStyle::SystemDefault);
    assert!(cfg.traffic_lights);
    assert_eq!(cfg.ambient, Appearance::Light);
    assert_eq!(cfg.wallpaper, WallpaperConfig::default());
    assert!(cfg.custom_wallpaper.is_none());
}

#[test]
fn full_config_round_trips_into_a_chrome() {
    let cfg = ChromeConfig::from_json_str(
        r##"{
            "size": { "fixed": { "width": 500, "height": 350 } },
            "style": "tool_bar",
            "background": { "glass": "regular" },
            "traffic_lights": false,
            "title": "Preview",
            "wallpaper": { "style": "sunset", "appearance": "dark" },
            "ambient": "dark",
            "content": { "kind": "solid", "width": 10, "height": 10, "color": "#ff0000" }
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.background, BackgroundStyle::Glass(GlassIntensity::Regular));

    let chrome = cfg.clone().into_chrome(".").unwrap();
    let geo = chrome.geometry();
    assert_eq!(geo.window.size(), crate::foundation::core::Size::new(500.0, 350.0));
    assert_eq!(geo.corner_radius, 26.0);

    let scene = chrome.compose(cfg.ambient);
    assert!(scene.find(LayerRole::TrafficLights).is_none());
    assert!(scene.find(LayerRole::Controls).is_some());
}

#[test]
fn unknown_fields_are_rejected() {
    let err = ChromeConfig::from_json_str(
        r##"{ "content": { "kind": "solid", "width": 1, "height": 1, "color": "#000000" }, "colour": 1 }"##,
    )
    .unwrap_err();
    assert!(matches!(err, ChromeError::Serde(_)));
}

#[test]
fn bad_colors_are_rejected() {
    assert!(
        ChromeConfig::from_json_str(
            r##"{ "content": { "kind": "solid", "width": 1, "height": 1, "color": "blue" } }"##,
        )
        .is_err()
    );
}

#[test]
fn missing_image_is_a_config_error() {
    let cfg = ChromeConfig::from_json_str(
        r##"{ "content": { "kind": "image", "path": "missing.png" } }"##,
    )
    .unwrap();
    let err = cfg.into_chrome("/nonexistent-root").unwrap_err();
    assert!(matches!(err, ChromeError::Config(_)));
    assert!(err.to_string().contains("missing.png"));
}

#[test]
fn custom_wallpaper_disables_controls() {
    let cfg = ChromeConfig::from_json_str(
        r##"{
            "content": { "kind": "solid", "width": 10, "height": 10, "color": "#ffffff" },
            "custom_wallpaper": { "kind": "solid", "width": 1, "height": 1, "color": "#202020" }
        }"##,
    )
    .unwrap();
    let chrome = cfg.into_chrome(".").unwrap();
    assert!(chrome.controls(Appearance::Light).is_none());
}

#[test]
fn load_reads_files_from_disk() {
    let dir = std::env::temp_dir().join(format!("chromeshot-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("chrome.json");
    std::fs::write(
        &path,
        r##"{ "title": "Disk", "content": { "kind": "solid", "width": 4, "height": 4, "color": "#00ff00" } }"##,
    )
    .unwrap();
    let cfg = ChromeConfig::load(&path).unwrap();
    assert_eq!(cfg.title.as_deref(), Some("Disk"));
    assert!(ChromeConfig::load(dir.join("nope.json")).is_err());
    let _ = std::fs::remove_dir_all(dir);
}
