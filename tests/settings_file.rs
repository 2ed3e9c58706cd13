//! Settings file loading

use std::fs;

use tempfile::TempDir;

use ambient_scene::{
    AnimationEngine, EntityKind, FixedTheme, ManualClock, RenderConfig, SceneError, SceneMode,
    SceneSettings, TerrainStyle, Theme,
};

const SETTINGS: &str = r#"
mode_poll_interval = 30.0
rng_seed = 7
wind = "moderate"

[viewport]
width = 800.0
height = 200.0

[populations]
bees = 3
stars = 12

[shooting_stars]
check_interval = 1.0
spawn_probability = 0.25
lifespan = 2.0

[[terrain]]
seed = 5.0
scroll_speed = 0.2
style = "smooth"
color = "ridge-back"
opacity = 0.6
height_fraction = 0.5

[[terrain]]
seed = 9.0
scroll_speed = 0.6
style = "sharp"
complexity = 1.0
color = "ridge-front"
opacity = 1.0
height_fraction = 0.3
"#;

#[test]
fn load_settings_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scene.toml");
    fs::write(&path, SETTINGS).unwrap();

    let settings = SceneSettings::load(&path).unwrap();
    assert_eq!(settings.viewport.width, 800.0);
    assert_eq!(settings.populations.bees, 3);
    assert_eq!(settings.shooting_stars.lifespan, 2.0);
    assert_eq!(settings.terrain.len(), 2);
    assert_eq!(settings.terrain[0].complexity, 0.5);
    assert_eq!(settings.terrain[1].style, TerrainStyle::Sharp);

    let mut engine =
        AnimationEngine::with_sources(settings, ManualClock::at_hour(23), &FixedTheme(Theme::Light))
            .unwrap();
    let frame = engine.tick_frame(&RenderConfig::default());
    assert_eq!(frame.mode, SceneMode::Night);
    assert_eq!(frame.terrain.len(), 2);
    assert_eq!(frame.terrain[1].color_token, "ridge-front-light");
    assert_eq!(frame.terrain[0].copies, [0.0, 800.0]);
    assert_eq!(frame.count(EntityKind::Star), 12);
}

#[test]
fn settings_survive_a_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scene.toml");

    let original = SceneSettings::from_toml_str(SETTINGS).unwrap();
    fs::write(&path, toml::to_string(&original).unwrap()).unwrap();

    assert_eq!(SceneSettings::load(&path).unwrap(), original);
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    match SceneSettings::load(&path) {
        Err(SceneError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an io error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn invalid_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scene.toml");
    fs::write(
        &path,
        r#"
        [[terrain]]
        seed = 1.0
        scroll_speed = 0.1
        style = "smooth"
        color = "ridge"
        opacity = 2.0
        height_fraction = 0.5
        "#,
    )
    .unwrap();

    let err = SceneSettings::load(&path).unwrap_err();
    assert!(err.to_string().contains("terrain[0].opacity"), "{}", err);
}
