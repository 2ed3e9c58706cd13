//! Headless scene preview
//! Runs the engine at 60 Hz for a number of frames and prints the last frame as JSON.
//!
//! Usage: scene-preview [SETTINGS.toml] [FRAMES]

use std::env;

use anyhow::{Context, Result};

use ambient_scene::{AnimationEngine, EntityKind, RenderConfig, SceneSettings};

const DEFAULT_FRAMES: u64 = 600;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let settings = match args.next() {
        Some(path) => SceneSettings::load(&path)
            .with_context(|| format!("loading scene settings from {}", path))?,
        None => SceneSettings::default(),
    };
    let frames = match args.next() {
        Some(n) => n
            .parse::<u64>()
            .with_context(|| format!("frame count must be a whole number, got {:?}", n))?,
        None => DEFAULT_FRAMES,
    };

    let mut engine = AnimationEngine::new(settings).context("building scene engine")?;
    let mut config = RenderConfig::default();

    let mut frame = engine.tick_frame(&config);
    for _ in 1..frames {
        // Scroll at a steady 30 px per second
        config.scroll_offset += 0.5;
        frame = engine.tick_frame(&config);
    }

    log::info!(
        "{} frames, {:.1}s scene time, {} mode, {} entities ({} birds)",
        frame.tick,
        frame.elapsed,
        frame.mode.name(),
        frame.entities.len(),
        frame.count(EntityKind::Bird)
    );

    let json = serde_json::to_string_pretty(&frame).context("serializing frame")?;
    println!("{}", json);
    Ok(())
}
