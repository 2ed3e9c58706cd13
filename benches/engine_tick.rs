// Per-frame cost of the scene engine in each mode, plus terrain generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ambient_scene::{
    generate, AnimationEngine, FixedTheme, ManualClock, RenderConfig, SceneMode, SceneSettings,
    TerrainStyle, Theme,
};

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_tick");

    for mode in SceneMode::ALL {
        let settings = SceneSettings {
            rng_seed: Some(1),
            ..Default::default()
        };
        let mut engine =
            AnimationEngine::with_sources(settings, ManualClock::at_hour(12), &FixedTheme(Theme::Light))
                .expect("default settings are valid");
        let mut config = RenderConfig::default().with_override(mode);

        group.bench_with_input(BenchmarkId::from_parameter(mode.name()), &mode, |b, _| {
            b.iter(|| {
                config.scroll_offset += 0.5;
                black_box(engine.tick_frame(&config))
            })
        });
    }

    group.finish();
}

fn bench_terrain(c: &mut Criterion) {
    let mut group = c.benchmark_group("terrain_generate");

    for style in [TerrainStyle::Smooth, TerrainStyle::Sharp] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{:?}", style)), &style, |b, &style| {
            b.iter(|| generate(black_box(1200.0), black_box(300.0), 42.0, 0, 0.5, style).to_svg())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick, bench_terrain);
criterion_main!(benches);
