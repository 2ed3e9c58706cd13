use glam::Vec2;
use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use crate::constants::terrain::*;
use crate::terrain::ClosedPath;

/// How consecutive peaks are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainStyle {
    /// Cubic Béziers, soft contours
    Smooth,
    /// Straight segments, jagged ridges
    Sharp,
}

/// One mountain range silhouette.
///
/// Everything about the outline is a function of the fields below; wall clock
/// time never enters. Two layers built from equal fields produce identical
/// paths, which is what lets the parallax layer draw the same shape twice
/// side by side without a seam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountainLayer {
    pub width: f32,
    pub height: f32,
    pub seed_offset: f32,
    pub layer_index: u32,
    /// 0..=1, how far the peak count may stray from the base count
    pub complexity: f32,
    pub style: TerrainStyle,
    /// Displace interior peaks horizontally with seeded noise
    pub jitter: bool,
}

impl MountainLayer {
    pub fn new(width: f32, height: f32, seed_offset: f32, layer_index: u32) -> Self {
        Self {
            width,
            height,
            seed_offset,
            layer_index,
            complexity: DEFAULT_COMPLEXITY,
            style: TerrainStyle::Smooth,
            jitter: true,
        }
    }

    pub fn with_complexity(mut self, complexity: f32) -> Self {
        self.complexity = complexity;
        self
    }

    pub fn with_style(mut self, style: TerrainStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Number of outline points, ground anchors included
    pub fn peak_count(&self) -> usize {
        let complexity = self.complexity.clamp(0.0, 1.0);
        let wave = (self.seed_offset + self.layer_index as f32).sin();
        let raw = (BASE_PEAKS + complexity * PEAK_SPREAD * wave).round();
        // Below MIN_PEAKS the silhouette degenerates into a few triangles
        (raw.max(0.0) as usize).clamp(MIN_PEAKS, MAX_PEAKS)
    }

    /// Outline points from left ground anchor to right ground anchor
    pub fn peaks(&self) -> Vec<Vec2> {
        let count = self.peak_count();
        let span = self.width + 2.0 * OVERSCAN;
        let spacing = span / (count - 1) as f32;
        let seed = self.seed_offset;
        let layer = self.layer_index as f32;
        let perlin = Perlin::new(self.seed_offset.to_bits() ^ self.layer_index);

        (0..count)
            .map(|i| {
                if i == 0 {
                    return Vec2::new(-OVERSCAN, self.height);
                }
                if i == count - 1 {
                    return Vec2::new(self.width + OVERSCAN, self.height);
                }
                let x = -OVERSCAN + i as f32 * spacing;

                let fi = i as f32;
                let primary = 0.7 * (0.5 + 0.5 * (seed * fi * 0.7 + layer * 1.3).sin());
                let noise = 0.3 * (0.5 + 0.5 * (seed * fi * 1.9 + layer * 2.1).cos());
                let peak_height =
                    self.height * (MIN_HEIGHT_FRACTION + HEIGHT_RANGE_FRACTION * (primary + noise));

                let jitter = if self.jitter {
                    let sample = perlin.get([fi as f64 * 0.37 + 0.5, layer as f64 * 0.73 + 0.5]);
                    sample.clamp(-1.0, 1.0) as f32 * spacing * JITTER_FRACTION
                } else {
                    0.0
                };

                Vec2::new(x + jitter, self.height - peak_height)
            })
            .collect()
    }

    /// Closed outline: the ridge line, then back along the baseline
    pub fn path(&self) -> ClosedPath {
        let peaks = self.peaks();
        let mut builder = ClosedPath::builder(peaks[0]);

        for pair in peaks.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            builder = match self.style {
                TerrainStyle::Sharp => builder.line_to(to),
                TerrainStyle::Smooth => {
                    let dx = to.x - from.x;
                    let c1 = Vec2::new(from.x + dx * CONTROL_NEAR, from.y);
                    let c2 = Vec2::new(from.x + dx * CONTROL_FAR, to.y);
                    builder.cubic_to(c1, c2, to)
                }
            };
        }

        builder.close()
    }
}

/// Generate a mountain silhouette path
pub fn generate(
    width: f32,
    height: f32,
    seed_offset: f32,
    layer_index: u32,
    complexity: f32,
    style: TerrainStyle,
) -> ClosedPath {
    MountainLayer::new(width, height, seed_offset, layer_index)
        .with_complexity(complexity)
        .with_style(style)
        .path()
}
