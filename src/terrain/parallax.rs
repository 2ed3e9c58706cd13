use serde::Serialize;

use crate::terrain::{ClosedPath, MountainLayer};
use crate::theme::Theme;

/// What the renderer needs to draw one terrain layer for a frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TerrainDescriptor {
    pub layer_index: u32,
    pub path: ClosedPath,
    /// Horizontal offsets of the two copies of `path`
    pub copies: [f32; 2],
    /// Translation applied to both copies, in `(-width, 0]`
    pub translate_x: f32,
    pub color_token: String,
    pub opacity: f32,
}

/// A mountain layer scrolled at its own speed for depth.
///
/// The path is built once. Per frame only the translation changes: the same
/// outline is drawn at `0` and at `width`, and the pair is shifted left by the
/// scroll distance modulo `width`, so one copy always covers the viewport.
#[derive(Debug, Clone)]
pub struct ParallaxLayer {
    mountain: MountainLayer,
    path: ClosedPath,
    scroll_speed: f32,
    opacity: f32,
    tokens: [String; 2],
}

impl ParallaxLayer {
    pub fn new(mountain: MountainLayer, scroll_speed: f32, color: &str, opacity: f32) -> Self {
        let path = mountain.path();
        Self {
            mountain,
            path,
            scroll_speed,
            opacity: opacity.clamp(0.0, 1.0),
            tokens: [
                format!("{}-{}", color, Theme::Light.suffix()),
                format!("{}-{}", color, Theme::Dark.suffix()),
            ],
        }
    }

    pub fn mountain(&self) -> &MountainLayer {
        &self.mountain
    }

    pub fn path(&self) -> &ClosedPath {
        &self.path
    }

    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }

    /// Wrapped horizontal translation for a scene offset
    pub fn translate_x(&self, scene_offset: f32) -> f32 {
        let width = self.mountain.width;
        if width <= 0.0 {
            return 0.0;
        }
        let shift = (self.scroll_speed * scene_offset).rem_euclid(width);
        // rem_euclid can round up to exactly `width` for tiny negative inputs
        if shift >= width {
            0.0
        } else {
            -shift
        }
    }

    pub fn descriptor(&self, scene_offset: f32, theme: Theme) -> TerrainDescriptor {
        TerrainDescriptor {
            layer_index: self.mountain.layer_index,
            path: self.path.clone(),
            copies: [0.0, self.mountain.width],
            translate_x: self.translate_x(scene_offset),
            color_token: self.tokens[theme.is_dark() as usize].clone(),
            opacity: self.opacity,
        }
    }
}
