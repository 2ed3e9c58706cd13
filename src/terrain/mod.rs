//! Procedural mountain silhouettes with parallax scrolling

pub mod mountain;
pub mod parallax;
pub mod path;

pub use mountain::{generate, MountainLayer, TerrainStyle};
pub use parallax::{ParallaxLayer, TerrainDescriptor};
pub use path::{ClosedPath, PathBuilder, PathCommand};
