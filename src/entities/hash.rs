//! Trigonometric seed hashing.
//!
//! Cheap, reproducible pseudo-randomness: the same `(a, b)` always hashes to
//! the same value, so a restarted scene lays itself out identically.

use crate::constants::motion::GOLDEN_RATIO;

/// Hash two seeds into `[0, 1)`
pub fn hash01(a: f32, b: f32) -> f32 {
    let v = ((a as f64) * 12.9898 + (b as f64) * 78.233).sin() * 43_758.545_3;
    // f64 -> f32 may round 0.99999999 up to 1.0
    ((v - v.floor()) as f32).min(1.0 - f32::EPSILON)
}

/// Hash into `[min, max)`
pub fn hash_range(a: f32, b: f32, min: f32, max: f32) -> f32 {
    min + (max - min) * hash01(a, b)
}

/// Phase offset that keeps same-kind entities out of sync
pub fn phase_offset(index: u32) -> f32 {
    index as f32 * GOLDEN_RATIO
}
