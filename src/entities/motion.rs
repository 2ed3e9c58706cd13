//! Periodic motion in scene time.
//!
//! Scene time grows without bound, so phases are formed in `f64` and only the
//! bounded result is narrowed to `f32`.

/// `sin(t * rate + offset)`
pub fn wave(t: f64, rate: f32, offset: f32) -> f32 {
    (t * rate as f64 + offset as f64).sin() as f32
}

/// `cos(t * rate + offset)`
pub fn cowave(t: f64, rate: f32, offset: f32) -> f32 {
    (t * rate as f64 + offset as f64).cos() as f32
}

/// `start + t * speed`, wrapped into `[0, period)`
pub fn wrap(start: f32, t: f64, speed: f32, period: f32) -> f32 {
    let v = (start as f64 + t * speed as f64).rem_euclid(period as f64) as f32;
    // Narrowing can round a value just under `period` up to it
    if v >= period {
        0.0
    } else {
        v
    }
}
