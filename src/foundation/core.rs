pub use kurbo::{Affine, CubicBez, Point, Rect, Vec2};

/// Scene time in seconds.
pub type Time = f64;

/// Normalized progress of `t` through `[start, end]`.
///
/// The result is not clamped; easing functions decide what happens outside the unit
/// interval. Zero-length (or inverted) intervals behave as a step at `start`.
pub fn progress(t: Time, start: Time, end: Time) -> f64 {
    if end > start {
        (t - start) / (end - start)
    } else if t < start {
        0.0
    } else {
        1.0
    }
}

/// Output canvas dimensions in user units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in user units.
    pub width: f64,
    /// Height in user units.
    pub height: f64,
}

impl Canvas {
    /// Full-canvas view box `(0, 0, width, height)`.
    pub fn view_box(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
