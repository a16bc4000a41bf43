use crate::foundation::core::{Canvas, Point, Rect, Time};
use crate::foundation::error::{VectorError, VectorResult};
use crate::scene::Scene;

/// Driver-side playback state: time cursor, pause flag and the visible region.
///
/// Nothing here reads a clock; the caller decides when to [`Playback::advance`].
#[derive(Clone, Debug, PartialEq)]
pub struct Playback {
    start: Time,
    end: Time,
    fps: f64,
    time: Time,
    frame: u64,
    paused: bool,
    canvas: Canvas,
    view_box: Rect,
}

impl Playback {
    /// Play `[start, end]` at `fps` frames per second.
    pub fn new(canvas: Canvas, start: Time, end: Time, fps: f64) -> VectorResult<Self> {
        if fps.is_nan() || fps <= 0.0 {
            return Err(VectorError::config(format!("fps must be positive, got {fps}")));
        }
        let end = end.max(start);
        Ok(Self {
            start,
            end,
            fps,
            time: start,
            frame: 0,
            paused: false,
            canvas,
            view_box: canvas.view_box(),
        })
    }

    /// Play a scene up to its duration.
    ///
    /// A negative `start` counts back from the end.
    pub fn for_scene(scene: &Scene, start: Time, fps: f64) -> VectorResult<Self> {
        let end = scene.duration();
        let start = if start < 0.0 {
            (end + start).max(0.0)
        } else {
            start
        };
        tracing::debug!(start, end, fps, "playback range");
        Self::new(scene.canvas(), start, end, fps)
    }

    /// Current time.
    pub fn time(&self) -> Time {
        self.time
    }

    /// First time of the range.
    pub fn start(&self) -> Time {
        self.start
    }

    /// Last time of the range.
    pub fn end(&self) -> Time {
        self.end
    }

    /// Seconds per frame.
    pub fn dt(&self) -> f64 {
        1.0 / self.fps
    }

    /// Frames advanced since the last restart.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Whether playback is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Visible region of the canvas.
    pub fn view_box(&self) -> Rect {
        self.view_box
    }

    /// Fraction of the range already played, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.end > self.start {
            ((self.time - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Step one frame forward, stopping at the end. No-op while paused.
    pub fn advance(&mut self) {
        if self.paused {
            return;
        }
        self.time = (self.time + self.dt()).min(self.end);
        self.frame += 1;
    }

    /// Back to the first frame.
    pub fn restart(&mut self) {
        self.time = self.start;
        self.frame = 0;
    }

    /// Pause or resume.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Zoom by `factor` (above 1 zooms in) keeping the point at relative position
    /// `(rel_x, rel_y)` of the view fixed. Relative positions are clamped to `[0, 1]`.
    pub fn zoom(&mut self, rel_x: f64, rel_y: f64, factor: f64) -> VectorResult<()> {
        if factor.is_nan() || factor <= 0.0 {
            return Err(VectorError::config(format!(
                "zoom factor must be positive, got {factor}"
            )));
        }
        let (rx, ry) = (rel_x.clamp(0.0, 1.0), rel_y.clamp(0.0, 1.0));
        let v = self.view_box;
        let (w, h) = (v.width() / factor, v.height() / factor);
        let (dw, dh) = (v.width() - w, v.height() - h);
        let x0 = v.x0 + rx * dw;
        let y0 = v.y0 + ry * dh;
        self.view_box = Rect::new(x0, y0, x0 + w, y0 + h);
        Ok(())
    }

    /// Zoom factor for a scroll of `delta` wheel units.
    pub fn wheel_factor(delta: f64) -> f64 {
        1.2f64.powf(delta / 240.0)
    }

    /// Show the whole canvas again.
    pub fn reset_view(&mut self) {
        self.view_box = self.canvas.view_box();
    }

    /// Canvas coordinates of a point at relative position `(rel_x, rel_y)` of the view.
    pub fn view_point(&self, rel_x: f64, rel_y: f64) -> Point {
        let v = self.view_box;
        Point::new(v.x0 + rel_x * v.width(), v.y0 + rel_y * v.height())
    }

    /// Frame at the current time and view.
    pub fn render(&self, scene: &Scene) -> String {
        scene.frame_in(self.time, self.view_box)
    }

    /// Every frame time of the range, from `start` to `end` inclusive.
    pub fn frames(&self) -> impl Iterator<Item = Time> + use<> {
        let (start, end, dt) = (self.start, self.end, self.dt());
        let count = ((end - start) / dt + 1e-9).floor() as u64;
        let last = if start + count as f64 * dt < end - 1e-9 {
            Some(end)
        } else {
            None
        };
        (0..=count)
            .map(move |k| (start + k as f64 * dt).min(end))
            .chain(last)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/playback.rs"]
mod tests;
