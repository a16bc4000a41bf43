use std::cell::RefCell;
use std::rc::Rc;

use crate::animation::attribute::Attribute;
use crate::animation::ease::Ease;
use crate::foundation::core::{Point, Time};
use crate::foundation::error::{VectorError, VectorResult};
use crate::geometry::path::Path;
use crate::shapes::polygon::Polygon;
use crate::shapes::{Shape, ShapeKind, latest, points_markup};
use crate::style::color::Color;
use crate::style::key::{StyleKey, StyleMap};
use crate::style::styling::Styling;

/// Polyline following a moving point, sampled every `dt` from `start`.
///
/// Samples are cached append-only: a sample is computed once, the first time a query
/// reaches it, and never recomputed. Clones share the cache.
#[derive(Clone, Debug)]
pub struct Trace {
    point: Attribute<Point>,
    start: Time,
    end: Option<Time>,
    dt: f64,
    samples: Rc<RefCell<Vec<Point>>>,
    /// Visibility.
    pub show: Attribute<bool>,
    /// Draw order.
    pub z: Attribute<f64>,
    /// Presentation and transform.
    pub styling: Styling,
}

impl Trace {
    /// Follow `point` from `start` until `end` (forever when `None`).
    pub fn new(
        point: &Attribute<Point>,
        start: Time,
        end: Option<Time>,
        dt: f64,
        styles: &StyleMap,
    ) -> VectorResult<Self> {
        if dt.is_nan() || dt <= 0.0 {
            return Err(VectorError::config(format!(
                "trace step must be positive, got {dt}"
            )));
        }
        let defaults = StyleMap::preset([
            (StyleKey::Stroke, Color::WHITE.into()),
            (StyleKey::StrokeWidth, 3.0.into()),
        ]);
        Ok(Self {
            point: point.clone(),
            start,
            end,
            dt,
            samples: Rc::new(RefCell::new(Vec::new())),
            show: Attribute::new(start, true),
            z: Attribute::new(start, 0.0),
            styling: Styling::new(styles, start, &defaults),
        })
    }

    /// Number of whole steps sampled by `time`.
    pub fn steps(&self, time: Time) -> usize {
        let until = self.end.map_or(time, |end| end.min(time));
        if until <= self.start {
            return 0;
        }
        ((until - self.start) / self.dt).floor() as usize
    }

    /// Sampled vertices up to `time`, extending the cache as needed.
    pub fn vertices(&self, time: Time) -> Vec<Point> {
        let steps = self.steps(time);
        let mut samples = self.samples.borrow_mut();
        while samples.len() < steps {
            let t = self.start + samples.len() as f64 * self.dt;
            samples.push(self.point.at(t));
        }
        samples[..steps].to_vec()
    }

    /// Freeze the samples taken by `time` into a polygon sharing this trace's styling.
    pub fn to_polygon(&self, time: Time) -> Polygon {
        let polygon = Polygon::with_styling(&self.vertices(time), time, self.styling.alias());
        polygon.z.set_from(time, self.z.at(time));
        polygon
    }
}

impl Shape for Trace {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polyline
    }

    fn show(&self) -> &Attribute<bool> {
        &self.show
    }

    fn z(&self) -> &Attribute<f64> {
        &self.z
    }

    fn styling(&self) -> Option<&Styling> {
        Some(&self.styling)
    }

    /// Samples followed by the live position.
    fn path(&self, time: Time) -> VectorResult<Path> {
        let mut points = self.vertices(time);
        points.push(self.point.at(time));
        Ok(Path::polyline(&points))
    }

    fn shift(
        &self,
        _dx: f64,
        _dy: f64,
        _start: Time,
        _end: Option<Time>,
        _ease: Ease,
    ) -> VectorResult<()> {
        Err(VectorError::unsupported("shifting a trace"))
    }

    fn to_markup(&self, time: Time) -> String {
        let samples = self.vertices(time);
        if samples.is_empty() {
            return String::new();
        }
        let live = self.point.at(time);
        format!(
            "<polyline points='{} {},{}'{} />",
            points_markup(&samples),
            live.x,
            live.y,
            self.styling.presentation_markup(time)
        )
    }

    fn last_change(&self) -> Time {
        latest([
            self.point.last_change(),
            self.styling.last_change(),
            self.z.last_change(),
            self.show.last_change(),
        ])
    }

    fn visit_leaves(&self, f: &mut dyn FnMut(&dyn Shape)) {
        f(self);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/trace.rs"]
mod tests;
