use crate::animation::attribute::Attribute;
use crate::animation::ease::Ease;
use crate::foundation::core::{Point, Time};
use crate::foundation::error::VectorResult;
use crate::geometry::path::Path;
use crate::shapes::{Shape, ShapeKind, latest, points_markup, shift_point};
use crate::style::color::Color;
use crate::style::key::{StyleKey, StyleMap};
use crate::style::styling::Styling;

fn stroke_defaults() -> StyleMap {
    StyleMap::preset([
        (StyleKey::Stroke, Color::WHITE.into()),
        (StyleKey::StrokeWidth, 3.0.into()),
    ])
}

/// Straight line between two animated endpoints.
#[derive(Clone, Debug)]
pub struct Line {
    /// First endpoint.
    pub p1: Attribute<Point>,
    /// Second endpoint.
    pub p2: Attribute<Point>,
    /// Visibility.
    pub show: Attribute<bool>,
    /// Draw order.
    pub z: Attribute<f64>,
    /// Presentation and transform.
    pub styling: Styling,
}

impl Line {
    /// Line from `p1` to `p2`.
    pub fn new(p1: Point, p2: Point, creation: Time, styles: &StyleMap) -> Self {
        Self {
            p1: Attribute::new(creation, p1),
            p2: Attribute::new(creation, p2),
            show: Attribute::new(creation, true),
            z: Attribute::new(creation, 0.0),
            styling: Styling::new(styles, creation, &stroke_defaults()),
        }
    }
}

impl Shape for Line {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
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

    fn path(&self, time: Time) -> VectorResult<Path> {
        Ok(Path::polyline(&[self.p1.at(time), self.p2.at(time)]))
    }

    fn shift(
        &self,
        dx: f64,
        dy: f64,
        start: Time,
        end: Option<Time>,
        ease: Ease,
    ) -> VectorResult<()> {
        shift_point(&self.p1, dx, dy, start, end, ease);
        shift_point(&self.p2, dx, dy, start, end, ease);
        Ok(())
    }

    fn to_markup(&self, time: Time) -> String {
        let (a, b) = (self.p1.at(time), self.p2.at(time));
        format!(
            "<line x1='{}' y1='{}' x2='{}' y2='{}'{} />",
            a.x,
            a.y,
            b.x,
            b.y,
            self.styling.presentation_markup(time)
        )
    }

    fn last_change(&self) -> Time {
        latest([
            self.p1.last_change(),
            self.p2.last_change(),
            self.styling.last_change(),
            self.z.last_change(),
            self.show.last_change(),
        ])
    }

    fn visit_leaves(&self, f: &mut dyn FnMut(&dyn Shape)) {
        f(self);
    }
}

/// Open polyline through animated vertices.
#[derive(Clone, Debug)]
pub struct Lines {
    /// Vertices in drawing order.
    pub vertices: Vec<Attribute<Point>>,
    /// Visibility.
    pub show: Attribute<bool>,
    /// Draw order.
    pub z: Attribute<f64>,
    /// Presentation and transform.
    pub styling: Styling,
}

impl Lines {
    /// Polyline through `vertices`.
    pub fn new(vertices: &[Point], creation: Time, styles: &StyleMap) -> Self {
        Self {
            vertices: vertices
                .iter()
                .map(|v| Attribute::new(creation, *v))
                .collect(),
            show: Attribute::new(creation, true),
            z: Attribute::new(creation, 0.0),
            styling: Styling::new(styles, creation, &stroke_defaults()),
        }
    }

    /// Vertex positions at `time`.
    pub fn points(&self, time: Time) -> Vec<Point> {
        self.vertices.iter().map(|v| v.at(time)).collect()
    }
}

impl Shape for Lines {
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

    fn path(&self, time: Time) -> VectorResult<Path> {
        Ok(Path::polyline(&self.points(time)))
    }

    fn shift(
        &self,
        dx: f64,
        dy: f64,
        start: Time,
        end: Option<Time>,
        ease: Ease,
    ) -> VectorResult<()> {
        for v in &self.vertices {
            shift_point(v, dx, dy, start, end, ease);
        }
        Ok(())
    }

    fn to_markup(&self, time: Time) -> String {
        format!(
            "<polyline points='{}'{} />",
            points_markup(&self.points(time)),
            self.styling.presentation_markup(time)
        )
    }

    fn last_change(&self) -> Time {
        latest(
            self.vertices
                .iter()
                .map(Attribute::last_change)
                .chain([
                    self.styling.last_change(),
                    self.z.last_change(),
                    self.show.last_change(),
                ]),
        )
    }

    fn visit_leaves(&self, f: &mut dyn FnMut(&dyn Shape)) {
        f(self);
    }
}
