use crate::animation::attribute::Attribute;
use crate::animation::ease::Ease;
use crate::foundation::core::{Point, Time};
use crate::foundation::error::VectorResult;
use crate::geometry::path::Path;
use crate::shapes::{Shape, ShapeKind, latest, points_markup, shift_point};
use crate::style::color::Color;
use crate::style::key::{StyleKey, StyleMap};
use crate::style::styling::Styling;

/// Closed polygon with animated vertices.
#[derive(Clone, Debug)]
pub struct Polygon {
    /// Vertices in order; the closing edge is implicit.
    pub vertices: Vec<Attribute<Point>>,
    /// Visibility.
    pub show: Attribute<bool>,
    /// Draw order.
    pub z: Attribute<f64>,
    /// Presentation and transform.
    pub styling: Styling,
}

impl Polygon {
    /// Polygon through `vertices`, created at `creation`.
    pub fn new(vertices: &[Point], creation: Time, styles: &StyleMap) -> Self {
        Self::with_styling(vertices, creation, Styling::new(styles, creation, &defaults()))
    }

    /// Polygon using an existing styling bundle.
    pub fn with_styling(vertices: &[Point], creation: Time, styling: Styling) -> Self {
        Self {
            vertices: vertices
                .iter()
                .map(|v| Attribute::new(creation, *v))
                .collect(),
            show: Attribute::new(creation, true),
            z: Attribute::new(creation, 0.0),
            styling,
        }
    }

    /// Equilateral triangle with its centroid at `center`, rotated by `angle` degrees.
    pub fn equilateral_triangle(
        side: f64,
        angle: f64,
        center: Point,
        creation: Time,
        styles: &StyleMap,
    ) -> Self {
        let h = 3f64.sqrt() / 2.0 * side;
        let corners = [
            Point::new(center.x - side / 2.0, center.y + h / 3.0),
            Point::new(center.x + side / 2.0, center.y + h / 3.0),
            Point::new(center.x, center.y - 2.0 * h / 3.0),
        ];
        let (sin, cos) = angle.to_radians().sin_cos();
        let rotated: Vec<Point> = corners
            .iter()
            .map(|p| {
                let v = *p - center;
                Point::new(
                    center.x + cos * v.x - sin * v.y,
                    center.y + sin * v.x + cos * v.y,
                )
            })
            .collect();
        Self::new(&rotated, creation, styles)
    }

    /// Vertex positions at `time`.
    pub fn points(&self, time: Time) -> Vec<Point> {
        self.vertices.iter().map(|v| v.at(time)).collect()
    }
}

fn defaults() -> StyleMap {
    StyleMap::preset([
        (StyleKey::FillOpacity, 0.7.into()),
        (StyleKey::Stroke, Color::WHITE.into()),
        (StyleKey::StrokeWidth, 2.0.into()),
    ])
}

impl Shape for Polygon {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
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
        Ok(Path::polygon(&self.points(time)))
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
            "<polygon points='{}'{} />",
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

#[cfg(test)]
#[path = "../../tests/unit/shapes/polygon.rs"]
mod tests;
