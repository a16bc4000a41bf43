use kurbo::Vec2;

use crate::animation::attribute::Attribute;
use crate::animation::ease::Ease;
use crate::foundation::core::{Point, Time};
use crate::foundation::error::VectorResult;
use crate::geometry::path::Path;
use crate::geometry::segment::{ArcSegment, Segment};
use crate::shapes::{Shape, ShapeKind, latest, shift_point};
use crate::style::color::Color;
use crate::style::key::{StyleKey, StyleMap};
use crate::style::styling::Styling;

/// Circle with animated center and radius.
#[derive(Clone, Debug)]
pub struct Circle {
    /// Center.
    pub center: Attribute<Point>,
    /// Radius.
    pub r: Attribute<f64>,
    /// Visibility.
    pub show: Attribute<bool>,
    /// Draw order.
    pub z: Attribute<f64>,
    /// Presentation and transform.
    pub styling: Styling,
}

impl Circle {
    /// Circle of radius `r` around `center`.
    pub fn new(r: f64, center: Point, creation: Time, styles: &StyleMap) -> Self {
        Self::build(r, center, creation, styles, &defaults())
    }

    /// Small filled circle used to mark a point (radius 6 by default).
    pub fn dot(center: Point, creation: Time, styles: &StyleMap) -> Self {
        let dot = StyleMap::preset([
            (StyleKey::Fill, Color::hex(0x83c167).into()),
            (StyleKey::StrokeWidth, 0.0.into()),
        ]);
        Self::build(6.0, center, creation, styles, &defaults().merged(&dot))
    }

    fn build(
        r: f64,
        center: Point,
        creation: Time,
        styles: &StyleMap,
        type_defaults: &StyleMap,
    ) -> Self {
        Self {
            center: Attribute::new(creation, center),
            r: Attribute::new(creation, r),
            show: Attribute::new(creation, true),
            z: Attribute::new(creation, 0.0),
            styling: Styling::new(styles, creation, type_defaults),
        }
    }
}

fn defaults() -> StyleMap {
    let accent = Color::hex(0xe07a5f);
    StyleMap::preset([
        (StyleKey::Fill, accent.into()),
        (StyleKey::FillOpacity, 0.7.into()),
        (StyleKey::Stroke, accent.into()),
        (StyleKey::StrokeWidth, 5.0.into()),
    ])
}

impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
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

    /// Two half-circle arcs starting at the leftmost point.
    fn path(&self, time: Time) -> VectorResult<Path> {
        let r = self.r.at(time);
        if r <= 0.0 {
            return Ok(Path::new());
        }
        let c = self.center.at(time);
        let left = Point::new(c.x - r, c.y);
        let right = Point::new(c.x + r, c.y);
        let half = |from, to| {
            Segment::Arc(ArcSegment {
                from,
                to,
                radii: Vec2::new(r, r),
                x_rotation: 0.0,
                large_arc: true,
                sweep: false,
            })
        };
        Ok(Path::from_segments(vec![half(left, right), half(right, left)]))
    }

    fn shift(
        &self,
        dx: f64,
        dy: f64,
        start: Time,
        end: Option<Time>,
        ease: Ease,
    ) -> VectorResult<()> {
        shift_point(&self.center, dx, dy, start, end, ease);
        Ok(())
    }

    fn to_markup(&self, time: Time) -> String {
        let c = self.center.at(time);
        format!(
            "<circle cx='{}' cy='{}' r='{}'{} />",
            c.x,
            c.y,
            self.r.at(time),
            self.styling.presentation_markup(time)
        )
    }

    fn last_change(&self) -> Time {
        latest([
            self.center.last_change(),
            self.r.last_change(),
            self.styling.last_change(),
            self.z.last_change(),
            self.show.last_change(),
        ])
    }

    fn visit_leaves(&self, f: &mut dyn FnMut(&dyn Shape)) {
        f(self);
    }
}
