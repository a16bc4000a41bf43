use kurbo::Vec2;

use crate::animation::attribute::Attribute;
use crate::animation::ease::Ease;
use crate::foundation::core::{Point, Time};
use crate::foundation::error::VectorResult;
use crate::geometry::path::Path;
use crate::geometry::segment::{ArcSegment, Segment};
use crate::shapes::{Shape, ShapeKind, latest, shift_real};
use crate::style::color::Color;
use crate::style::key::{StyleKey, StyleMap};
use crate::style::styling::Styling;

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Debug)]
pub struct Rectangle {
    /// Left edge.
    pub x: Attribute<f64>,
    /// Top edge.
    pub y: Attribute<f64>,
    /// Width.
    pub width: Attribute<f64>,
    /// Height.
    pub height: Attribute<f64>,
    /// Horizontal corner radius.
    pub rx: Attribute<f64>,
    /// Vertical corner radius.
    pub ry: Attribute<f64>,
    /// Visibility.
    pub show: Attribute<bool>,
    /// Draw order.
    pub z: Attribute<f64>,
    /// Presentation and transform.
    pub styling: Styling,
}

impl Rectangle {
    /// Rectangle of `width` x `height` with its top-left corner at `corner`.
    pub fn new(width: f64, height: f64, corner: Point, creation: Time, styles: &StyleMap) -> Self {
        Self::with_defaults(width, height, corner, creation, styles, &defaults())
    }

    pub(crate) fn with_defaults(
        width: f64,
        height: f64,
        corner: Point,
        creation: Time,
        styles: &StyleMap,
        type_defaults: &StyleMap,
    ) -> Self {
        Self {
            x: Attribute::new(creation, corner.x),
            y: Attribute::new(creation, corner.y),
            width: Attribute::new(creation, width),
            height: Attribute::new(creation, height),
            rx: Attribute::new(creation, 0.0),
            ry: Attribute::new(creation, 0.0),
            show: Attribute::new(creation, true),
            z: Attribute::new(creation, 0.0),
            styling: Styling::new(styles, creation, type_defaults),
        }
    }

    /// Round the corners from the beginning of time.
    pub fn with_corners(self, rx: f64, ry: f64) -> Self {
        self.rx.set_from(Time::NEG_INFINITY, rx);
        self.ry.set_from(Time::NEG_INFINITY, ry);
        self
    }
}

fn defaults() -> StyleMap {
    StyleMap::preset([
        (StyleKey::FillOpacity, 0.7.into()),
        (StyleKey::Stroke, Color::WHITE.into()),
        (StyleKey::StrokeWidth, 3.0.into()),
    ])
}

impl Shape for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rect
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
        let (x, y) = (self.x.at(time), self.y.at(time));
        let (w, h) = (self.width.at(time), self.height.at(time));
        let (rx, ry) = (self.rx.at(time), self.ry.at(time));
        if rx == 0.0 && ry == 0.0 {
            return Ok(Path::polygon(&[
                Point::new(x, y),
                Point::new(x + w, y),
                Point::new(x + w, y + h),
                Point::new(x, y + h),
            ]));
        }
        let corner = |from: Point, to: Point| {
            Segment::Arc(ArcSegment {
                from,
                to,
                radii: Vec2::new(rx, ry),
                x_rotation: 0.0,
                large_arc: false,
                sweep: true,
            })
        };
        let p = |px, py| Point::new(px, py);
        Ok(Path::from_segments(vec![
            Segment::line(p(x + rx, y), p(x + w - rx, y)),
            corner(p(x + w - rx, y), p(x + w, y + ry)),
            Segment::line(p(x + w, y + ry), p(x + w, y + h - ry)),
            corner(p(x + w, y + h - ry), p(x + w - rx, y + h)),
            Segment::line(p(x + w - rx, y + h), p(x + rx, y + h)),
            corner(p(x + rx, y + h), p(x, y + h - ry)),
            Segment::line(p(x, y + h - ry), p(x, y + ry)),
            corner(p(x, y + ry), p(x + rx, y)),
        ]))
    }

    fn shift(
        &self,
        dx: f64,
        dy: f64,
        start: Time,
        end: Option<Time>,
        ease: Ease,
    ) -> VectorResult<()> {
        shift_real(&self.x, dx, start, end, ease);
        shift_real(&self.y, dy, start, end, ease);
        Ok(())
    }

    fn to_markup(&self, time: Time) -> String {
        format!(
            "<rect x='{}' y='{}' width='{}' height='{}' rx='{}' ry='{}'{} />",
            self.x.at(time),
            self.y.at(time),
            self.width.at(time),
            self.height.at(time),
            self.rx.at(time),
            self.ry.at(time),
            self.styling.presentation_markup(time)
        )
    }

    fn last_change(&self) -> Time {
        latest([
            self.x.last_change(),
            self.y.last_change(),
            self.width.last_change(),
            self.height.last_change(),
            self.rx.last_change(),
            self.ry.last_change(),
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
#[path = "../../tests/unit/shapes/rect.rs"]
mod tests;
