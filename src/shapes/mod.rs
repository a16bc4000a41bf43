//! Shape objects: leaves that serialize to one SVG element and groups of shapes.
//!
//! Every shape is a bundle of [`Attribute`] handles, so cloning a shape yields a second
//! handle onto the same animated state. Scenes and collections store shapes as
//! `Rc<dyn Shape>`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::animation::attribute::{Attribute, Span};
use crate::animation::ease::Ease;
use crate::foundation::core::{Point, Rect, Time, progress};
use crate::foundation::error::{VectorError, VectorResult};
use crate::geometry::path::Path;
use crate::style::color::Color;
use crate::style::key::{StyleKey, StyleMap};
use crate::style::styling::Styling;

pub(crate) mod circle;
pub(crate) mod collection;
pub(crate) mod line;
pub(crate) mod morph_object;
pub(crate) mod path_shape;
pub(crate) mod polygon;
pub(crate) mod rect;
pub(crate) mod text_object;
pub(crate) mod trace;

pub use circle::Circle;
pub use collection::Collection;
pub use line::{Line, Lines};
pub use morph_object::MorphObject;
pub use path_shape::PathShape;
pub use polygon::Polygon;
pub use rect::Rectangle;
pub use text_object::TextObject;
pub use trace::Trace;

/// Shared, type-erased shape handle.
pub type ShapeRef = Rc<dyn Shape>;

/// Element kind a shape serializes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// `<polygon>`
    Polygon,
    /// `<circle>`
    Circle,
    /// `<rect>`
    Rect,
    /// `<line>`
    Line,
    /// `<polyline>`
    Polyline,
    /// `<path>`
    Path,
    /// `<g>`
    Group,
}

impl ShapeKind {
    /// SVG element name.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Polygon => "polygon",
            Self::Circle => "circle",
            Self::Rect => "rect",
            Self::Line => "line",
            Self::Polyline => "polyline",
            Self::Path => "path",
            Self::Group => "g",
        }
    }
}

/// Number of children a collection writes concurrently.
pub const WRITE_WINDOW: usize = 10;

/// Common contract of every drawable object.
pub trait Shape: fmt::Debug {
    /// Element kind.
    fn kind(&self) -> ShapeKind;

    /// Visibility over time.
    fn show(&self) -> &Attribute<bool>;

    /// Draw order over time; lower values are drawn first.
    fn z(&self) -> &Attribute<f64>;

    /// Styling bundle; `None` for groups.
    fn styling(&self) -> Option<&Styling>;

    /// Geometry at `time`, before the shape's own transform.
    fn path(&self, time: Time) -> VectorResult<Path>;

    /// Bounding box at `time` after the shape's own transform.
    fn bbox(&self, time: Time) -> VectorResult<Rect> {
        let path = self.path(time)?;
        match self.styling() {
            Some(styling) => path.transformed_bbox(&styling.transform_clauses(time)),
            None => path
                .bbox()
                .ok_or_else(|| VectorError::geometry("bounding box of an empty shape")),
        }
    }

    /// Move by `(dx, dy)`.
    ///
    /// Without `end` the offset applies permanently from `start`; otherwise it ramps in
    /// with `ease` over `[start, end]` and holds.
    fn shift(
        &self,
        dx: f64,
        dy: f64,
        start: Time,
        end: Option<Time>,
        ease: Ease,
    ) -> VectorResult<()>;

    /// Serialized element at `time`. Visibility is filtered by the container.
    fn to_markup(&self, time: Time) -> String;

    /// Instant after which nothing about this shape changes.
    fn last_change(&self) -> Time;

    /// Call `f` on every styled leaf, in drawing order of construction.
    fn visit_leaves(&self, f: &mut dyn FnMut(&dyn Shape));

    /// Ease opacity from zero to its value at `end`.
    fn fade_in(&self, start: Time, end: Time, change_existence: bool, ease: Ease) {
        if change_existence {
            appear_at(self.show(), start);
        }
        if let Some(styling) = self.styling() {
            let target = styling.opacity.at(end);
            styling.opacity.set(Span::new(start, end), move |t| {
                target * ease.apply(progress(t, start, end))
            });
        }
    }

    /// Handwriting reveal: fill fades in while the stroke width pulses by
    /// `max_stroke_width` on top of its final value.
    fn write(&self, start: Time, end: Time, max_stroke_width: f64, change_existence: bool) {
        if change_existence {
            appear_at(self.show(), start);
        }
        if let Some(styling) = self.styling() {
            let fill = styling.fill_opacity.at(end);
            styling.fill_opacity.set(Span::new(start, end), move |t| {
                fill * Ease::Linear.apply(progress(t, start, end))
            });
            let width = styling.stroke_width.at(end);
            styling.stroke_width.set(Span::new(start, end), move |t| {
                let p = progress(t, start, end);
                max_stroke_width * Ease::ThereAndBack.apply(p) + Ease::Linear.apply(p) * width
            });
        }
    }
}

/// Conveniences available on concrete shapes.
pub trait ShapeExt: Shape + Clone + 'static {
    /// Set the draw order from the beginning of time.
    fn with_z(self, z: f64) -> Self {
        self.z().set_from(Time::NEG_INFINITY, z);
        self
    }

    /// Type-erased shared handle.
    fn into_shared(self) -> ShapeRef {
        Rc::new(self)
    }

    /// Move the bounding-box center (as seen at `start`) to `(x, y)`.
    fn center_to(
        &self,
        x: f64,
        y: f64,
        start: Time,
        end: Option<Time>,
        ease: Ease,
    ) -> VectorResult<()> {
        let center = self.bbox(start)?.center();
        self.shift(x - center.x, y - center.y, start, end, ease)
    }

    /// Static highlight rectangle around the bounding box at `time`.
    fn bounding_rect(&self, time: Time, padding: f64) -> VectorResult<Rectangle> {
        let bbox = self.bbox(time)?;
        Ok(Rectangle::new(
            bbox.width() + 2.0 * padding,
            bbox.height() + 2.0 * padding,
            Point::new(bbox.x0 - padding, bbox.y0 - padding),
            time,
            &highlight_style(),
        ))
    }

    /// Highlight rectangle; with `tracking` it follows this shape from `time` onward.
    fn bounding_rect_attached(
        &self,
        time: Time,
        padding: f64,
        tracking: bool,
    ) -> VectorResult<Rectangle> {
        if !tracking {
            return self.bounding_rect(time, padding);
        }
        let rect = Rectangle::new(0.0, 0.0, Point::ZERO, time, &highlight_style());
        let tracker = Rc::new(BoxTracker {
            shape: self.clone(),
            memo: RefCell::new(None),
        });
        let follow = |attr: &Attribute<f64>, pick: fn(Rect, f64) -> f64| {
            let tracker = Rc::clone(&tracker);
            attr.set_from_with(time, move |t| pick(tracker.at(t), padding));
        };
        follow(&rect.x, |b, pad| b.x0 - pad);
        follow(&rect.y, |b, pad| b.y0 - pad);
        follow(&rect.width, |b, pad| b.width() + 2.0 * pad);
        follow(&rect.height, |b, pad| b.height() + 2.0 * pad);
        Ok(rect)
    }

    /// Draw the outline progressively, then fade the shape itself in.
    ///
    /// The outline is traced by arc length over the first two thirds of `[start, end]`;
    /// during the last third the shape fades in and at `end` the outline disappears.
    /// The returned outline must be added to the scene by the caller.
    fn create(&self, start: Time, end: Time, change_existence: bool) -> VectorResult<PathShape> {
        let draw_end = start + (end - start) * 2.0 / 3.0;
        let source = self.path(start)?;
        let styling = match self.styling() {
            Some(styling) => {
                let mut outline = styling.alias();
                outline.opacity = styling.opacity.snapshot();
                outline
            }
            None => Styling::new(&StyleMap::new(), start, &outline_style()),
        };
        styling.fill_opacity.set_from(Time::NEG_INFINITY, 0.0);

        let outline = PathShape::with_styling("", start, styling);
        outline.d.set(Span::new(start, draw_end).hold(), move |t| {
            let drawn = Ease::Smooth.apply(progress(t, start, draw_end));
            source.partial(drawn).to_svg_data()
        });
        appear_at(&outline.show, start);
        outline.show.set_from(end, false);

        if change_existence {
            appear_at(self.show(), draw_end);
        }
        self.fade_in(draw_end, end, false, Ease::Linear);
        Ok(outline)
    }
}

impl<S: Shape + Clone + 'static> ShapeExt for S {}

/// Memoizes the last bounding-box query of a tracked shape.
struct BoxTracker<S> {
    shape: S,
    memo: RefCell<Option<(Time, Rect)>>,
}

impl<S: Shape> BoxTracker<S> {
    fn at(&self, t: Time) -> Rect {
        if let Some((memo_t, rect)) = *self.memo.borrow()
            && memo_t == t
        {
            return rect;
        }
        let rect = match self.shape.bbox(t) {
            Ok(rect) => rect,
            Err(err) => {
                tracing::warn!(time = t, %err, "tracked bounding box unavailable");
                Rect::ZERO
            }
        };
        *self.memo.borrow_mut() = Some((t, rect));
        rect
    }
}

fn highlight_style() -> StyleMap {
    StyleMap::preset([
        (StyleKey::FillOpacity, 0.0.into()),
        (StyleKey::StrokeOpacity, 1.0.into()),
        (StyleKey::Stroke, Color::hex(0xffff00).into()),
        (StyleKey::StrokeWidth, 2.0.into()),
    ])
}

fn outline_style() -> StyleMap {
    StyleMap::preset([
        (StyleKey::Stroke, Color::WHITE.into()),
        (StyleKey::StrokeWidth, 2.0.into()),
    ])
}

/// Hidden before `start`, shown from `start` on.
pub(crate) fn appear_at(show: &Attribute<bool>, start: Time) {
    show.set_from(Time::NEG_INFINITY, false);
    show.set_from(start, true);
}

/// Offset a coordinate attribute, permanently or as an eased ramp.
pub(crate) fn shift_point(
    attr: &Attribute<Point>,
    dx: f64,
    dy: f64,
    start: Time,
    end: Option<Time>,
    ease: Ease,
) {
    match end {
        None => attr.add_from(start, Point::new(dx, dy), None),
        Some(end) => attr.add_from_with(
            start,
            move |t| {
                let e = ease.apply(progress(t, start, end));
                Point::new(dx * e, dy * e)
            },
            Some(end),
        ),
    }
}

/// Scalar counterpart of [`shift_point`].
pub(crate) fn shift_real(
    attr: &Attribute<f64>,
    delta: f64,
    start: Time,
    end: Option<Time>,
    ease: Ease,
) {
    match end {
        None => attr.add_from(start, delta, None),
        Some(end) => attr.add_from_with(
            start,
            move |t| delta * ease.apply(progress(t, start, end)),
            Some(end),
        ),
    }
}

/// Visible shapes at `time`, ascending by `z`; ties keep insertion order.
pub(crate) fn visible_by_z<'a>(
    shapes: impl IntoIterator<Item = &'a ShapeRef>,
    time: Time,
) -> Vec<&'a ShapeRef> {
    let mut visible: Vec<(f64, &ShapeRef)> = shapes
        .into_iter()
        .filter(|s| s.show().at(time))
        .map(|s| (s.z().at(time), s))
        .collect();
    visible.sort_by(|a, b| a.0.total_cmp(&b.0));
    visible.into_iter().map(|(_, s)| s).collect()
}

/// Geometry of `shape` at `time` with its own transform applied.
pub(crate) fn placed_path(shape: &dyn Shape, time: Time) -> VectorResult<Path> {
    let path = shape.path(time)?;
    match shape.styling() {
        Some(styling) => path.apply_transforms(&styling.transform_clauses(time)),
        None => Ok(path),
    }
}

/// Space-separated `x,y` list for `points='...'` attributes.
pub(crate) fn points_markup(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Max over a set of `last_change` values.
pub(crate) fn latest(times: impl IntoIterator<Item = Time>) -> Time {
    times.into_iter().fold(Time::NEG_INFINITY, f64::max)
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/mod.rs"]
mod tests;
