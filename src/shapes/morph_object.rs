use std::rc::Rc;

use crate::animation::attribute::{Attribute, Span};
use crate::animation::ease::Ease;
use crate::foundation::core::{Rect, Time, progress};
use crate::foundation::error::VectorResult;
use crate::geometry::path::Path;
use crate::morph::{MorphOpts, MorphPlan};
use crate::shapes::collection::Collection;
use crate::shapes::path_shape::PathShape;
use crate::shapes::{Shape, ShapeKind, ShapeRef};
use crate::style::styling::Styling;

/// Animated transition from one set of shapes into another.
///
/// Built as a group of [`PathShape`]s, one per matched subpath, that exist only during
/// `[start, end)`. The plan is computed once at construction.
#[derive(Clone, Debug)]
pub struct MorphObject {
    group: Collection,
    plan: Rc<MorphPlan>,
}

impl MorphObject {
    /// Morph the leaves of `from` (as drawn at `start`) into those of `to` (at `end`).
    ///
    /// With `change_existence`, `from` is hidden from `start` on and `to` only appears at
    /// `end`, so that the morph replaces both on screen.
    pub fn new(
        from: &[ShapeRef],
        to: &[ShapeRef],
        start: Time,
        end: Time,
        ease: Ease,
        change_existence: bool,
        opts: MorphOpts,
    ) -> VectorResult<Self> {
        if change_existence {
            for shape in from {
                shape.show().set_from(start, false);
            }
            for shape in to {
                shape.show().set_from(Time::NEG_INFINITY, false);
                shape.show().set_from(end, true);
            }
        }

        let plan = Rc::new(MorphPlan::prepare(
            &styled_leaves(from, start)?,
            &styled_leaves(to, end)?,
            start,
            end,
            opts,
        )?);

        let mut group = Collection::new(Vec::new(), start);
        for (index, sub) in plan.subpaths.iter().enumerate() {
            let styling = sub
                .styling_from
                .interpolate(&sub.styling_to, start, end, ease)?;
            let piece = PathShape::with_styling("", start, styling);
            piece.show.set_from(end, false);
            let plan = Rc::clone(&plan);
            piece.d.set(Span::new(start, end), move |t| {
                plan.subpaths[index].path_data(progress(t, start, end), ease)
            });
            group.push(Rc::new(piece));
        }
        group.show.set_from(end, false);
        Ok(Self { group, plan })
    }

    /// The subpath correspondence driving this morph.
    pub fn plan(&self) -> &MorphPlan {
        &self.plan
    }

    /// The per-subpath shapes.
    pub fn pieces(&self) -> &[ShapeRef] {
        self.group.children()
    }
}

fn styled_leaves(shapes: &[ShapeRef], time: Time) -> VectorResult<Vec<(Path, Styling)>> {
    let mut out = Vec::new();
    let mut failure = None;
    for shape in shapes {
        shape.visit_leaves(&mut |leaf: &dyn Shape| {
            if failure.is_some() {
                return;
            }
            let Some(styling) = leaf.styling() else {
                return;
            };
            match leaf.path(time) {
                Ok(path) => out.push((path, styling.clone())),
                Err(err) => failure = Some(err),
            }
        });
    }
    match failure {
        Some(err) => Err(err),
        None => Ok(out),
    }
}

impl Shape for MorphObject {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Group
    }

    fn show(&self) -> &Attribute<bool> {
        &self.group.show
    }

    fn z(&self) -> &Attribute<f64> {
        &self.group.z
    }

    fn styling(&self) -> Option<&Styling> {
        None
    }

    fn path(&self, time: Time) -> VectorResult<Path> {
        self.group.path(time)
    }

    fn bbox(&self, time: Time) -> VectorResult<Rect> {
        self.group.bbox(time)
    }

    fn shift(
        &self,
        dx: f64,
        dy: f64,
        start: Time,
        end: Option<Time>,
        ease: Ease,
    ) -> VectorResult<()> {
        self.group.shift(dx, dy, start, end, ease)
    }

    fn to_markup(&self, time: Time) -> String {
        self.group.to_markup(time)
    }

    fn last_change(&self) -> Time {
        self.group.last_change()
    }

    fn visit_leaves(&self, f: &mut dyn FnMut(&dyn Shape)) {
        self.group.visit_leaves(f);
    }

    fn fade_in(&self, start: Time, end: Time, change_existence: bool, ease: Ease) {
        self.group.fade_in(start, end, change_existence, ease);
    }

    fn write(&self, start: Time, end: Time, max_stroke_width: f64, change_existence: bool) {
        self.group.write(start, end, max_stroke_width, change_existence);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/morph_object.rs"]
mod tests;
