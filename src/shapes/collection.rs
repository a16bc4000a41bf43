use std::ops::Range;

use crate::animation::attribute::Attribute;
use crate::animation::ease::Ease;
use crate::foundation::core::{Rect, Time};
use crate::foundation::error::{VectorError, VectorResult};
use crate::geometry::path::Path;
use crate::shapes::{
    Shape, ShapeKind, ShapeRef, WRITE_WINDOW, latest, placed_path, visible_by_z,
};
use crate::style::styling::Styling;

/// Ordered group of shapes serialized as one `<g>` element.
#[derive(Clone, Debug)]
pub struct Collection {
    children: Vec<ShapeRef>,
    /// Visibility of the whole group.
    pub show: Attribute<bool>,
    /// Draw order of the whole group.
    pub z: Attribute<f64>,
}

impl Collection {
    /// Group of `children`, created at `creation`.
    pub fn new(children: Vec<ShapeRef>, creation: Time) -> Self {
        Self {
            children,
            show: Attribute::new(creation, true),
            z: Attribute::new(creation, 0.0),
        }
    }

    /// Append a child.
    pub fn push(&mut self, child: ShapeRef) {
        self.children.push(child);
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[ShapeRef] {
        &self.children
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Union of the bounding boxes of the children in `range`.
    pub fn bbox_range(&self, time: Time, range: Range<usize>) -> VectorResult<Rect> {
        let children = self.children.get(range.clone()).ok_or_else(|| {
            VectorError::config(format!(
                "child range {range:?} out of bounds for {} children",
                self.children.len()
            ))
        })?;
        let mut out: Option<Rect> = None;
        for child in children {
            let bbox = child.bbox(time)?;
            out = Some(out.map_or(bbox, |acc| acc.union(bbox)));
        }
        out.ok_or_else(|| VectorError::geometry("bounding box of an empty collection"))
    }
}

impl Shape for Collection {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Group
    }

    fn show(&self) -> &Attribute<bool> {
        &self.show
    }

    fn z(&self) -> &Attribute<f64> {
        &self.z
    }

    fn styling(&self) -> Option<&Styling> {
        None
    }

    /// Children's geometry, each with its own transform applied.
    fn path(&self, time: Time) -> VectorResult<Path> {
        let mut out = Path::new();
        for child in &self.children {
            out.extend(placed_path(child.as_ref(), time)?);
        }
        Ok(out)
    }

    fn bbox(&self, time: Time) -> VectorResult<Rect> {
        self.bbox_range(time, 0..self.children.len())
    }

    fn shift(
        &self,
        dx: f64,
        dy: f64,
        start: Time,
        end: Option<Time>,
        ease: Ease,
    ) -> VectorResult<()> {
        for child in &self.children {
            child.shift(dx, dy, start, end, ease)?;
        }
        Ok(())
    }

    fn to_markup(&self, time: Time) -> String {
        let mut out = String::from("<g>\n");
        for child in visible_by_z(&self.children, time) {
            let markup = child.to_markup(time);
            if !markup.is_empty() {
                out.push_str(&markup);
                out.push('\n');
            }
        }
        out.push_str("</g>");
        out
    }

    fn last_change(&self) -> Time {
        latest(
            self.children
                .iter()
                .map(|c| c.last_change())
                .chain([self.z.last_change(), self.show.last_change()]),
        )
    }

    fn visit_leaves(&self, f: &mut dyn FnMut(&dyn Shape)) {
        for child in &self.children {
            child.visit_leaves(f);
        }
    }

    fn fade_in(&self, start: Time, end: Time, change_existence: bool, ease: Ease) {
        for child in &self.children {
            child.fade_in(start, end, change_existence, ease);
        }
    }

    /// Children are written one after another with a window of [`WRITE_WINDOW`]
    /// children in progress at any moment.
    fn write(&self, start: Time, end: Time, max_stroke_width: f64, change_existence: bool) {
        let per_child = (end - start) / (self.children.len() + WRITE_WINDOW) as f64;
        for (i, child) in self.children.iter().enumerate() {
            child.write(
                start + per_child * i as f64,
                start + per_child * (i + WRITE_WINDOW + 1) as f64,
                max_stroke_width,
                change_existence,
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/collection.rs"]
mod tests;
