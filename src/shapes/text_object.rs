use std::rc::Rc;

use crate::animation::attribute::Attribute;
use crate::animation::ease::Ease;
use crate::foundation::core::{Rect, Time};
use crate::foundation::error::VectorResult;
use crate::geometry::path::Path;
use crate::shapes::collection::Collection;
use crate::shapes::path_shape::PathShape;
use crate::shapes::{Shape, ShapeKind, ShapeRef, latest, shift_real};
use crate::style::color::Color;
use crate::style::key::{StyleKey, StyleMap};
use crate::style::styling::Styling;
use crate::text::{TextContext, TextRenderer};

/// Rendered text as a group of filled paths whose top-left corner sits at `(x, y)`.
#[derive(Clone, Debug)]
pub struct TextObject {
    group: Collection,
    view_box: Rect,
    /// Left edge of the text block.
    pub x: Attribute<f64>,
    /// Top edge of the text block.
    pub y: Attribute<f64>,
}

impl TextObject {
    /// Render `content` and anchor it at `(x, y)`.
    pub fn new(
        renderer: &dyn TextRenderer,
        ctx: &TextContext,
        content: &str,
        x: f64,
        y: f64,
        creation: Time,
        styles: &StyleMap,
    ) -> VectorResult<Self> {
        let rendered = renderer.render(content, ctx)?;
        let styles = StyleMap::preset([
            (StyleKey::StrokeWidth, 0.0.into()),
            (StyleKey::Fill, Color::WHITE.into()),
        ])
        .merged(styles);

        let mut group = Collection::new(Vec::new(), creation);
        let mut pieces = Vec::with_capacity(rendered.fragments.len());
        for fragment in &rendered.fragments {
            let piece = PathShape::new(&fragment.d, fragment.offset, creation, &styles);
            pieces.push(piece.clone());
            group.push(Rc::new(piece));
        }

        let text = Self {
            group,
            view_box: rendered.view_box,
            x: Attribute::new(creation, x),
            y: Attribute::new(creation, y),
        };
        if !pieces.is_empty() {
            let origin = text.group.bbox(creation)?;
            for piece in &pieces {
                let x = text.x.clone();
                let y = text.y.clone();
                piece
                    .styling
                    .dx
                    .add_from_with(creation, move |t| x.at(t) - origin.x0, None);
                piece
                    .styling
                    .dy
                    .add_from_with(creation, move |t| y.at(t) - origin.y0, None);
            }
        }
        tracing::debug!(content, pieces = pieces.len(), "text object built");
        Ok(text)
    }

    /// Extent of the source document.
    pub fn view_box(&self) -> Rect {
        self.view_box
    }

    /// The per-fragment shapes.
    pub fn pieces(&self) -> &[ShapeRef] {
        self.group.children()
    }
}

impl Shape for TextObject {
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

    /// Moves the anchor; the fragments follow it.
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
        self.group.to_markup(time)
    }

    fn last_change(&self) -> Time {
        latest([
            self.group.last_change(),
            self.x.last_change(),
            self.y.last_change(),
        ])
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
#[path = "../../tests/unit/shapes/text_object.rs"]
mod tests;
