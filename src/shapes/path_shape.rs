use crate::animation::attribute::Attribute;
use crate::animation::ease::Ease;
use crate::foundation::core::{Point, Time};
use crate::foundation::error::VectorResult;
use crate::geometry::path::Path;
use crate::shapes::{Shape, ShapeKind, latest, shift_real};
use crate::style::color::Color;
use crate::style::key::{StyleKey, StyleMap};
use crate::style::styling::Styling;

/// Free-form SVG path whose data string is itself animated.
///
/// The position is carried by the styling's `dx`/`dy` translation, scaled by
/// `scale_x`/`scale_y` so that it stays put in scaled coordinates.
#[derive(Clone, Debug)]
pub struct PathShape {
    /// Path data.
    pub d: Attribute<String>,
    /// Visibility.
    pub show: Attribute<bool>,
    /// Draw order.
    pub z: Attribute<f64>,
    /// Presentation and transform.
    pub styling: Styling,
}

impl PathShape {
    /// Path with data `d` placed at `position`.
    pub fn new(d: &str, position: Point, creation: Time, styles: &StyleMap) -> Self {
        let defaults = StyleMap::preset([(StyleKey::Stroke, Color::WHITE.into())]);
        let shape = Self::with_styling(d, creation, Styling::new(styles, creation, &defaults));
        if position != Point::ZERO {
            let (sx, sy) = (shape.styling.scale_x.clone(), shape.styling.scale_y.clone());
            shape
                .styling
                .dx
                .add_from_with(creation, move |t| position.x * sx.at(t), None);
            shape
                .styling
                .dy
                .add_from_with(creation, move |t| position.y * sy.at(t), None);
        }
        shape
    }

    /// Path using an existing styling bundle, at the origin.
    pub fn with_styling(d: &str, creation: Time, styling: Styling) -> Self {
        Self {
            d: Attribute::new(creation, d.to_owned()),
            show: Attribute::new(creation, true),
            z: Attribute::new(creation, 0.0),
            styling,
        }
    }
}

impl Shape for PathShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Path
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
        Path::parse(&self.d.at(time))
    }

    fn shift(
        &self,
        dx: f64,
        dy: f64,
        start: Time,
        end: Option<Time>,
        ease: Ease,
    ) -> VectorResult<()> {
        shift_real(&self.styling.dx, dx, start, end, ease);
        shift_real(&self.styling.dy, dy, start, end, ease);
        Ok(())
    }

    fn to_markup(&self, time: Time) -> String {
        format!(
            "<path d='{}'{} />",
            self.d.at(time),
            self.styling.presentation_markup(time)
        )
    }

    fn last_change(&self) -> Time {
        latest([
            self.d.last_change(),
            self.styling.last_change(),
            self.z.last_change(),
            self.show.last_change(),
        ])
    }

    fn visit_leaves(&self, f: &mut dyn FnMut(&dyn Shape)) {
        f(self);
    }
}
