use crate::animation::attribute::{Attribute, Span};
use crate::animation::ease::Ease;
use crate::animation::value::AttrValue;
use crate::foundation::core::Time;
use crate::foundation::error::{VectorError, VectorResult};
use crate::style::color::Color;
use crate::style::key::{StyleGroup, StyleKey, StyleMap, StyleValue};
use crate::style::transform::TransformClause;

/// Type-erased handle to one styling attribute.
#[derive(Clone, Debug)]
pub enum StyleAttribute {
    /// Real-valued attribute.
    Real(Attribute<f64>),
    /// Color attribute.
    Color(Attribute<Color>),
    /// Text attribute.
    Text(Attribute<String>),
    /// Tuple attribute.
    Tuple(Attribute<Vec<f64>>),
}

impl StyleAttribute {
    fn new(creation: Time, value: StyleValue) -> Self {
        match value {
            StyleValue::Real(v) => Self::Real(Attribute::new(creation, v)),
            StyleValue::Color(v) => Self::Color(Attribute::new(creation, v)),
            StyleValue::Text(v) => Self::Text(Attribute::new(creation, v)),
            StyleValue::Tuple(v) => Self::Tuple(Attribute::new(creation, v)),
        }
    }

    /// Value at `time`.
    pub fn value(&self, time: Time) -> StyleValue {
        match self {
            Self::Real(a) => StyleValue::Real(a.at(time)),
            Self::Color(a) => StyleValue::Color(a.at(time)),
            Self::Text(a) => StyleValue::Text(a.at(time)),
            Self::Tuple(a) => StyleValue::Tuple(a.at(time)),
        }
    }

    /// Last change of the underlying attribute.
    pub fn last_change(&self) -> Time {
        match self {
            Self::Real(a) => a.last_change(),
            Self::Color(a) => a.last_change(),
            Self::Text(a) => a.last_change(),
            Self::Tuple(a) => a.last_change(),
        }
    }

    fn same_entity(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Real(a), Self::Real(b)) => a.same_entity(b),
            (Self::Color(a), Self::Color(b)) => a.same_entity(b),
            (Self::Text(a), Self::Text(b)) => a.same_entity(b),
            (Self::Tuple(a), Self::Tuple(b)) => a.same_entity(b),
            _ => false,
        }
    }

    /// Install a frozen copy of `source` on `span`.
    fn follow(&self, source: &Self, span: Span) -> VectorResult<()> {
        fn copy<T: AttrValue>(
            dst: &Attribute<T>,
            src: &Attribute<T>,
            span: Span,
        ) {
            let frozen = src.snapshot();
            dst.set(span, move |t| frozen.evaluate(t));
        }
        match (self, source) {
            (Self::Real(d), Self::Real(s)) => copy(d, s, span),
            (Self::Color(d), Self::Color(s)) => copy(d, s, span),
            (Self::Text(d), Self::Text(s)) => copy(d, s, span),
            (Self::Tuple(d), Self::Tuple(s)) => copy(d, s, span),
            _ => return Err(VectorError::config("style attribute kinds differ")),
        }
        Ok(())
    }

    /// Text values cannot blend; they switch at `end`.
    fn interpolate(&self, other: &Self, start: Time, end: Time, ease: Ease) -> VectorResult<Self> {
        Ok(match (self, other) {
            (Self::Real(a), Self::Real(b)) => Self::Real(a.interpolate(b, start, end, ease)?),
            (Self::Color(a), Self::Color(b)) => Self::Color(a.interpolate(b, start, end, ease)?),
            (Self::Tuple(a), Self::Tuple(b)) => Self::Tuple(a.interpolate(b, start, end, ease)?),
            (Self::Text(a), Self::Text(b)) => {
                let (from, to) = (a.at(start), b.at(end));
                Self::Text(Attribute::from_fn(end, move |t| {
                    if t < end { from.clone() } else { to.clone() }
                }))
            }
            _ => return Err(VectorError::config("style attribute kinds differ")),
        })
    }
}

macro_rules! styling_fields {
    ($($field:ident: $ty:ty => $variant:ident / $key:ident),* $(,)?) => {
        /// Bundle of the 20 styling attributes of a shape.
        ///
        /// Cloning yields a bundle whose attributes are shared handles to the same
        /// underlying attributes.
        #[derive(Clone, Debug)]
        pub struct Styling {
            $(
                #[allow(missing_docs)]
                pub $field: Attribute<$ty>,
            )*
        }

        impl Styling {
            /// Type-erased handle for `key`.
            pub fn get(&self, key: StyleKey) -> StyleAttribute {
                match key {
                    $(StyleKey::$key => StyleAttribute::$variant(self.$field.clone()),)*
                }
            }

            /// Replace the attribute stored for `key`.
            pub fn put(&mut self, key: StyleKey, attr: StyleAttribute) -> VectorResult<()> {
                match (key, attr) {
                    $((StyleKey::$key, StyleAttribute::$variant(a)) => self.$field = a,)*
                    (key, _) => {
                        return Err(VectorError::config(format!(
                            "wrong attribute kind for style \"{key}\""
                        )));
                    }
                }
                Ok(())
            }

            /// Bundle created at `creation` with every value taken from `layered` or,
            /// when absent there, from the global defaults.
            fn seeded(layered: &StyleMap, creation: Time) -> Self {
                let base = Self::defaults(creation);
                Self {
                    $(
                        $field: match layered.get(StyleKey::$key) {
                            Some(StyleValue::$variant(v)) => Attribute::new(creation, v.clone()),
                            _ => base.$field,
                        },
                    )*
                }
            }

            /// New bundle whose attributes are live aliases of this one's.
            pub fn alias(&self) -> Styling {
                Self {
                    $($field: Attribute::alias_of(&self.$field),)*
                }
            }
        }
    };
}

styling_fields! {
    opacity: f64 => Real / Opacity,
    fill: Color => Color / Fill,
    fill_opacity: f64 => Real / FillOpacity,
    stroke: Color => Color / Stroke,
    stroke_width: f64 => Real / StrokeWidth,
    stroke_opacity: f64 => Real / StrokeOpacity,
    fill_rule: String => Text / FillRule,
    stroke_dasharray: String => Text / StrokeDasharray,
    stroke_linecap: String => Text / StrokeLinecap,
    stroke_linejoin: String => Text / StrokeLinejoin,
    scale_x: f64 => Real / ScaleX,
    scale_y: f64 => Real / ScaleY,
    dx: f64 => Real / Dx,
    dy: f64 => Real / Dy,
    skew_x: f64 => Real / SkewX,
    skew_y: f64 => Real / SkewY,
    rotation: Vec<f64> => Tuple / Rotation,
    skew_x_after: f64 => Real / SkewXAfter,
    skew_y_after: f64 => Real / SkewYAfter,
    matrix: Vec<f64> => Tuple / Matrix,
}

impl Styling {
    /// Build a bundle created at `creation`.
    ///
    /// Values come from the global defaults, then `type_defaults`, then `overrides`.
    pub fn new(overrides: &StyleMap, creation: Time, type_defaults: &StyleMap) -> Self {
        Self::seeded(&type_defaults.merged(overrides), creation)
    }

    /// Bundle holding only the global defaults.
    pub fn defaults(creation: Time) -> Self {
        Self {
            opacity: Attribute::new(creation, 1.0),
            fill: Attribute::new(creation, Color::BLACK),
            fill_opacity: Attribute::new(creation, 1.0),
            stroke: Attribute::new(creation, Color::BLACK),
            stroke_width: Attribute::new(creation, 1.0),
            stroke_opacity: Attribute::new(creation, 1.0),
            fill_rule: Attribute::new(creation, "nonzero".to_owned()),
            stroke_dasharray: Attribute::new(creation, String::new()),
            stroke_linecap: Attribute::new(creation, "butt".to_owned()),
            stroke_linejoin: Attribute::new(creation, "miter".to_owned()),
            scale_x: Attribute::new(creation, 1.0),
            scale_y: Attribute::new(creation, 1.0),
            dx: Attribute::new(creation, 0.0),
            dy: Attribute::new(creation, 0.0),
            skew_x: Attribute::new(creation, 0.0),
            skew_y: Attribute::new(creation, 0.0),
            rotation: Attribute::new(creation, vec![0.0; 3]),
            skew_x_after: Attribute::new(creation, 0.0),
            skew_y_after: Attribute::new(creation, 0.0),
            matrix: Attribute::new(creation, vec![0.0; 6]),
        }
    }

    /// Whether every attribute of both bundles is the same shared handle.
    pub fn same_entity(&self, other: &Styling) -> bool {
        StyleKey::ALL
            .into_iter()
            .all(|key| self.get(key).same_entity(&other.get(key)))
    }

    /// Max `last_change` over all attributes.
    pub fn last_change(&self) -> Time {
        StyleKey::ALL
            .into_iter()
            .map(|key| self.get(key).last_change())
            .fold(Time::NEG_INFINITY, f64::max)
    }

    /// Style bundle easing from `self` at `start` to `other` at `end`.
    ///
    /// Components whose endpoint values agree keep following `self` on `[start, end]`.
    pub fn interpolate(
        &self,
        other: &Styling,
        start: Time,
        end: Time,
        ease: Ease,
    ) -> VectorResult<Styling> {
        if self.same_entity(other) {
            return Ok(self.clone());
        }
        let mut out = Styling::defaults(start);
        for key in StyleKey::ALL {
            let (a, b) = (self.get(key), other.get(key));
            if a.value(start) == b.value(end) {
                out.get(key).follow(&a, Span::new(start, end))?;
            } else {
                out.put(key, a.interpolate(&b, start, end, ease)?)?;
            }
        }
        Ok(out)
    }

    /// Transform chain at `time`; clauses equal to their defaults are omitted.
    pub fn transform_clauses(&self, time: Time) -> Vec<TransformClause> {
        let mut out = Vec::new();
        let (dx, dy) = (self.dx.at(time), self.dy.at(time));
        if dx != 0.0 || dy != 0.0 {
            out.push(TransformClause::Translate(dx, dy));
        }
        let (sx, sy) = (self.scale_x.at(time), self.scale_y.at(time));
        if sx != 1.0 || sy != 1.0 {
            out.push(TransformClause::Scale(sx, sy));
        }
        let skew_x = self.skew_x.at(time);
        if skew_x != 0.0 {
            out.push(TransformClause::SkewX(skew_x));
        }
        let skew_y = self.skew_y.at(time);
        if skew_y != 0.0 {
            out.push(TransformClause::SkewY(skew_y));
        }
        let rotation = self.rotation.at(time);
        if rotation.iter().any(|v| *v != 0.0) {
            let at = |i: usize| rotation.get(i).copied().unwrap_or(0.0);
            out.push(TransformClause::Rotate {
                angle: at(0).rem_euclid(360.0),
                cx: at(1),
                cy: at(2),
            });
        }
        let skew_x_after = self.skew_x_after.at(time);
        if skew_x_after != 0.0 {
            out.push(TransformClause::SkewX(skew_x_after));
        }
        let skew_y_after = self.skew_y_after.at(time);
        if skew_y_after != 0.0 {
            out.push(TransformClause::SkewY(skew_y_after));
        }
        let matrix = self.matrix.at(time);
        if matrix.iter().any(|v| *v != 0.0) {
            let mut m = [0.0; 6];
            for (dst, src) in m.iter_mut().zip(&matrix) {
                *dst = *src;
            }
            out.push(TransformClause::Matrix(m));
        }
        out
    }

    /// `transform` attribute value at `time` (empty when no clause applies).
    pub fn transform_markup(&self, time: Time) -> String {
        TransformClause::format_list(&self.transform_clauses(time))
    }

    /// Presentation attributes differing from the global defaults, then `transform`.
    ///
    /// Every entry is prefixed by a space, e.g. ` fill='rgb(255,255,255)'`.
    pub fn presentation_markup(&self, time: Time) -> String {
        let mut out = String::new();
        for key in StyleKey::ALL {
            if key.group() != StyleGroup::Presentation {
                continue;
            }
            let value = self.get(key).value(time);
            if value != key.default_value() {
                out.push_str(&format!(" {}='{}'", key.svg_name(), value));
            }
        }
        let transform = self.transform_markup(time);
        if !transform.is_empty() {
            out.push_str(&format!(" transform='{transform}'"));
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/styling.rs"]
mod tests;
