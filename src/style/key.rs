use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{VectorError, VectorResult};
use crate::style::color::Color;

/// Which part of the SVG output a style key feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleGroup {
    /// Presentation attribute (`fill`, `stroke-width`, ...).
    Presentation,
    /// Component of the `transform` chain.
    Transform,
}

/// Shape of the value a key accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// Real number.
    Real,
    /// Color.
    Color,
    /// Free text.
    Text,
    /// Tuple of reals with a fixed arity.
    Tuple(usize),
}

/// Closed set of style names a [`Styling`](crate::Styling) carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum StyleKey {
    Opacity,
    Fill,
    FillOpacity,
    Stroke,
    StrokeWidth,
    StrokeOpacity,
    FillRule,
    StrokeDasharray,
    StrokeLinecap,
    StrokeLinejoin,
    ScaleX,
    ScaleY,
    Dx,
    Dy,
    SkewX,
    SkewY,
    Rotation,
    SkewXAfter,
    SkewYAfter,
    Matrix,
}

impl StyleKey {
    /// Every key, presentation keys first, in serialization order.
    pub const ALL: [StyleKey; 20] = [
        StyleKey::Opacity,
        StyleKey::Fill,
        StyleKey::FillOpacity,
        StyleKey::Stroke,
        StyleKey::StrokeWidth,
        StyleKey::StrokeOpacity,
        StyleKey::FillRule,
        StyleKey::StrokeDasharray,
        StyleKey::StrokeLinecap,
        StyleKey::StrokeLinejoin,
        StyleKey::ScaleX,
        StyleKey::ScaleY,
        StyleKey::Dx,
        StyleKey::Dy,
        StyleKey::SkewX,
        StyleKey::SkewY,
        StyleKey::Rotation,
        StyleKey::SkewXAfter,
        StyleKey::SkewYAfter,
        StyleKey::Matrix,
    ];

    /// Canonical snake_case name.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleKey::Opacity => "opacity",
            StyleKey::Fill => "fill",
            StyleKey::FillOpacity => "fill_opacity",
            StyleKey::Stroke => "stroke",
            StyleKey::StrokeWidth => "stroke_width",
            StyleKey::StrokeOpacity => "stroke_opacity",
            StyleKey::FillRule => "fill_rule",
            StyleKey::StrokeDasharray => "stroke_dasharray",
            StyleKey::StrokeLinecap => "stroke_linecap",
            StyleKey::StrokeLinejoin => "stroke_linejoin",
            StyleKey::ScaleX => "scale_x",
            StyleKey::ScaleY => "scale_y",
            StyleKey::Dx => "dx",
            StyleKey::Dy => "dy",
            StyleKey::SkewX => "skew_x",
            StyleKey::SkewY => "skew_y",
            StyleKey::Rotation => "rotation",
            StyleKey::SkewXAfter => "skew_x_after",
            StyleKey::SkewYAfter => "skew_y_after",
            StyleKey::Matrix => "matrix",
        }
    }

    /// SVG attribute name (hyphenated). Only meaningful for presentation keys.
    pub fn svg_name(self) -> String {
        self.as_str().replace('_', "-")
    }

    /// Group this key belongs to.
    pub fn group(self) -> StyleGroup {
        match self {
            StyleKey::Opacity
            | StyleKey::Fill
            | StyleKey::FillOpacity
            | StyleKey::Stroke
            | StyleKey::StrokeWidth
            | StyleKey::StrokeOpacity
            | StyleKey::FillRule
            | StyleKey::StrokeDasharray
            | StyleKey::StrokeLinecap
            | StyleKey::StrokeLinejoin => StyleGroup::Presentation,
            _ => StyleGroup::Transform,
        }
    }

    /// Value kind this key accepts.
    pub fn value_kind(self) -> ValueKind {
        match self {
            StyleKey::Fill | StyleKey::Stroke => ValueKind::Color,
            StyleKey::FillRule
            | StyleKey::StrokeDasharray
            | StyleKey::StrokeLinecap
            | StyleKey::StrokeLinejoin => ValueKind::Text,
            StyleKey::Rotation => ValueKind::Tuple(3),
            StyleKey::Matrix => ValueKind::Tuple(6),
            _ => ValueKind::Real,
        }
    }

    /// Global default value.
    pub fn default_value(self) -> StyleValue {
        match self {
            StyleKey::Opacity
            | StyleKey::FillOpacity
            | StyleKey::StrokeWidth
            | StyleKey::StrokeOpacity
            | StyleKey::ScaleX
            | StyleKey::ScaleY => StyleValue::Real(1.0),
            StyleKey::Fill | StyleKey::Stroke => StyleValue::Color(Color::BLACK),
            StyleKey::FillRule => StyleValue::Text("nonzero".to_owned()),
            StyleKey::StrokeDasharray => StyleValue::Text(String::new()),
            StyleKey::StrokeLinecap => StyleValue::Text("butt".to_owned()),
            StyleKey::StrokeLinejoin => StyleValue::Text("miter".to_owned()),
            StyleKey::Rotation => StyleValue::Tuple(vec![0.0; 3]),
            StyleKey::Matrix => StyleValue::Tuple(vec![0.0; 6]),
            StyleKey::Dx
            | StyleKey::Dy
            | StyleKey::SkewX
            | StyleKey::SkewY
            | StyleKey::SkewXAfter
            | StyleKey::SkewYAfter => StyleValue::Real(0.0),
        }
    }

    /// Coerce `value` into the kind this key accepts.
    ///
    /// Colors may be given as text or tuples; everything else must match exactly.
    pub fn coerce(self, value: StyleValue) -> VectorResult<StyleValue> {
        let mismatch = |v: &StyleValue| {
            VectorError::config(format!(
                "style \"{}\" expects {:?}, got {v:?}",
                self.as_str(),
                self.value_kind()
            ))
        };
        match (self.value_kind(), value) {
            (ValueKind::Real, v @ StyleValue::Real(_)) => Ok(v),
            (ValueKind::Color, v @ StyleValue::Color(_)) => Ok(v),
            (ValueKind::Color, StyleValue::Text(s)) => Ok(StyleValue::Color(Color::parse(&s)?)),
            (ValueKind::Color, StyleValue::Tuple(t)) => {
                Ok(StyleValue::Color(Color::from_tuple(&t)?))
            }
            (ValueKind::Text, v @ StyleValue::Text(_)) => Ok(v),
            (ValueKind::Text, StyleValue::Real(x)) => Ok(StyleValue::Text(x.to_string())),
            (ValueKind::Tuple(n), StyleValue::Tuple(t)) if t.len() == n => Ok(StyleValue::Tuple(t)),
            (_, v) => Err(mismatch(&v)),
        }
    }
}

impl FromStr for StyleKey {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        StyleKey::ALL
            .into_iter()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| VectorError::config(format!("unknown style \"{s}\"")))
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete style value.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// Real number.
    Real(f64),
    /// Parsed color.
    Color(Color),
    /// Free text (also accepted for colors, parsed on insertion).
    Text(String),
    /// Tuple of reals.
    Tuple(Vec<f64>),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Real(x) => write!(f, "{x}"),
            StyleValue::Color(c) => write!(f, "{c}"),
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Tuple(t) => {
                for (i, x) in t.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{x}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        StyleValue::Real(v)
    }
}

impl From<Color> for StyleValue {
    fn from(v: Color) -> Self {
        StyleValue::Color(v)
    }
}

impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        StyleValue::Text(v.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(v: String) -> Self {
        StyleValue::Text(v)
    }
}

impl From<Vec<f64>> for StyleValue {
    fn from(v: Vec<f64>) -> Self {
        StyleValue::Tuple(v)
    }
}

impl<const N: usize> From<[f64; N]> for StyleValue {
    fn from(v: [f64; N]) -> Self {
        StyleValue::Tuple(v.to_vec())
    }
}

/// Validated style overrides, keyed by [`StyleKey`].
///
/// Every stored value already has the kind its key accepts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleMap {
    entries: BTreeMap<StyleKey, StyleValue>,
}

impl StyleMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value after coercing it to the key's kind.
    pub fn insert(&mut self, key: StyleKey, value: impl Into<StyleValue>) -> VectorResult<()> {
        let value = key.coerce(value.into())?;
        self.entries.insert(key, value);
        Ok(())
    }

    /// Builder form of [`StyleMap::insert`] taking a style name.
    pub fn with(mut self, name: &str, value: impl Into<StyleValue>) -> VectorResult<Self> {
        self.insert(name.parse()?, value)?;
        Ok(self)
    }

    /// Builder form of [`StyleMap::insert`].
    pub fn with_key(mut self, key: StyleKey, value: impl Into<StyleValue>) -> VectorResult<Self> {
        self.insert(key, value)?;
        Ok(self)
    }

    /// Pre-typed entries; values that do not coerce are skipped with a warning.
    pub(crate) fn preset(entries: impl IntoIterator<Item = (StyleKey, StyleValue)>) -> Self {
        let mut map = Self::new();
        for (key, value) in entries {
            if let Err(err) = map.insert(key, value) {
                tracing::warn!(key = key.as_str(), %err, "dropping invalid preset style");
            }
        }
        map
    }

    /// Value stored for `key`.
    pub fn get(&self, key: StyleKey) -> Option<&StyleValue> {
        self.entries.get(&key)
    }

    /// Iterate over stored entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `self` with entries from `over` taking precedence.
    pub fn merged(&self, over: &StyleMap) -> StyleMap {
        let mut entries = self.entries.clone();
        entries.extend(over.entries.iter().map(|(k, v)| (*k, v.clone())));
        StyleMap { entries }
    }

    /// Build overrides from a JSON object such as `{"fill": "#fff", "stroke_width": 3}`.
    pub fn from_json(value: &serde_json::Value) -> VectorResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| VectorError::serde("style overrides must be a JSON object"))?;
        let mut map = Self::new();
        for (name, raw) in object {
            let key: StyleKey = name.parse()?;
            let value = match raw {
                serde_json::Value::Number(n) => StyleValue::Real(
                    n.as_f64()
                        .ok_or_else(|| VectorError::serde(format!("\"{name}\" is not finite")))?,
                ),
                serde_json::Value::String(s) => StyleValue::Text(s.clone()),
                serde_json::Value::Array(items) => StyleValue::Tuple(
                    items
                        .iter()
                        .map(|x| {
                            x.as_f64().ok_or_else(|| {
                                VectorError::serde(format!("\"{name}\" must hold numbers"))
                            })
                        })
                        .collect::<VectorResult<_>>()?,
                ),
                other => {
                    return Err(VectorError::serde(format!(
                        "unsupported JSON value for \"{name}\": {other}"
                    )));
                }
            };
            map.insert(key, value)?;
        }
        Ok(map)
    }

    /// Parse a JSON document into overrides.
    pub fn from_json_str(s: &str) -> VectorResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(s).map_err(|e| VectorError::serde(e.to_string()))?;
        Self::from_json(&value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/key.rs"]
mod tests;
