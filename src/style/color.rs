use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::animation::value::{Additive, AttrValue, Lerp};
use crate::foundation::error::{VectorError, VectorResult};

/// Color value with 0..=255 channels.
///
/// A color is either plain rgb (`a == None`) or rgba. The two kinds never mix:
/// interpolating between them is a configuration error.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel, present for rgba colors.
    pub a: Option<f64>,
}

const NAMED: &[(&str, u32)] = &[
    ("WHITE", 0xFFFFFF),
    ("BLACK", 0x000000),
    ("GRAY", 0x888888),
    ("GREY", 0x888888),
    ("LIGHT_GRAY", 0xBBBBBB),
    ("DARK_GRAY", 0x444444),
    ("BLUE", 0x58C4DD),
    ("DARK_BLUE", 0x236B8E),
    ("PURE_BLUE", 0x0000FF),
    ("TEAL", 0x5CD0B3),
    ("GREEN", 0x83C167),
    ("PURE_GREEN", 0x00FF00),
    ("YELLOW", 0xFFFF00),
    ("GOLD", 0xF0AC5F),
    ("RED", 0xFC6255),
    ("PURE_RED", 0xFF0000),
    ("MAROON", 0xC55F73),
    ("PURPLE", 0x9A72AC),
    ("PINK", 0xD147BD),
    ("ORANGE", 0xFF862F),
];

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255.0, 255.0, 255.0);

    /// Plain rgb color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    /// Color with an alpha channel (0..=255).
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    /// Rgb color from a packed `0xRRGGBB` literal.
    pub const fn hex(v: u32) -> Self {
        Self::rgb(
            ((v >> 16) & 0xff) as f64,
            ((v >> 8) & 0xff) as f64,
            (v & 0xff) as f64,
        )
    }

    /// Whether this color carries an alpha channel.
    pub fn is_rgba(&self) -> bool {
        self.a.is_some()
    }

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa` or a built-in color name.
    ///
    /// Gradient references are recognized and reported as unsupported.
    pub fn parse(s: &str) -> VectorResult<Self> {
        let s = s.trim();
        if s.starts_with("url(")
            || s.starts_with("linear-gradient")
            || s.starts_with("radial-gradient")
        {
            return Err(VectorError::unsupported(format!("gradient paint \"{s}\"")));
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        let upper = s.to_ascii_uppercase();
        NAMED
            .iter()
            .find(|(name, _)| *name == upper)
            .map(|&(_, v)| Self::hex(v))
            .ok_or_else(|| VectorError::config(format!("unknown color \"{s}\"")))
    }

    /// Build from a 3-tuple (rgb) or 4-tuple (rgba).
    pub fn from_tuple(values: &[f64]) -> VectorResult<Self> {
        match *values {
            [r, g, b] => Ok(Self::rgb(r, g, b)),
            [r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
            _ => Err(VectorError::config(format!(
                "color tuple must have 3 or 4 components, got {}",
                values.len()
            ))),
        }
    }

    /// SVG functional notation with channels rounded to integers.
    ///
    /// Alpha is written on the same 0..255 scale as the color channels, e.g.
    /// `rgba(255,0,0,128)`. CSS reads `rgba()` alpha on a 0..1 scale, so renderers treat
    /// any alpha of 1 or more as fully opaque; use the opacity styles for translucency.
    pub fn to_svg(&self) -> String {
        let round = |v: f64| v.round() as i64;
        let (r, g, b) = (round(self.r), round(self.g), round(self.b));
        match self.a {
            Some(a) => format!("rgba({r},{g},{b},{})", round(a)),
            None => format!("rgb({r},{g},{b})"),
        }
    }

    fn channels(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a.unwrap_or(0.0)]
    }

    fn with_channels(&self, c: [f64; 4]) -> Self {
        Self {
            r: c[0],
            g: c[1],
            b: c[2],
            a: self.a.map(|_| c[3]),
        }
    }
}

fn parse_hex(s: &str) -> VectorResult<Color> {
    fn nibble(s: &str, i: usize) -> VectorResult<f64> {
        let pair = s.get(i..=i).unwrap_or("").repeat(2);
        u8::from_str_radix(&pair, 16)
            .map(f64::from)
            .map_err(|_| VectorError::config(format!("invalid hex digit in \"#{s}\"")))
    }
    fn byte(s: &str, i: usize) -> VectorResult<f64> {
        let pair = s.get(i..i + 2).unwrap_or("");
        u8::from_str_radix(pair, 16)
            .map(f64::from)
            .map_err(|_| VectorError::config(format!("invalid hex byte \"{pair}\" in \"#{s}\"")))
    }

    match s.len() {
        3 => Ok(Color::rgb(nibble(s, 0)?, nibble(s, 1)?, nibble(s, 2)?)),
        6 => Ok(Color::rgb(byte(s, 0)?, byte(s, 2)?, byte(s, 4)?)),
        8 => Ok(Color::rgba(byte(s, 0)?, byte(s, 2)?, byte(s, 4)?, byte(s, 6)?)),
        _ => Err(VectorError::config(format!(
            "hex color \"#{s}\" must be #rgb, #rrggbb or #rrggbbaa"
        ))),
    }
}

impl FromStr for Color {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Arr(Vec<f64>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => Color::parse(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => Color::from_tuple(&v).map_err(serde::de::Error::custom),
        }
    }
}

impl AttrValue for Color {
    fn zero_like(&self) -> Self {
        self.with_channels([0.0; 4])
    }
}

impl Additive for Color {
    fn add(&self, other: &Self) -> Self {
        let (a, b) = (self.channels(), other.channels());
        self.with_channels([a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]])
    }
}

impl Lerp for Color {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let (ca, cb) = (a.channels(), b.channels());
        let mut out = [0.0; 4];
        for (o, (x, y)) in out.iter_mut().zip(ca.iter().zip(cb)) {
            *o = x + (y - x) * t;
        }
        a.with_channels(out)
    }

    fn check_compatible(a: &Self, b: &Self) -> VectorResult<()> {
        if a.is_rgba() != b.is_rgba() {
            return Err(VectorError::config(
                "cannot interpolate between rgb and rgba colors",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
