use std::fmt;

use crate::foundation::error::{VectorError, VectorResult};

/// One clause of an SVG `transform` attribute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformClause {
    /// `translate(x,y)`.
    Translate(f64, f64),
    /// `scale(x,y)`.
    Scale(f64, f64),
    /// `skewX(angle)`.
    SkewX(f64),
    /// `skewY(angle)`.
    SkewY(f64),
    /// `rotate(angle,cx,cy)`.
    Rotate {
        /// Degrees.
        angle: f64,
        /// Pivot x.
        cx: f64,
        /// Pivot y.
        cy: f64,
    },
    /// `matrix(a,b,c,d,e,f)`.
    Matrix([f64; 6]),
}

impl TransformClause {
    /// Parse a whitespace separated transform list such as `translate(1,2) scale(3)`.
    pub fn parse_list(s: &str) -> VectorResult<Vec<Self>> {
        let mut out = Vec::new();
        let mut rest = s.trim();
        while !rest.is_empty() {
            let open = rest
                .find('(')
                .ok_or_else(|| VectorError::config(format!("malformed transform \"{s}\"")))?;
            let close = rest
                .find(')')
                .ok_or_else(|| VectorError::config(format!("unterminated transform \"{s}\"")))?;
            if close < open {
                return Err(VectorError::config(format!("malformed transform \"{s}\"")));
            }
            let name = rest[..open].trim().trim_start_matches(',').trim();
            let args = rest[open + 1..close]
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|p| !p.is_empty())
                .map(|p| {
                    p.parse::<f64>().map_err(|_| {
                        VectorError::config(format!("bad number \"{p}\" in transform \"{s}\""))
                    })
                })
                .collect::<VectorResult<Vec<f64>>>()?;
            out.push(Self::from_parts(name, &args)?);
            rest = rest[close + 1..].trim_start_matches(|c: char| c == ',' || c.is_whitespace());
        }
        Ok(out)
    }

    fn from_parts(name: &str, args: &[f64]) -> VectorResult<Self> {
        let clause = match (name, args) {
            ("translate", [x]) => Self::Translate(*x, 0.0),
            ("translate", [x, y]) => Self::Translate(*x, *y),
            ("scale", [s]) => Self::Scale(*s, *s),
            ("scale", [x, y]) => Self::Scale(*x, *y),
            ("skewX", [a]) => Self::SkewX(*a),
            ("skewY", [a]) => Self::SkewY(*a),
            ("rotate", [a]) => Self::Rotate {
                angle: *a,
                cx: 0.0,
                cy: 0.0,
            },
            ("rotate", [a, cx, cy]) => Self::Rotate {
                angle: *a,
                cx: *cx,
                cy: *cy,
            },
            ("matrix", [a, b, c, d, e, f]) => Self::Matrix([*a, *b, *c, *d, *e, *f]),
            _ => {
                return Err(VectorError::config(format!(
                    "malformed transform clause {name}({args:?})"
                )));
            }
        };
        Ok(clause)
    }

    /// SVG keyword of this clause.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Translate(..) => "translate",
            Self::Scale(..) => "scale",
            Self::SkewX(_) => "skewX",
            Self::SkewY(_) => "skewY",
            Self::Rotate { .. } => "rotate",
            Self::Matrix(_) => "matrix",
        }
    }

    /// Format a chain as a `transform` attribute value.
    pub fn format_list(clauses: &[Self]) -> String {
        clauses
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for TransformClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Translate(x, y) => write!(f, "translate({x},{y})"),
            Self::Scale(x, y) => write!(f, "scale({x},{y})"),
            Self::SkewX(a) => write!(f, "skewX({a})"),
            Self::SkewY(a) => write!(f, "skewY({a})"),
            Self::Rotate { angle, cx, cy } => write!(f, "rotate({angle},{cx},{cy})"),
            Self::Matrix([a, b, c, d, e, g]) => write!(f, "matrix({a},{b},{c},{d},{e},{g})"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/transform.rs"]
mod tests;
